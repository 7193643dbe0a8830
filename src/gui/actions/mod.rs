// src/gui/actions/mod.rs
mod copy;
mod export;
mod generate;
mod load;

pub use copy::copy;
pub use export::{export_data, export_report};
pub use generate::generate;
pub use load::{load_data_dir, load_files};

/// Which of the two loaded snapshots an action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Year {
    Current,
    Previous,
}
