// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod log;
pub mod specs;

pub mod data;
pub mod matcher;
pub mod report;

pub mod csv;
pub mod file;
pub mod gui;
pub mod store;

pub use data::{Entry, Snapshot};
pub use matcher::find;
pub use report::generate;
pub use specs::ranking::extract;
