// src/gui/components/mod.rs
pub mod data_table;
pub mod report_view;
pub mod search_bar;
pub mod source_panel;
