// src/specs/mod.rs
//! # Page “specs” module
//!
//! Each spec knows the markup of one published page and how to turn it into
//! typed records. Input is text the user copied or saved from the page; a spec
//! never fetches, caches or renders anything.
//!
//! ## What lives here
//! - **Line classification**: which fragments open a record, carry a field,
//!   or close it (see `ranking::RULES`).
//! - **Tolerant extraction**: unknown lines are skipped, incomplete records are
//!   dropped, entities/tags inside captured cells are cleaned with `core::html`.
//!
//! ## What does **not** live here
//! - Locating files on disk (`store`), report wording (`report`), exports (`file`).
//! - Matching entities across years (`matcher`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → store::load_* → specs::ranking::extract()
//!                                 ↘ Snapshot (page order)
//!           → report::generate(token, label, current, previous)
//! ```
//!
//! ## Conventions & invariants
//! - One line is classified on its own; nothing spans lines except the
//!   record being assembled.
//! - Page order is preserved. No sorting, no dedup.
//!
//! In short: **`specs` knows how to read the pages.**
pub mod ranking;
