//! Filesystem adapters: cost table config, roster import, report export.

pub mod cost_table_store;
pub mod export;
pub mod roster;
