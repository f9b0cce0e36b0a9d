//! glotsync - translation catalog extraction and synchronization
//!
//! glotsync finds hardcoded localizable text in source files and suggests
//! structured catalog keys for it, then keeps every locale catalog
//! structurally in line with a single master catalog while preserving
//! existing translations and marking what still needs translating.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, catalog model, synchronizer, store and lookup
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
