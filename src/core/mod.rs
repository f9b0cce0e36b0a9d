//! Extraction and synchronization engine. Everything here is independent of
//! the command line and takes its settings as explicit arguments.

pub mod catalog;
pub mod error;
pub mod fragment;
pub mod lookup;
pub mod pending;
pub mod scanner;
pub mod slug;
pub mod store;
pub mod sync;

pub use error::{Error, Result, UnitFailure};
