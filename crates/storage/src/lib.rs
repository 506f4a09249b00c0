//! Log source abstraction and implementations for the OJT engine.
//!
//! The engine never owns attendance data. This crate defines the boundary it
//! reads snapshots through, with a JSON file reference implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;

pub use trait_::{LogSource, StorageError, Result};
pub use json_storage::JsonLogSource;
