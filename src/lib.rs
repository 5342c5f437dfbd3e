//! docgate library.
//!
//! Pre-commit documentation gate: blocks a commit when the project no longer
//! compiles or a touched feature lacks its required documents.

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod hook;

pub use error::Error;
