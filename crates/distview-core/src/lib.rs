//! Core types shared by the distview crates
//!
//! - [`Error`] and [`Result`]: the error taxonomy every crate reports through
//! - [`Sample`]: a validated, immutable, non-empty set of finite values
//! - [`SessionConfig`]: limits and defaults for a distribution session

pub mod config;
pub mod error;
pub mod sample;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use sample::Sample;
