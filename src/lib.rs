//! `signup-backend` - a small HTTP service behind a sign-up page.
//!
//! Serves the sign-up form, validates that every field is filled in, and
//! appends accepted submissions to a local CSV file.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use store::{CsvStore, UserRecord};
