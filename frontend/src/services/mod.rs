//! Browser-side services.
//!
//! # Services
//!
//! - [`predict`] - image upload to the prediction backend
//! - [`browser_file`] - reading picked or dropped files
//! - [`notify`] - toast notifications

pub mod predict;
pub mod browser_file;
pub mod notify;

pub use predict::*;
pub use browser_file::*;
pub use notify::*;
