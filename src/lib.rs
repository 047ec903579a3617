//! Project bootstrap utilities for data-science repositories.
//!
//! # Core Concepts
//!
//! Two independent utilities share this crate and never feed each other:
//!
//! - [`installer`]: reads a requirements file and issues one blocking
//!   package-manager invocation per specifier, best effort.
//! - [`scaffold`]: materializes the conventional project skeleton and marks
//!   empty directories so version control can track them.
//!
//! [`models`] holds the pure data both run on: the hardcoded
//! [`models::ProjectLayout`] and the parsed [`models::Requirements`].

pub mod installer;
pub mod models;
pub mod scaffold;
