// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Application plumbing goes through `anyhow`; the structured, fatal layout
//! errors live in [`crate::project::ProjectError`].

pub use anyhow::{Error, Result};
