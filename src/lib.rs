//! Menu Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
/// Menu domain: item model, file-backed store, and CRUD service
pub mod menu;
