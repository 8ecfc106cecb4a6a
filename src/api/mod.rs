//! API module
//!
//! Contains HTTP request handlers for the menu endpoints

pub mod items;
