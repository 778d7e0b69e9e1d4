//! Small shared string utilities
//!
//! This crate is published as a versioned artifact and consumed by
//! downstream applications (see consumer-app for an example). It
//! currently exposes a single truncation helper.

pub mod strings;

pub use strings::take_first;
