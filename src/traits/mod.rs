//! Trait definitions for Börsdata operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! endpoint differences in the implementations.

mod list;

pub use list::List;
