//! Front-end tests
//!
//! Tests for:
//! - Modal tokenizing
//! - Line grammar and recovery
