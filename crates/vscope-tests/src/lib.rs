//! Integration tests for vscope-rs crates.
//!
//! End-to-end scenarios running whole frames through
//! [`vscope_ops::Vectorscope`].
