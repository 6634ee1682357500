//! Shared utilities for the Stakehold contract suite.
//!
//! This crate provides:
//! - [`access`] — administrator identity and the global pause flag.
//!
//! The helpers here are storage primitives with plain `bool`/`Option`
//! returns; each contract maps them onto its own error codes.

#![no_std]

pub mod access;

pub use access::*;
