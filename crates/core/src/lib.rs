//! Mercadito Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront binary:
//! products, cart snapshots, and price formatting.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no session
//! machinery. Catalog loading and request handling live in the
//! `storefront` crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
