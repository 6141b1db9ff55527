//! Mercadito Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the binary in `main.rs`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod nav;
pub mod routes;
pub mod state;
