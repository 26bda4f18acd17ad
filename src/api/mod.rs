//! HTTP API
//!
//! Client-side access to the EDmin REST API.

mod client;

pub use client::*;
