//! Showcase adapter
//!
//! HTTP client for the showcase (listing) service.

pub mod client;

pub use client::ShowcaseClientImpl;
