//! daily-muse — minimal content site generator.
//!
//! A flat JSON store of quotes and poems, a deterministic daily selector,
//! a static page renderer, and a local-only admin app for editing the store.

pub mod apod;
pub mod config;
pub mod error;
pub mod publish;
pub mod render;
pub mod select;
pub mod server;
pub mod store;
