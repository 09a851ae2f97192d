//! Precomputed recommendation feed server.
//!
//! Feeds are generated up front and held in memory; each request pages
//! through the caller's feed and tops up any shortfall from a curated
//! fallback pool.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;
pub mod updater;
