// src/config/mod.rs
//! Service-level configuration. The lexicon itself is compiled in and is
//! not configurable.

pub mod service;

pub use service::{ServiceConfig, DEFAULT_CONFIG_PATH, ENV_CONFIG_PATH};
