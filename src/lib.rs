//! Vehicle recommendation service
//!
//! Extracts per-attribute sentiment from a car buyer's feedback and suggests
//! an alternative vehicle that compensates for what they disliked most.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
