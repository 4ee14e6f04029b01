//! # Food Recommendation Backend
//!
//! HTTP backend for the restaurant discovery frontend. Exposes a
//! health-check root route and a `/recommend` route; recommendation
//! ranking is not implemented yet, so `/recommend` always answers with
//! the default list.

pub mod api;
pub mod models;
pub mod routes;
pub mod services;
