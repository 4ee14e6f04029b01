// src/api/mod.rs

//! # API Module
//!
//! Request handlers and the shared application state.

pub mod recommend;
pub mod state;
