//! Trixel
//!
//! Low-poly triangle pixelation for PNG images.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
