// file: src/logging/mod.rs
// version: 1.0.0
// guid: 4a7e92d0-63b1-48cf-8a5d-0e92c17f38b4

//! Logging module

pub mod logger;
