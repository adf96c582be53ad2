// file: src/utils/mod.rs
// version: 1.0.0
// guid: 95c2d7e0-4b61-4f38-a0c9-8d52e1f7b364

//! Utility modules

pub mod system;

pub use system::SystemUtils;
