// file: src/cli/mod.rs
// version: 1.0.0
// guid: 73a0e5c2-18d6-4b9f-8c43-d61f2a07e938

//! Command line interface module

pub mod args;
pub mod commands;
