// textscan/src/lib.rs
//! # TextScan CLI Application
//!
//! This crate provides the command-line interface for the `textscan-core`
//! scanning library: extraction, validation, and pattern replacement over
//! text supplied as an argument or on stdin.

pub mod cli;
pub mod commands;
pub mod logger;
