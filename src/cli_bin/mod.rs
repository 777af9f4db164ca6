//! CLI module for the healthbot command-line interface
//!
//! Argument parsing plus the startup and read-answer loop around the library.

pub mod args;
pub mod commands;
