// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod profile;

pub mod cli;
pub mod data;
pub mod delimited;
pub mod file;
pub mod gui;
pub mod input;
pub mod progress;

pub use error::{Error, Result};
