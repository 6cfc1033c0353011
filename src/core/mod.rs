// src/core/mod.rs

pub mod keywords;
pub mod sanitize;
pub mod url;
