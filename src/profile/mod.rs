// src/profile/mod.rs
//! # Profile processing
//!
//! Everything between "a list of URL strings" and "an ordered list of table rows".
//!
//! ## Layers
//! - `model`: ProfileRecord / Certification / OutputRow, plus the flattening rule.
//! - `catalog`: the fixed credential catalog (code → provider, type).
//! - `source`: the `ProfileSource` seam. `SampleSource` fabricates records;
//!   a real extractor would implement the same trait.
//! - `processor`: `ProfileProcessor`, which validates, fetches, classifies and
//!   flattens a batch in input order.
//!
//! ## Invariants
//! - One record per valid URL; invalid URLs never produce rows.
//! - rows == Σ max(1, certifications) over processed profiles.
//! - Input order and certification order are preserved.
//!
//! In short: **`profile` shapes data.** Front ends decide where URLs come from
//! and what happens to the rows.
pub mod catalog;
pub mod model;
pub mod processor;
pub mod source;

pub use catalog::{CatalogEntry, CATALOG};
pub use model::{CertDate, Certification, OutputRow, ProfileRecord};
pub use processor::{BatchReport, ProfileProcessor, SkipReason, Skipped};
pub use source::{ProfileSource, SampleSource};
