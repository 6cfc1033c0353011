// src/profile/source.rs
//! Where profile records come from.
//!
//! `ProfileSource` is the only seam between URL handling and data production.
//! `SampleSource` fabricates placeholder data: name and company are derived
//! from a hash of the URL, everything else is drawn from its RNG. Seed it for
//! reproducible batches.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::consts::MAX_CERTS_PER_PROFILE;
use crate::core::url::is_profile_url;
use crate::error::Result;

use super::catalog::CATALOG;
use super::model::{CertDate, Certification, ProfileRecord};

/// Capability: turn one URL into one record.
pub trait ProfileSource {
    /// `Ok(None)` when `url` is not a profile URL.
    /// `Err(Error::Extraction { .. })` when a valid URL could not be read.
    fn fetch_profile(&mut self, url: &str) -> Result<Option<ProfileRecord>>;
}

impl<S: ProfileSource + ?Sized> ProfileSource for &mut S {
    fn fetch_profile(&mut self, url: &str) -> Result<Option<ProfileRecord>> {
        (**self).fetch_profile(url)
    }
}

impl<S: ProfileSource + ?Sized> ProfileSource for Box<S> {
    fn fetch_profile(&mut self, url: &str) -> Result<Option<ProfileRecord>> {
        (**self).fetch_profile(url)
    }
}

pub const SAMPLE_TITLES: &[&str] = &[
    "HR Manager",
    "Senior HR Business Partner",
    "Talent Acquisition Specialist",
    "Compensation Analyst",
    "HR Director",
    "People Operations Manager",
    "Recruiting Manager",
    "Employee Relations Specialist",
    "Learning and Development Manager",
];

pub const SAMPLE_DEPARTMENT: &str = "HR";
pub const SAMPLE_LOCATION: &str = "USA";

const ISSUED_YEARS: std::ops::RangeInclusive<u16> = 2020..=2024;
const RENEWAL_YEARS: std::ops::RangeInclusive<u16> = 2025..=2027;

/// Placeholder generator. No network access.
pub struct SampleSource {
    rng: StdRng,
}

impl SampleSource {
    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    fn job_title(&mut self) -> &'static str {
        SAMPLE_TITLES[self.rng.gen_range(0..SAMPLE_TITLES.len())]
    }

    fn certifications(&mut self) -> Vec<Certification> {
        let n = self.rng.gen_range(0..=MAX_CERTS_PER_PROFILE);
        (0..n)
            .map(|_| {
                let entry = &CATALOG[self.rng.gen_range(0..CATALOG.len())];
                let issued = CertDate::new(self.rng.gen_range(1..=12), self.rng.gen_range(ISSUED_YEARS));
                let renewal = CertDate::new(self.rng.gen_range(1..=12), self.rng.gen_range(RENEWAL_YEARS));
                Certification::from_catalog(entry, issued, renewal)
            })
            .collect()
    }
}

impl ProfileSource for SampleSource {
    fn fetch_profile(&mut self, url: &str) -> Result<Option<ProfileRecord>> {
        if !is_profile_url(url) {
            return Ok(None);
        }
        let h = url_hash(url);
        let record = ProfileRecord {
            profile_url: url.trim().to_string(),
            profile_name: format!("Sample User {}", h % 1000),
            company_name: format!("Company {}", h % 100),
            job_title: s!(self.job_title()),
            department: Some(s!(SAMPLE_DEPARTMENT)),
            location: s!(SAMPLE_LOCATION),
            certifications: self.certifications(),
        };
        Ok(Some(record))
    }
}

fn url_hash(url: &str) -> u64 {
    let mut h = DefaultHasher::new();
    url.trim().hash(&mut h);
    h.finish()
}
