// src/profile/model.rs
use std::fmt;

use crate::core::keywords;

use super::catalog::CatalogEntry;

/// Month/year pair shown as `MM/YYYY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CertDate {
    pub year: u16,
    pub month: u8,
}

impl CertDate {
    /// `month` is clamped into 1..=12.
    pub fn new(month: u8, year: u16) -> Self {
        Self { year, month: month.clamp(1, 12) }
    }
}

impl fmt::Display for CertDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certification {
    /// Credential code, e.g. "SHRM-CP"
    pub name: String,
    pub provider: String,
    pub kind: String,
    pub issued: CertDate,
    pub renewal: CertDate,
}

impl Certification {
    pub fn from_catalog(entry: &CatalogEntry, issued: CertDate, renewal: CertDate) -> Self {
        Self {
            name: s!(entry.code),
            provider: s!(entry.provider),
            kind: s!(entry.kind),
            issued,
            renewal,
        }
    }
}

/// One profile as produced by a source. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRecord {
    pub profile_url: String,
    pub profile_name: String,
    pub company_name: String,
    pub job_title: String,
    pub department: Option<String>,
    pub location: String,
    pub certifications: Vec<Certification>,
}

impl ProfileRecord {
    /// Derived from title + department; see `core::keywords`.
    pub fn is_hr_related(&self) -> bool {
        keywords::is_hr_related(&self.job_title, self.department.as_deref())
    }

    /// Flatten into table rows: one per certification, or a single row with
    /// empty certification fields when there are none.
    pub fn to_rows(&self) -> Vec<OutputRow> {
        let is_hr_related = self.is_hr_related();
        let base = |cert: Option<&Certification>| OutputRow {
            profile_url: self.profile_url.clone(),
            profile_name: self.profile_name.clone(),
            company_name: self.company_name.clone(),
            job_title: self.job_title.clone(),
            department: self.department.clone().unwrap_or_default(),
            location: self.location.clone(),
            is_hr_related,
            certification: cert.map(|c| c.name.clone()).unwrap_or_default(),
            certification_provider: cert.map(|c| c.provider.clone()).unwrap_or_default(),
            certification_type: cert.map(|c| c.kind.clone()).unwrap_or_default(),
            certification_issued: cert.map(|c| c.issued.to_string()).unwrap_or_default(),
            certification_renewal: cert.map(|c| c.renewal.to_string()).unwrap_or_default(),
        };

        if self.certifications.is_empty() {
            vec![base(None)]
        } else {
            self.certifications.iter().map(|c| base(Some(c))).collect()
        }
    }
}

/// The unit of display and export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputRow {
    pub profile_url: String,
    pub profile_name: String,
    pub company_name: String,
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub is_hr_related: bool,
    pub certification: String,
    pub certification_provider: String,
    pub certification_type: String,
    pub certification_issued: String,
    pub certification_renewal: String,
}

impl OutputRow {
    pub const HEADERS: [&'static str; 12] = [
        "profile_url",
        "profile_name",
        "company_name",
        "job_title",
        "department",
        "location",
        "is_hr_related",
        "certification",
        "certification_provider",
        "certification_type",
        "certification_issued",
        "certification_renewal",
    ];

    /// Column index of `is_hr_related` in `HEADERS` / `to_cells`.
    pub const HR_COL: usize = 6;

    pub fn has_certification(&self) -> bool {
        !self.certification.is_empty()
    }

    /// Cells in `HEADERS` order. Booleans render as `True` / `False`.
    pub fn to_cells(&self) -> Vec<String> {
        cells![
            self.profile_url.as_str(),
            self.profile_name.as_str(),
            self.company_name.as_str(),
            self.job_title.as_str(),
            self.department.as_str(),
            self.location.as_str(),
            bool_cell(self.is_hr_related),
            self.certification.as_str(),
            self.certification_provider.as_str(),
            self.certification_type.as_str(),
            self.certification_issued.as_str(),
            self.certification_renewal.as_str(),
        ]
    }
}

pub fn bool_cell(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}
