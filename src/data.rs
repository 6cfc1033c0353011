// src/data.rs
//
// Light wrappers around the result rows of a processing pass.
//
// - ResultSet: caller-owned rows of one pass. Only the processing action
//              replaces it; the post-pass filters are the one mutator.
// - RowFilter: the predicates the front ends expose (HR only, certified only,
//              name/company substring, exact certification code).
// - SelectionView: index view over a ResultSet for display/export.
// - Summary: the four headline counts, plus certification value counts.

use std::collections::{BTreeMap, HashSet};

use crate::profile::OutputRow;

/// Rows of one processing pass, in output order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    rows: Vec<OutputRow>,
}

impl ResultSet {
    pub fn new(rows: Vec<OutputRow>) -> Self { Self { rows } }

    pub fn rows(&self) -> &[OutputRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Drop every row the filter rejects. Used for the post-pass HR/certified toggles.
    pub fn retain(&mut self, filter: &RowFilter) {
        self.rows.retain(|r| filter.matches(r));
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.rows)
    }

    pub fn view<'a>(&'a self, filter: &RowFilter) -> SelectionView<'a> {
        SelectionView::from_filter(self, filter)
    }

    pub fn all(&self) -> SelectionView<'_> {
        SelectionView { row_ix: (0..self.rows.len()).collect(), rows: &self.rows }
    }
}

/// Row predicates. Empty text fields and `None` mean "don't filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowFilter {
    pub hr_only: bool,
    pub certified_only: bool,
    /// Case-insensitive substring of profile_name
    pub name: String,
    /// Case-insensitive substring of company_name
    pub company: String,
    /// Exact certification code
    pub certification: Option<String>,
}

impl RowFilter {
    pub fn post_pass(hr_only: bool, certified_only: bool) -> Self {
        Self { hr_only, certified_only, ..Self::default() }
    }

    pub fn search(name: &str, company: &str, certification: Option<&str>) -> Self {
        Self {
            name: s!(name.trim()),
            company: s!(company.trim()),
            certification: certification.map(|c| s!(c)),
            ..Self::default()
        }
    }

    pub fn is_noop(&self) -> bool {
        !self.hr_only
            && !self.certified_only
            && self.name.is_empty()
            && self.company.is_empty()
            && self.certification.is_none()
    }

    pub fn matches(&self, row: &OutputRow) -> bool {
        if self.hr_only && !row.is_hr_related { return false; }
        if self.certified_only && !row.has_certification() { return false; }
        if !contains_ci(&row.profile_name, &self.name) { return false; }
        if !contains_ci(&row.company_name, &self.company) { return false; }
        match &self.certification {
            Some(code) => row.certification == *code,
            None => true,
        }
    }
}

fn contains_ci(hay: &str, needle: &str) -> bool {
    needle.is_empty() || hay.to_lowercase().contains(&needle.to_lowercase())
}

/// Zero-copy filtered view for display.
/// Holds list of row indexes into the ResultSet.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    /// Positions of kept rows in the result set
    pub row_ix: Vec<usize>,
    /// Borrowed pointer to the canonical rows
    rows: &'a [OutputRow],
}

impl<'a> SelectionView<'a> {
    pub fn from_filter(set: &'a ResultSet, filter: &RowFilter) -> Self {
        let rows = set.rows();
        if filter.is_noop() {
            return set.all();
        }
        let row_ix = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches(r))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, rows }
    }

    /// Number of rows in the projection.
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&'a OutputRow> {
        let rows = self.rows;
        self.row_ix.get(i).and_then(|&ix| rows.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a OutputRow> + '_ {
        let rows = self.rows;
        self.row_ix.iter().filter_map(move |&ix| rows.get(ix))
    }

    /// Materialize owned rows (for export boundaries).
    pub fn to_owned_rows(&self) -> Vec<OutputRow> {
        self.iter().cloned().collect()
    }

    pub fn summary(&self) -> Summary {
        Summary::of_iter(self.iter())
    }
}

/// Headline counts shown in the Results tab and the Summary sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Distinct profile_url
    pub total_profiles: usize,
    /// Rows with is_hr_related
    pub hr_related: usize,
    /// Rows with a certification
    pub with_certifications: usize,
    /// Distinct company_name
    pub unique_companies: usize,
}

impl Summary {
    pub const LABELS: [&'static str; 4] =
        ["Total Profiles", "HR-Related", "With Certifications", "Unique Companies"];

    pub fn of(rows: &[OutputRow]) -> Self {
        Self::of_iter(rows.iter())
    }

    pub fn of_iter<'r>(rows: impl Iterator<Item = &'r OutputRow>) -> Self {
        let mut urls = HashSet::new();
        let mut companies = HashSet::new();
        let mut out = Summary::default();
        for r in rows {
            urls.insert(r.profile_url.as_str());
            companies.insert(r.company_name.as_str());
            if r.is_hr_related { out.hr_related += 1; }
            if r.has_certification() { out.with_certifications += 1; }
        }
        out.total_profiles = urls.len();
        out.unique_companies = companies.len();
        out
    }

    /// (label, count) pairs in display order.
    pub fn metrics(&self) -> [(&'static str, usize); 4] {
        [
            (Self::LABELS[0], self.total_profiles),
            (Self::LABELS[1], self.hr_related),
            (Self::LABELS[2], self.with_certifications),
            (Self::LABELS[3], self.unique_companies),
        ]
    }
}

/// Which certification column to count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertField {
    Code,
    Provider,
}

/// Value counts over rows that carry a certification, highest count first,
/// ties by name.
pub fn cert_counts<'r>(rows: impl Iterator<Item = &'r OutputRow>, field: CertField) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in rows.filter(|r| r.has_certification()) {
        let key = match field {
            CertField::Code => r.certification.as_str(),
            CertField::Provider => r.certification_provider.as_str(),
        };
        *counts.entry(key).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().map(|(k, n)| (s!(k), n)).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: &str, name: &str, company: &str, hr: bool, cert: &str, provider: &str) -> OutputRow {
        OutputRow {
            profile_url: s!(url),
            profile_name: s!(name),
            company_name: s!(company),
            is_hr_related: hr,
            certification: s!(cert),
            certification_provider: s!(provider),
            ..OutputRow::default()
        }
    }

    fn sample() -> ResultSet {
        ResultSet::new(vec![
            row("u1", "Sample User 1", "Company 7", true, "", ""),
            row("u2", "Sample User 22", "Company 7", true, "PHR", "HRCI"),
            row("u2", "Sample User 22", "Company 7", true, "CCP", "WorldatWork"),
            row("u3", "Alex", "Globex", false, "PHR", "HRCI"),
        ])
    }

    #[test]
    fn summary_counts() {
        let s = sample().summary();
        assert_eq!(s, Summary { total_profiles: 3, hr_related: 3, with_certifications: 3, unique_companies: 2 });
    }

    #[test]
    fn empty_summary_is_zero() {
        assert_eq!(ResultSet::default().summary(), Summary::default());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let set = sample();
        let v = set.view(&RowFilter::search("user 2", "", None));
        assert_eq!(v.row_ix, vec![1, 2]);
        let v = set.view(&RowFilter::search("", "GLOB", None));
        assert_eq!(v.row_ix, vec![3]);
    }

    #[test]
    fn certification_filter_is_exact() {
        let set = sample();
        assert_eq!(set.view(&RowFilter::search("", "", Some("PHR"))).row_ix, vec![1, 3]);
        assert!(set.view(&RowFilter::search("", "", Some("phr"))).is_empty());
    }

    #[test]
    fn post_pass_filters_retain_in_place() {
        let mut set = sample();
        set.retain(&RowFilter::post_pass(true, true));
        assert_eq!(set.len(), 2);
        assert!(set.rows().iter().all(|r| r.is_hr_related && r.has_certification()));
    }

    #[test]
    fn noop_filter_keeps_everything() {
        let set = sample();
        let v = set.view(&RowFilter::default());
        assert_eq!(v.len(), 4);
        assert_eq!(v.row(3).map(|r| r.profile_name.as_str()), Some("Alex"));
        assert!(v.row(4).is_none());
    }

    #[test]
    fn cert_counts_sorted_by_count_then_name() {
        let set = sample();
        let codes = cert_counts(set.rows().iter(), CertField::Code);
        assert_eq!(codes, vec![(s!("PHR"), 2), (s!("CCP"), 1)]);
        let providers = cert_counts(set.rows().iter(), CertField::Provider);
        assert_eq!(providers, vec![(s!("HRCI"), 2), (s!("WorldatWork"), 1)]);
    }
}
