// src/profile/processor.rs
use std::thread;
use std::time::Duration;

use crate::config::consts::REQUEST_PAUSE_MS;
use crate::config::options::ProcessOptions;
use crate::core::{keywords, url};
use crate::data::ResultSet;
use crate::error::Result;
use crate::progress::Progress;

use super::model::{OutputRow, ProfileRecord};
use super::source::ProfileSource;

/// Why a URL produced no rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a LinkedIn profile URL (or the source rejected it as such).
    Invalid,
    /// The source failed on a valid URL.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    pub url: String,
    pub reason: SkipReason,
}

/// Outcome of one pass. Never an error: bad URLs are listed, not fatal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub rows: Vec<OutputRow>,
    /// Profiles that produced rows.
    pub processed: usize,
    pub skipped: Vec<Skipped>,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn invalid_count(&self) -> usize {
        self.skipped.iter().filter(|s| s.reason == SkipReason::Invalid).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.skipped.iter().filter_map(|s| match &s.reason {
            SkipReason::Failed(msg) => Some((s.url.as_str(), msg.as_str())),
            SkipReason::Invalid => None,
        })
    }

    pub fn into_result_set(self) -> ResultSet {
        ResultSet::new(self.rows)
    }
}

/// Validates, fetches, classifies and flattens URLs, one at a time, in order.
pub struct ProfileProcessor<S> {
    source: S,
    pause: Duration,
}

impl<S: ProfileSource> ProfileProcessor<S> {
    pub fn new(source: S) -> Self {
        Self { source, pause: Duration::from_millis(REQUEST_PAUSE_MS) }
    }

    pub fn from_options(source: S, opts: &ProcessOptions) -> Self {
        Self::new(source).with_pause(Duration::from_millis(opts.pause_ms))
    }

    /// Pause before each valid URL. `Duration::ZERO` disables it.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    pub fn validate(raw: &str) -> bool {
        url::is_profile_url(raw)
    }

    pub fn classify(job_title: &str, department: Option<&str>) -> bool {
        keywords::is_hr_related(job_title, department)
    }

    /// `Ok(None)` for invalid URLs; the source is not consulted.
    pub fn fetch_profile(&mut self, raw: &str) -> Result<Option<ProfileRecord>> {
        let url = raw.trim();
        if !Self::validate(url) {
            return Ok(None);
        }
        self.source.fetch_profile(url)
    }

    /// Process `urls` in order. `progress.item_done` fires after every URL.
    pub fn process_batch<U: AsRef<str>>(
        &mut self,
        urls: &[U],
        progress: &mut dyn Progress,
    ) -> BatchReport {
        let total = urls.len();
        progress.begin(total);
        logf!("Batch: Begin urls={} pause_ms={}", total, self.pause.as_millis());

        let mut report = BatchReport::default();

        for (i, raw) in urls.iter().enumerate() {
            let url = raw.as_ref().trim();

            if !Self::validate(url) {
                logd!("Batch: Skip invalid url={:?}", url);
                report.skipped.push(Skipped { url: s!(url), reason: SkipReason::Invalid });
                progress.item_done(i + 1, total);
                continue;
            }

            if !self.pause.is_zero() {
                thread::sleep(self.pause);
            }

            match self.source.fetch_profile(url) {
                Ok(Some(record)) => {
                    let hr = Self::classify(&record.job_title, record.department.as_deref());
                    let rows = record.to_rows();
                    logd!(
                        "Batch: OK url={} hr={} certs={} rows={}",
                        url, hr, record.certifications.len(), rows.len()
                    );
                    report.rows.extend(rows);
                    report.processed += 1;
                }
                Ok(None) => {
                    logd!("Batch: Source rejected url={:?}", url);
                    report.skipped.push(Skipped { url: s!(url), reason: SkipReason::Invalid });
                }
                Err(e) => {
                    loge!("Batch: Error processing {}: {}", url, e);
                    progress.log(&format!("Error processing {url}: {e}"));
                    report.skipped.push(Skipped { url: s!(url), reason: SkipReason::Failed(e.to_string()) });
                }
            }

            progress.item_done(i + 1, total);
        }

        logf!(
            "Batch: Done processed={} rows={} invalid={} failed={}",
            report.processed,
            report.rows.len(),
            report.invalid_count(),
            report.failures().count()
        );
        progress.finish();
        report
    }
}
