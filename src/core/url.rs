// src/core/url.rs
//! Profile URL validation. Pure string/URL checks, no network.

use url::Url;

use crate::config::consts::{PROFILE_HOST_MARKER, PROFILE_PATH_MARKER};

/// A URL is a profile URL iff it parses as an absolute URL, its host
/// contains `linkedin.com` and its path contains `/in/`.
///
/// Both checks are substring tests, so `notlinkedin.com` hosts pass too.
pub fn is_profile_url(raw: &str) -> bool {
    let s = raw.trim();
    if s.is_empty() {
        return false;
    }
    match Url::parse(s) {
        Ok(url) => {
            let host_ok = url
                .host_str()
                .is_some_and(|h| h.to_ascii_lowercase().contains(PROFILE_HOST_MARKER));
            host_ok && url.path().contains(PROFILE_PATH_MARKER)
        }
        Err(_) => false,
    }
}

/// Split into (valid, invalid) keeping input order within each side.
pub fn partition<S: AsRef<str>>(urls: &[S]) -> (Vec<String>, Vec<String>) {
    let mut valid = Vec::with_capacity(urls.len());
    let mut invalid = Vec::new();
    for u in urls {
        let u = u.as_ref();
        if is_profile_url(u) {
            valid.push(u.trim().to_string());
        } else {
            invalid.push(u.to_string());
        }
    }
    (valid, invalid)
}
