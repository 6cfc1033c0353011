// tests/properties.rs
use proptest::prelude::*;

use profile_scrape::core::url::is_profile_url;
use profile_scrape::profile::{ProfileProcessor, ProfileSource, SampleSource};
use profile_scrape::progress::NullProgress;

fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9-]{1,12}".prop_map(|s| format!("https://www.linkedin.com/in/{s}")),
        "[a-z0-9-]{1,12}".prop_map(|s| format!("https://example.com/in/{s}")),
        "[a-z ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn rows_are_one_per_certification_or_one_per_bare_profile(
        urls in prop::collection::vec(url_strategy(), 0..12),
        seed in any::<u64>(),
    ) {
        let mut processor = ProfileProcessor::new(SampleSource::seeded(seed))
            .with_pause(std::time::Duration::ZERO);
        let report = processor.process_batch(&urls, &mut NullProgress);

        let valid = urls.iter().filter(|u| is_profile_url(u)).count();
        prop_assert_eq!(report.processed, valid);
        prop_assert_eq!(report.invalid_count(), urls.len() - valid);

        // Same seed, same draw order: one profile per valid url.
        let mut replay = SampleSource::seeded(seed);
        let expected: usize = urls
            .iter()
            .filter(|u| is_profile_url(u))
            .map(|u| replay.fetch_profile(u.trim()).unwrap().unwrap().certifications.len().max(1))
            .sum();
        prop_assert_eq!(report.rows.len(), expected);
        for r in &report.rows {
            prop_assert!(is_profile_url(&r.profile_url));
        }
    }

    #[test]
    fn non_linkedin_hosts_never_validate(path in "[a-z]{1,8}") {
        let url = format!("https://example.org/in/{path}");
        prop_assert!(!is_profile_url(&url));
    }
}
