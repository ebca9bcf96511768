//! Property-based tests across classification, normalization and caching.
//!
//! The normalize module already has property tests for idempotence; this
//! module focuses on round-trip classification and cache transparency.

use crate::classify::classify;
use crate::config::{CacheConfig, Config};
use crate::engine::PathEngine;
use crate::format::PathFormat;
use crate::normalize::Normalizer;
use proptest::prelude::*;

// Strategy for generating path components that no dialect reserves
fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => "[a-zA-Z0-9_. -]{1,12}",
        1 => Just("..".to_string()),
    ]
}

// Strategy for generating valid raw paths in every dialect, with the dialect
fn dialect_path_strategy() -> impl Strategy<Value = (String, PathFormat)> {
    (
        0usize..10,
        "[a-zA-Z]",
        "[a-zA-Z0-9]{1,8}",
        prop::collection::vec(component_strategy(), 0..6),
    )
        .prop_map(|(shape, letter, host, parts)| {
            let posix = parts.join("/");
            let windows = parts.join("\\");
            let lower = letter.to_lowercase();
            match shape {
                0 => (format!("{letter}:\\{windows}"), PathFormat::Dos),
                1 => (format!("\\{windows}"), PathFormat::Dos),
                2 => (format!("rel\\{windows}"), PathFormat::Dos),
                3 => (format!("/{lower}/{posix}"), PathFormat::Unix),
                4 => (format!("/usr/{posix}"), PathFormat::Unix),
                5 => (format!("//{host}/share/{posix}"), PathFormat::Unix),
                6 => (format!("/mnt/{lower}/{posix}"), PathFormat::Wsl),
                7 => (format!("/cygdrive/{lower}/{posix}"), PathFormat::Cygwin),
                8 => (format!("\\\\?\\{letter}:\\{windows}"), PathFormat::Unc),
                _ => (format!("\\\\{host}\\share\\{windows}"), PathFormat::NetworkShare),
            }
        })
}

fn small_engine() -> PathEngine {
    let config = Config {
        cache: CacheConfig {
            capacity: 16,
            shards: 4,
            negative_capacity: 16,
            negative_expected_items: 32,
            false_positive_rate: 0.05,
        },
        ..Default::default()
    };
    match PathEngine::new(&config) {
        Ok(engine) => engine,
        Err(err) => panic!("test configuration rejected: {err}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Generated paths classify as the dialect they were built in
    #[test]
    fn generated_paths_classify_as_built((raw, dialect) in dialect_path_strategy()) {
        prop_assert_eq!(classify(&raw).unwrap(), dialect);
    }

    // Rendering back into the input dialect classifies the same way
    #[test]
    fn render_round_trips_dialect((raw, dialect) in dialect_path_strategy()) {
        let normalizer = Normalizer::default();
        let canonical = normalizer.normalize(&raw).unwrap();
        let rendered = canonical.render(dialect);
        prop_assert_eq!(classify(&rendered).unwrap(), dialect, "{} -> {}", raw, rendered);
        prop_assert_eq!(normalizer.normalize(&rendered).unwrap(), canonical);
    }

    // The cache never changes an outcome, valid or not
    #[test]
    fn cache_is_transparent(inputs in prop::collection::vec(".{0,24}", 1..40)) {
        let engine = small_engine();
        let normalizer = Normalizer::default();
        for raw in inputs.iter().chain(inputs.iter()) {
            prop_assert_eq!(engine.normalize(raw), normalizer.normalize(raw));
        }
    }

    // Arbitrary input is classified or rejected, never a panic
    #[test]
    fn arbitrary_input_never_panics(raw in any::<String>()) {
        let _ = Normalizer::default().normalize(&raw);
        let _ = classify(&raw);
    }

    // Server and share names compare without regard to ASCII case
    #[test]
    fn share_names_case_insensitive(host in "[a-zA-Z]{1,10}", share in "[a-zA-Z]{1,10}") {
        let normalizer = Normalizer::default();
        let mixed = normalizer.normalize(&format!("\\\\{host}\\{share}\\x")).unwrap();
        let upper = normalizer
            .normalize(&format!("//{}/{}/x", host.to_uppercase(), share.to_uppercase()))
            .unwrap();
        prop_assert_eq!(mixed, upper);
    }
}
