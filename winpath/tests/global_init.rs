//! The process-wide engine can be initialized once, before first use.
//!
//! This lives in its own test binary so no other test touches the global
//! engine first.

use winpath::config::{CacheConfig, Config};
use winpath::ConfigError;

#[test]
fn test_init_once_then_use() {
    let invalid = Config {
        cache: CacheConfig {
            shards: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        winpath::init(invalid),
        Err(ConfigError::Validation { .. })
    ));
    assert!(!winpath::is_initialized());

    let mut config = Config::default();
    config.cache.capacity = 32;
    config.cache.shards = 2;
    config.git_bash.demangle = false;
    winpath::init(config).unwrap();
    assert!(winpath::is_initialized());

    assert!(matches!(
        winpath::init(Config::default()),
        Err(ConfigError::AlreadyInitialized)
    ));

    // The explicit configuration is the one in effect.
    let path = winpath::normalize(r"C:\Git\mnt\d\x").unwrap();
    assert_eq!(path.drive(), Some('C'));

    winpath::normalize(r"C:\Git\mnt\d\x").unwrap();
    let stats = winpath::cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
}
