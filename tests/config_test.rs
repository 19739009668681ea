use giphy_client::{GiphyConfig, GiphyError};

#[test]
fn test_explicit_key() {
    let config = GiphyConfig::new("my-api-key").unwrap();
    assert_eq!(config.api_key(), "my-api-key");
}

#[test]
fn test_rejects_empty_key() {
    let result = GiphyConfig::new("");
    assert!(matches!(result, Err(GiphyError::ConfigError(_))));
}

#[test]
fn test_rejects_blank_key() {
    let result = GiphyConfig::new("   ");
    assert!(matches!(result, Err(GiphyError::ConfigError(_))));
}

// Environment mutation happens in a single test so parallel test threads
// cannot observe each other's state.
#[test]
fn test_from_env_round_trip() {
    std::env::set_var("GIPHY_API_KEY", "env-test-key");
    let config = GiphyConfig::from_env().unwrap();
    assert_eq!(config.api_key(), "env-test-key");

    std::env::remove_var("GIPHY_API_KEY");
    let result = GiphyConfig::from_env();
    assert!(matches!(result, Err(GiphyError::ConfigError(_))));
}
