use crate::Config;
use crate::tests::{EnvGuard, TEST_SECRET, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Validation Tests - Backend
// =========================================================================

#[test]
#[serial]
fn given_unparseable_base_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("EH_AUTH_JWT_SECRET", TEST_SECRET);
    let _url = EnvGuard::set("EH_BACKEND_BASE_URL", "not a url");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("base_url"));
}

#[test]
#[serial]
fn given_non_http_scheme_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("EH_AUTH_JWT_SECRET", TEST_SECRET);
    let _url = EnvGuard::set("EH_BACKEND_BASE_URL", "ftp://files.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("http or https"));
}

#[test]
#[serial]
fn given_zero_timeout_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("EH_AUTH_JWT_SECRET", TEST_SECRET);
    let _timeout = EnvGuard::set("EH_BACKEND_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_override_when_timeout_then_duration_matches() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("EH_BACKEND_TIMEOUT_SECS", "12");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.backend.timeout(), eq(Duration::from_secs(12)));
}

#[test]
#[serial]
fn given_zero_cache_ttl_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("EH_AUTH_JWT_SECRET", TEST_SECRET);
    let _ttl = EnvGuard::set("EH_BACKEND_CACHE_TTL_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_cache_ttl_override_when_cache_ttl_then_duration_matches() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _ttl = EnvGuard::set("EH_BACKEND_CACHE_TTL_SECS", "15");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.backend.cache_ttl(), eq(Duration::from_secs(15)));
}
