use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_lms_env() {
    unsafe {
        std::env::remove_var("LMS_HOST");
        std::env::remove_var("LMS_PORT");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_lms_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_lms_env();
        std::env::set_var("LMS_HOST", "127.0.0.1");
        std::env::set_var("LMS_PORT", "8080");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");

    unsafe { clear_lms_env() };
}

#[test]
fn parse_port_rejects_garbage_and_zero() {
    assert_eq!(parse_port(Some("abc")), Err(ConfigError::InvalidPort { value: "abc".to_owned() }));
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort { value: "0".to_owned() }));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { value: "70000".to_owned() }));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_host_rejects_blank() {
    assert!(matches!(parse_host(Some("  ")), Err(ConfigError::InvalidHost { .. })));
    assert_eq!(parse_host(None), Ok(DEFAULT_HOST.to_owned()));
}
