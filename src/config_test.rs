use super::*;

/// # Safety
/// These tests mutate process env; each test only touches its own keys via
/// `from_env`, and all keys are cleared before and after.
unsafe fn clear_console_env() {
    unsafe {
        std::env::remove_var("INTRUGUARD_BASE_URL");
        std::env::remove_var("INTRUGUARD_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("INTRUGUARD_CONNECT_TIMEOUT_SECS");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_console_env() };

    let cfg = ConsoleConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeouts, Timeouts { request: None, connect: None });
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_console_env();
        std::env::set_var("INTRUGUARD_BASE_URL", "http://soc.test:8080/");
        std::env::set_var("INTRUGUARD_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("INTRUGUARD_CONNECT_TIMEOUT_SECS", " 5 ");
    }

    let cfg = ConsoleConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://soc.test:8080");
    assert_eq!(cfg.timeouts.request, Some(Duration::from_secs(30)));
    assert_eq!(cfg.timeouts.connect, Some(Duration::from_secs(5)));

    unsafe { clear_console_env() };
}

#[test]
fn from_env_bad_timeout_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_console_env();
        std::env::set_var("INTRUGUARD_REQUEST_TIMEOUT_SECS", "soon");
    }

    let err = ConsoleConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("INTRUGUARD_REQUEST_TIMEOUT_SECS"));

    unsafe { clear_console_env() };
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_console_env();
        std::env::set_var("INTRUGUARD_BASE_URL", "   ");
    }

    let cfg = ConsoleConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);

    unsafe { clear_console_env() };
}

#[test]
fn with_base_url_trims_trailing_slashes() {
    let cfg = ConsoleConfig::default().with_base_url("http://localhost:5000//");
    assert_eq!(cfg.base_url, "http://localhost:5000");
}
