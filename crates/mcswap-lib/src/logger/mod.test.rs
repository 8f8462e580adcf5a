use super::*;

#[test]
fn test_filter_directives_scope_crate_level() {
    let directives = Logger::filter_directives(LogLevel::Debug);

    assert!(directives.starts_with("mcswap=debug,mcswap_lib=debug"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.contains("hyper_util=warn"));
    assert!(directives.ends_with(",debug"));
}

#[test]
fn test_filter_directives_parse_as_env_filter() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        let directives = Logger::filter_directives(level);
        assert!(
            EnvFilter::try_new(&directives).is_ok(),
            "directive string should parse: {}",
            directives
        );
    }
}

#[test]
fn test_logger_global_matches_initialized_flag() {
    // Other tests in the process may or may not have installed the logger
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}
