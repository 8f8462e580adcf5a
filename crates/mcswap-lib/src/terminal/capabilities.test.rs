use super::*;

fn env_with_term(term: &str) -> TerminalEnvConfig {
    TerminalEnvConfig {
        term: Some(term.to_string()),
        ..TerminalEnvConfig::default()
    }
}

#[test]
fn test_never_disables_color_even_on_tty() {
    let env = TerminalEnvConfig {
        colorterm: Some("truecolor".to_string()),
        ..env_with_term("xterm-256color")
    };

    let caps = TerminalCapabilities::from_environment(TerminalCapsDetectIntent::Never, true, &env);
    assert_eq!(caps.color, TerminalColorCaps::None);
    assert!(!caps.supports_color());
}

#[test]
fn test_auto_without_tty_is_plain() {
    let env = env_with_term("xterm-256color");
    let caps = TerminalCapabilities::from_environment(TerminalCapsDetectIntent::Auto, false, &env);
    assert_eq!(caps.color, TerminalColorCaps::None);
}

#[test]
fn test_auto_on_tty_uses_term_level() {
    let env = env_with_term("xterm-256color");
    let caps = TerminalCapabilities::from_environment(TerminalCapsDetectIntent::Auto, true, &env);
    assert_eq!(caps.color, TerminalColorCaps::Ansi256);
}

#[test]
fn test_colorterm_truecolor_wins() {
    let env = TerminalEnvConfig {
        colorterm: Some("24bit".to_string()),
        ..env_with_term("xterm")
    };
    let caps = TerminalCapabilities::from_environment(TerminalCapsDetectIntent::Auto, true, &env);
    assert_eq!(caps.color, TerminalColorCaps::TrueColor);
}

#[test]
fn test_always_forces_at_least_basic_color() {
    let env = env_with_term("dumb");
    let caps =
        TerminalCapabilities::from_environment(TerminalCapsDetectIntent::Always, false, &env);
    assert_eq!(caps.color, TerminalColorCaps::Ansi16);
}

#[cfg(not(windows))]
#[test]
fn test_unicode_detected_from_locale() {
    let env = TerminalEnvConfig {
        lang: Some("en_US.UTF-8".to_string()),
        ..TerminalEnvConfig::default()
    };
    let caps = TerminalCapabilities::from_environment(TerminalCapsDetectIntent::Auto, true, &env);
    assert!(caps.unicode);

    let ascii = TerminalCapabilities::from_environment(
        TerminalCapsDetectIntent::Auto,
        true,
        &TerminalEnvConfig::default(),
    );
    assert!(!ascii.unicode);
}

#[test]
fn test_minimal_capabilities() {
    let caps = TerminalCapabilities::minimal();
    assert!(!caps.supports_color());
    assert!(!caps.unicode);
    assert!(!caps.is_tty);
}
