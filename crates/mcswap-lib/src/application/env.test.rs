use super::*;

fn env_of(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(
        pairs
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_empty_environment_keeps_intent() {
    let env_config = env_of(&[]);
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Auto
    );
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Always),
        TerminalCapsDetectIntent::Always
    );
}

#[test]
fn test_no_color_environment_variable() {
    let env_config = env_of(&[("NO_COLOR", "1")]);
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Never
    );
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env_config = env_of(&[("NO_COLOR", "")]);
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Auto
    );
}

#[test]
fn test_clicolor_zero_disables_color() {
    let env_config = env_of(&[("CLICOLOR", "0")]);
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Never
    );
}

#[test]
fn test_force_color_wins_over_no_color() {
    let env_config = env_of(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Always
    );
}

#[test]
fn test_force_color_false_disables() {
    let env_config = env_of(&[("FORCE_COLOR", "false")]);
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Always),
        TerminalCapsDetectIntent::Never
    );
}

#[test]
fn test_invalid_force_color_values_ignored() {
    let env_config = env_of(&[("FORCE_COLOR", "sometimes")]);
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Auto
    );
}

#[test]
fn test_ci_disables_color_even_when_forced() {
    let env_config = env_of(&[("CI", "true"), ("FORCE_COLOR", "3")]);
    assert_eq!(
        env_config.apply_color_config(TerminalCapsDetectIntent::Always),
        TerminalCapsDetectIntent::Never
    );
}
