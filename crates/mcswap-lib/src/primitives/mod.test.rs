use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_log_level_filter_directive() {
    assert_eq!(LogLevel::Warning.as_filter_directive(), "warn");
    assert_eq!(LogLevel::Trace.as_filter_directive(), "trace");
}

#[test]
fn test_log_format_aliases() {
    assert_eq!("txt".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("yml".parse::<LogFormat>().unwrap(), LogFormat::Yaml);
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn test_color_intent_aliases() {
    assert_eq!(
        "force".parse::<TerminalCapsDetectIntent>().unwrap(),
        TerminalCapsDetectIntent::Always
    );
    assert_eq!(
        "off".parse::<TerminalCapsDetectIntent>().unwrap(),
        TerminalCapsDetectIntent::Never
    );
    assert_eq!(
        "detect".parse::<TerminalCapsDetectIntent>().unwrap(),
        TerminalCapsDetectIntent::Auto
    );
}

#[test]
fn test_category_directory_names() {
    assert_eq!(Category::Mods.live_dir_name(), "mods");
    assert_eq!(Category::Mods.profile_root_name(), "profiles");
    assert_eq!(Category::Shaderpacks.live_dir_name(), "shaderpacks");
    assert_eq!(Category::Shaderpacks.profile_root_name(), "shaderpack_profiles");
    assert_eq!(Category::Resourcepacks.live_dir_name(), "resourcepacks");
    assert_eq!(
        Category::Resourcepacks.profile_root_name(),
        "resourcepack_profiles"
    );
}

#[test]
fn test_category_parsing_accepts_singular_forms() {
    assert_eq!("mod".parse::<Category>().unwrap(), Category::Mods);
    assert_eq!("shaders".parse::<Category>().unwrap(), Category::Shaderpacks);
    assert_eq!(
        "resourcepack".parse::<Category>().unwrap(),
        Category::Resourcepacks
    );

    let err = "worlds".parse::<Category>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("invalid profile category"));
}

#[test]
fn test_mod_loader_roundtrip_names() {
    for loader in ModLoader::value_variants() {
        assert_eq!(loader.as_str().parse::<ModLoader>().unwrap(), *loader);
    }
    assert_eq!("neo-forge".parse::<ModLoader>().unwrap(), ModLoader::NeoForge);
    assert_eq!(ModLoader::default(), ModLoader::Fabric);
}

#[test]
fn test_mod_loader_serde_matches_catalog_identifiers() {
    let json = serde_json::to_string(&ModLoader::NeoForge).unwrap();
    assert_eq!(json, "\"neoforge\"");

    let quilt: ModLoader = serde_json::from_str("\"quilt\"").unwrap();
    assert_eq!(quilt, ModLoader::Quilt);
}

#[test]
fn test_terminal_color_caps_ordering() {
    assert!(TerminalColorCaps::None < TerminalColorCaps::Ansi16);
    assert!(TerminalColorCaps::Ansi256 < TerminalColorCaps::TrueColor);
}
