use super::*;

fn locations() -> BaseLocations {
    BaseLocations {
        home: PathBuf::from("/home/steve"),
        roaming_data: Some(PathBuf::from("C:/Users/steve/AppData/Roaming")),
    }
}

#[test]
fn test_resolve_windows_uses_roaming_data() {
    let dir = resolve_game_dir("windows", &locations()).unwrap();
    assert_eq!(
        dir,
        PathBuf::from("C:/Users/steve/AppData/Roaming").join(".minecraft")
    );
}

#[test]
fn test_resolve_macos_uses_application_support() {
    let dir = resolve_game_dir("macos", &locations()).unwrap();
    assert_eq!(
        dir,
        PathBuf::from("/home/steve/Library/Application Support/minecraft")
    );
}

#[test]
fn test_resolve_linux_uses_dotfolder() {
    let dir = resolve_game_dir("linux", &locations()).unwrap();
    assert_eq!(dir, PathBuf::from("/home/steve/.minecraft"));
}

#[test]
fn test_resolve_is_deterministic() {
    let first = resolve_game_dir("linux", &locations()).unwrap();
    let second = resolve_game_dir("linux", &locations()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_platform_fails() {
    let err = resolve_game_dir("haiku", &locations()).unwrap_err();
    match err {
        PlatformError::UnsupportedPlatform { platform } => assert_eq!(platform, "haiku"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_windows_without_roaming_data_fails() {
    let locations = BaseLocations {
        roaming_data: None,
        ..locations()
    };
    let err = resolve_game_dir("windows", &locations).unwrap_err();
    assert!(matches!(err, PlatformError::MissingBaseDirectory { .. }));
}

#[test]
fn test_live_dirs_per_category() {
    let paths = GamePaths::discover(Some(Path::new("/games/mc"))).unwrap();
    assert_eq!(paths.root, PathBuf::from("/games/mc"));
    assert_eq!(paths.live_dir(Category::Mods), PathBuf::from("/games/mc/mods"));
    assert_eq!(
        paths.live_dir(Category::Shaderpacks),
        PathBuf::from("/games/mc/shaderpacks")
    );
    assert_eq!(
        live_dir(Path::new("/games/mc"), Category::Resourcepacks),
        PathBuf::from("/games/mc/resourcepacks")
    );
}
