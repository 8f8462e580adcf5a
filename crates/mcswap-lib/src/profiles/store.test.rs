use super::*;
use tempfile::TempDir;

fn store() -> (TempDir, ProfileStore) {
    let temp = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(ProfileLayout::new(temp.path()));
    (temp, store)
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

#[test]
fn test_list_missing_root_is_empty() {
    let (_temp, store) = store();
    assert!(store.list_profiles(Category::Mods).is_empty());
}

#[test]
fn test_create_then_list_includes_name() {
    let (_temp, store) = store();

    store.create_profile(Category::Mods, "Default").unwrap();
    store.create_profile(Category::Mods, "PvP").unwrap();
    store.create_profile(Category::Shaderpacks, "Night").unwrap();

    assert_eq!(
        sorted(store.list_profiles(Category::Mods)),
        vec!["Default", "PvP"]
    );
    assert_eq!(store.list_profiles(Category::Shaderpacks), vec!["Night"]);
    assert!(store.list_profiles(Category::Resourcepacks).is_empty());
}

#[test]
fn test_list_ignores_plain_files() {
    let (temp, store) = store();
    store.create_profile(Category::Mods, "Default").unwrap();
    fs::write(temp.path().join("profiles").join("notes.txt"), "x").unwrap();

    assert_eq!(store.list_profiles(Category::Mods), vec!["Default"]);
}

#[test]
fn test_create_is_idempotent_and_keeps_contents() {
    let (_temp, store) = store();
    let dir = store.create_profile(Category::Mods, "Default").unwrap();
    fs::write(dir.join("a.jar"), "a").unwrap();

    let again = store.create_profile(Category::Mods, "Default").unwrap();
    assert_eq!(dir, again);
    assert!(again.join("a.jar").exists());
}

#[test]
fn test_create_trims_name() {
    let (temp, store) = store();
    let dir = store.create_profile(Category::Mods, "  Spaced  ").unwrap();
    assert_eq!(dir, temp.path().join("profiles").join("Spaced"));
}

#[test]
fn test_create_rejects_invalid_names() {
    let (temp, store) = store();

    for name in ["", "   ", ".", "..", "a/b", "a\\b"] {
        let err = store.create_profile(Category::Mods, name).unwrap_err();
        assert!(
            matches!(err, ProfileError::InvalidName { .. }),
            "expected InvalidName for {:?}",
            name
        );
    }
    assert!(!temp.path().join("profiles").exists());
}

#[test]
fn test_import_requires_selected_profile() {
    let (_temp, store) = store();
    let err = store
        .import_files(Category::Mods, None, &[PathBuf::from("a.jar")])
        .unwrap_err();
    assert!(matches!(
        err,
        ProfileError::NoActiveProfile {
            category: Category::Mods
        }
    ));
}

#[test]
fn test_import_copies_by_basename_and_creates_profile() {
    let (temp, store) = store();
    let downloads = temp.path().join("downloads");
    fs::create_dir_all(&downloads).unwrap();
    fs::write(downloads.join("a.jar"), "a").unwrap();
    fs::write(downloads.join("b.jar"), "b").unwrap();

    let report = store
        .import_files(
            Category::Mods,
            Some("Default"),
            &[downloads.join("a.jar"), downloads.join("b.jar")],
        )
        .unwrap();

    assert_eq!(report.succeeded, 2);
    assert!(report.is_clean());
    let profile = temp.path().join("profiles").join("Default");
    assert_eq!(fs::read_to_string(profile.join("a.jar")).unwrap(), "a");
    assert_eq!(fs::read_to_string(profile.join("b.jar")).unwrap(), "b");
}

#[test]
fn test_import_overwrites_existing_file() {
    let (temp, store) = store();
    let profile = store.create_profile(Category::Mods, "Default").unwrap();
    fs::write(profile.join("a.jar"), "old").unwrap();
    let source = temp.path().join("a.jar");
    fs::write(&source, "new").unwrap();

    store
        .import_files(Category::Mods, Some("Default"), &[source])
        .unwrap();
    assert_eq!(fs::read_to_string(profile.join("a.jar")).unwrap(), "new");
}

#[test]
fn test_import_continues_past_unreadable_source() {
    let (temp, store) = store();
    let sources: Vec<PathBuf> = ["one.jar", "two.jar", "three.jar"]
        .iter()
        .map(|name| {
            let path = temp.path().join(name);
            fs::write(&path, name).unwrap();
            path
        })
        .collect();
    let mut with_missing = sources.clone();
    with_missing.insert(1, temp.path().join("missing.jar"));

    let report = store
        .import_files(Category::Resourcepacks, Some("Pack"), &with_missing)
        .unwrap();

    assert_eq!(report.succeeded, 3);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path, temp.path().join("missing.jar"));

    let profile = temp.path().join("resourcepack_profiles").join("Pack");
    assert_eq!(fs::read_dir(&profile).unwrap().count(), 3);
}

#[test]
fn test_import_reports_directory_source() {
    let (temp, store) = store();
    let folder = temp.path().join("SomeShader");
    fs::create_dir_all(&folder).unwrap();

    let report = store
        .import_files(Category::Shaderpacks, Some("Night"), &[folder.clone()])
        .unwrap();

    assert_eq!(report.succeeded, 0);
    assert_eq!(report.warnings[0].path, folder);
    assert!(report.warnings[0].message.contains("directory"));
}

#[test]
fn test_import_rejects_names_outside_category_root() {
    let (temp, store) = store();
    let source = temp.path().join("a.jar");
    fs::write(&source, "a").unwrap();

    for name in ["", "  ", ".", "..", "../escape", "nested/dir"] {
        let err = store
            .import_files(Category::Mods, Some(name), &[source.clone()])
            .unwrap_err();
        assert!(
            matches!(err, ProfileError::InvalidName { .. }),
            "{name:?} gave {err:?}"
        );
    }

    assert!(!temp.path().join("profiles").exists());
    assert!(!temp.path().join("escape").exists());
}

#[test]
fn test_profile_exists_is_false_for_invalid_names() {
    let (_temp, store) = store();
    store.create_profile(Category::Mods, "Default").unwrap();

    assert!(store.profile_exists(Category::Mods, "Default"));
    assert!(!store.profile_exists(Category::Mods, ""));
    assert!(!store.profile_exists(Category::Mods, ".."));
    assert!(!store.profile_exists(Category::Mods, "Default/.."));
}
