use super::*;

#[test]
fn test_set_and_get_are_per_category() {
    let mut selection = ProfileSelection::default();
    selection.set(Category::Mods, "Default");
    selection.set(Category::Resourcepacks, "Faithful");

    assert_eq!(selection.get(Category::Mods), Some("Default"));
    assert_eq!(selection.get(Category::Shaderpacks), None);
    assert_eq!(selection.get(Category::Resourcepacks), Some("Faithful"));
}

#[test]
fn test_resolve_prefers_explicit_name() {
    let mut selection = ProfileSelection::default();
    selection.set(Category::Mods, "Stored");

    assert_eq!(selection.resolve(Category::Mods, Some("Flag")), Some("Flag"));
    assert_eq!(selection.resolve(Category::Mods, None), Some("Stored"));
    assert_eq!(selection.resolve(Category::Shaderpacks, None), None);
}

#[test]
fn test_load_missing_file_is_empty() {
    let temp = tempfile::tempdir().unwrap();
    let selection = ProfileSelection::load(&temp.path().join(SELECTION_FILE)).unwrap();
    assert_eq!(selection, ProfileSelection::default());
}

#[test]
fn test_save_then_load_keeps_selection() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(SELECTION_FILE);
    let mut selection = ProfileSelection::default();
    selection.set(Category::Shaderpacks, "Night");
    selection.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("shaderpacks = \"Night\""));
    assert_eq!(ProfileSelection::load(&path).unwrap(), selection);
}

#[test]
fn test_load_tolerates_partial_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(SELECTION_FILE);
    fs::write(&path, "mods = \"PvP\"\n").unwrap();

    let selection = ProfileSelection::load(&path).unwrap();
    assert_eq!(selection.get(Category::Mods), Some("PvP"));
    assert_eq!(selection.get(Category::Resourcepacks), None);
}

#[test]
fn test_load_rejects_malformed_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(SELECTION_FILE);
    fs::write(&path, "mods = [not toml").unwrap();

    let err = ProfileSelection::load(&path).unwrap_err();
    assert!(matches!(err, ProfileError::SelectionParse { .. }));
}
