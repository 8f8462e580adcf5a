use super::*;

#[test]
fn test_layout_paths_per_category() {
    let layout = ProfileLayout::new("/work");

    assert_eq!(
        layout.category_root(Category::Mods),
        PathBuf::from("/work/profiles")
    );
    assert_eq!(
        layout.profile_dir(Category::Shaderpacks, "Night"),
        PathBuf::from("/work/shaderpack_profiles/Night")
    );
    assert_eq!(
        layout.profile_dir(Category::Resourcepacks, "Faithful"),
        PathBuf::from("/work/resourcepack_profiles/Faithful")
    );
    assert_eq!(layout.selection_file(), PathBuf::from("/work/selection.toml"));
}

#[test]
fn test_report_records_successes_and_warnings() {
    let mut report = OperationReport::default();
    assert!(report.is_clean());

    report.record_success();
    report.record_success();
    report.record_failure(Path::new("/tmp/broken.jar"), "permission denied");

    assert_eq!(report.succeeded, 2);
    assert!(!report.is_clean());
    assert_eq!(
        report.warnings,
        vec![ItemWarning {
            path: PathBuf::from("/tmp/broken.jar"),
            message: "permission denied".to_string(),
        }]
    );
}

#[test]
fn test_error_messages_name_the_category() {
    let err = ProfileError::NoActiveProfile {
        category: Category::Shaderpacks,
    };
    assert_eq!(err.to_string(), "No shaderpack profile selected");

    let err = ProfileError::ProfileNotFound {
        category: Category::Mods,
        name: "Ghost".to_string(),
        path: PathBuf::from("/work/profiles/Ghost"),
    };
    assert!(err.to_string().contains("mod profile 'Ghost' does not exist"));
}
