use super::*;
use std::collections::BTreeSet;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

struct Fixture {
    _temp: TempDir,
    workdir: PathBuf,
    game_dir: PathBuf,
    activator: ProfileActivator,
}

fn fixture() -> Fixture {
    let temp = tempfile::tempdir().unwrap();
    let workdir = temp.path().join("work");
    let game_dir = temp.path().join(".minecraft");
    fs::create_dir_all(&workdir).unwrap();
    let activator = ProfileActivator::new(ProfileLayout::new(&workdir), &game_dir);
    Fixture {
        _temp: temp,
        workdir,
        game_dir,
        activator,
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn relative_files(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                found.insert(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    found
}

#[test]
fn test_apply_replaces_live_contents() {
    let f = fixture();
    let profile = f.workdir.join("profiles").join("Default");
    write(&profile.join("new.jar"), "new");
    write(&f.game_dir.join("mods").join("old.jar"), "old");

    let report = f.activator.apply(Category::Mods, "Default").unwrap();

    assert!(report.is_clean());
    assert_eq!(report.succeeded, 1);
    assert_eq!(
        relative_files(&f.game_dir.join("mods")),
        BTreeSet::from(["new.jar".to_string()])
    );
}

#[test]
fn test_apply_creates_missing_live_dir() {
    let f = fixture();
    write(&f.workdir.join("shaderpack_profiles").join("Night").join("bsl.zip"), "zip");

    f.activator.apply(Category::Shaderpacks, "Night").unwrap();

    assert_eq!(
        fs::read_to_string(f.game_dir.join("shaderpacks").join("bsl.zip")).unwrap(),
        "zip"
    );
}

#[test]
fn test_apply_missing_profile_leaves_live_untouched() {
    let f = fixture();
    let live = f.game_dir.join("mods");
    write(&live.join("keep.jar"), "keep");

    let err = f.activator.apply(Category::Mods, "Ghost").unwrap_err();

    match err {
        ProfileError::ProfileNotFound { name, path, .. } => {
            assert_eq!(name, "Ghost");
            assert_eq!(path, f.workdir.join("profiles").join("Ghost"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs::read_to_string(live.join("keep.jar")).unwrap(), "keep");
}

#[test]
fn test_apply_copies_directories_recursively() {
    let f = fixture();
    let profile = f.workdir.join("resourcepack_profiles").join("Faithful");
    write(&profile.join("Faithful").join("pack.mcmeta"), "{}");
    write(
        &profile.join("Faithful").join("assets").join("minecraft").join("a.png"),
        "png",
    );
    write(&profile.join("extra.zip"), "zip");

    let live = f.game_dir.join("resourcepacks");
    write(&live.join("Faithful").join("stale.txt"), "stale");
    write(&live.join("Other").join("x.png"), "x");

    let report = f.activator.apply(Category::Resourcepacks, "Faithful").unwrap();

    assert_eq!(report.succeeded, 2);
    assert_eq!(relative_files(&live), relative_files(&profile));
    assert_eq!(
        fs::read_to_string(live.join("Faithful").join("assets").join("minecraft").join("a.png"))
            .unwrap(),
        "png"
    );
}

#[test]
fn test_apply_empty_profile_empties_live_dir() {
    let f = fixture();
    fs::create_dir_all(f.workdir.join("profiles").join("Vanilla")).unwrap();
    write(&f.game_dir.join("mods").join("a.jar"), "a");
    write(&f.game_dir.join("mods").join("nested").join("b.jar"), "b");

    let report = f.activator.apply(Category::Mods, "Vanilla").unwrap();

    assert_eq!(report.succeeded, 0);
    assert_eq!(fs::read_dir(f.game_dir.join("mods")).unwrap().count(), 0);
}

#[test]
fn test_apply_preserves_modification_time() {
    let f = fixture();
    let source = f.workdir.join("profiles").join("Default").join("a.jar");
    write(&source, "a");
    let past = SystemTime::now() - Duration::from_secs(7 * 24 * 60 * 60);
    fs::OpenOptions::new()
        .write(true)
        .open(&source)
        .unwrap()
        .set_modified(past)
        .unwrap();

    f.activator.apply(Category::Mods, "Default").unwrap();

    let copied = fs::metadata(f.game_dir.join("mods").join("a.jar"))
        .unwrap()
        .modified()
        .unwrap();
    let expected = fs::metadata(&source).unwrap().modified().unwrap();
    assert_eq!(copied, expected);
}

#[test]
fn test_apply_is_repeatable() {
    let f = fixture();
    write(&f.workdir.join("profiles").join("A").join("a.jar"), "a");
    write(&f.workdir.join("profiles").join("B").join("b.jar"), "b");

    f.activator.apply(Category::Mods, "A").unwrap();
    f.activator.apply(Category::Mods, "B").unwrap();
    f.activator.apply(Category::Mods, "A").unwrap();

    assert_eq!(
        relative_files(&f.game_dir.join("mods")),
        BTreeSet::from(["a.jar".to_string()])
    );
}

#[cfg(unix)]
#[test]
fn test_apply_removes_symlinks_without_following() {
    let f = fixture();
    let outside = f.workdir.join("outside");
    write(&outside.join("precious.jar"), "precious");
    let live = f.game_dir.join("mods");
    fs::create_dir_all(&live).unwrap();
    std::os::unix::fs::symlink(&outside, live.join("link")).unwrap();
    fs::create_dir_all(f.workdir.join("profiles").join("Default")).unwrap();

    f.activator.apply(Category::Mods, "Default").unwrap();

    assert!(!live.join("link").exists());
    assert!(outside.join("precious.jar").exists());
}

#[test]
fn test_apply_rejects_names_outside_category_root() {
    let f = fixture();
    write(&f.workdir.join("profiles").join("a").join("a.jar"), "a");
    write(&f.workdir.join("profiles").join("b").join("b.jar"), "b");
    write(&f.workdir.join("stray.jar"), "stray");
    let live = f.game_dir.join("mods");
    write(&live.join("keep.jar"), "keep");

    for name in ["", ".", "..", "a/..", "../profiles"] {
        let err = f.activator.apply(Category::Mods, name).unwrap_err();
        assert!(
            matches!(err, ProfileError::InvalidName { .. }),
            "{name:?} gave {err:?}"
        );
    }

    assert_eq!(
        relative_files(&live),
        BTreeSet::from(["keep.jar".to_string()])
    );
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

/// Whether `dir` really refuses writes once made read-only (not when running as root)
#[cfg(unix)]
fn write_protection_enforced(dir: &Path) -> bool {
    let canary = dir.join(".canary");
    match fs::write(&canary, "") {
        Ok(()) => {
            let _ = fs::remove_file(&canary);
            false
        }
        Err(_) => true,
    }
}

#[cfg(unix)]
#[test]
fn test_apply_copies_read_only_files() {
    let f = fixture();
    let profile = f.workdir.join("profiles").join("ro");
    let files = [
        profile.join("x.jar"),
        profile.join("sub").join("a.jar"),
        profile.join("sub").join("b.jar"),
    ];
    for path in &files {
        write(path, "jar");
        set_mode(path, 0o444);
    }

    let report = f.activator.apply(Category::Mods, "ro").unwrap();

    assert!(report.is_clean(), "unexpected warnings: {:?}", report.warnings);
    assert_eq!(report.succeeded, 2);
    let live = f.game_dir.join("mods");
    assert_eq!(relative_files(&live), relative_files(&profile));
    assert_eq!(
        fs::metadata(live.join("sub").join("a.jar")).unwrap().modified().unwrap(),
        fs::metadata(&files[1]).unwrap().modified().unwrap()
    );

    // Read-only live copies do not block the next apply
    write(&f.workdir.join("profiles").join("rw").join("y.jar"), "y");
    f.activator.apply(Category::Mods, "rw").unwrap();
    assert_eq!(relative_files(&live), BTreeSet::from(["y.jar".to_string()]));
}

#[cfg(unix)]
#[test]
fn test_apply_continues_past_unremovable_live_entry() {
    let f = fixture();
    write(&f.workdir.join("profiles").join("Default").join("new.jar"), "new");
    let live = f.game_dir.join("mods");
    write(&live.join("old.jar"), "old");
    let locked = live.join("locked");
    write(&locked.join("pinned.jar"), "pinned");
    set_mode(&locked, 0o555);

    if !write_protection_enforced(&locked) {
        set_mode(&locked, 0o755);
        return;
    }

    let result = f.activator.apply(Category::Mods, "Default");
    set_mode(&locked, 0o755);
    let report = result.unwrap();

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path, locked);
    assert!(report.warnings[0].message.contains("could not remove"));
    assert!(!live.join("old.jar").exists());
    assert_eq!(fs::read_to_string(live.join("new.jar")).unwrap(), "new");
}

#[cfg(unix)]
#[test]
fn test_apply_continues_past_uncopyable_profile_entries() {
    let f = fixture();
    let profile = f.workdir.join("profiles").join("Default");
    write(&profile.join("a.jar"), "a");
    write(&profile.join("nested").join("b.jar"), "b");
    std::os::unix::fs::symlink(profile.join("gone.jar"), profile.join("dangling.jar")).unwrap();
    std::os::unix::fs::symlink(
        profile.join("nested").join("gone.jar"),
        profile.join("nested").join("dangling.jar"),
    )
    .unwrap();

    let report = f.activator.apply(Category::Mods, "Default").unwrap();

    // Only a.jar counts; nested/ had a failure inside it
    assert_eq!(report.succeeded, 1);
    let failed: BTreeSet<PathBuf> = report.warnings.iter().map(|w| w.path.clone()).collect();
    assert_eq!(
        failed,
        BTreeSet::from([
            profile.join("dangling.jar"),
            profile.join("nested").join("dangling.jar"),
        ])
    );

    let live = f.game_dir.join("mods");
    assert_eq!(fs::read_to_string(live.join("a.jar")).unwrap(), "a");
    assert_eq!(
        fs::read_to_string(live.join("nested").join("b.jar")).unwrap(),
        "b"
    );
}
