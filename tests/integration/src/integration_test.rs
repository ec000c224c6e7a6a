//! End-to-end integration test for the rule sync vertical slice
//!
//! Exercises the complete flow: manifest parsing -> engine construction ->
//! plan -> execute -> verify, across multiple projects and formats.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rules_core::{Config, IssueKind, SyncEngine, SyncOptions};
use rules_fs::NormalizedPath;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Set up a source tree and two client projects with a shared manifest.
fn setup() -> (TempDir, Config) {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("central/rules");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(temp.path().join("projects/app")).unwrap();
    fs::create_dir_all(temp.path().join("projects/tool")).unwrap();

    write(&source, "general.md", "# General\n\nBe consistent.\n");
    write(&source, "python/style.md", "# Python\n\nUse black.\n");
    write(&source, "python/legacy/old.md", "# Old\n\nDo not use.\n");

    let manifest = format!(
        r#"
[source]
dir = "{source}"

[[projects]]
path = "{app}"
rules = ["**/*.md", "!python/legacy/**"]
formats = ["claude", "cursor"]

[[projects]]
path = "{tool}"
rules = ["general.md"]
formats = ["agents"]
"#,
        source = source.display(),
        app = temp.path().join("projects/app").display(),
        tool = temp.path().join("projects/tool").display(),
    );

    let config = Config::parse(&manifest).unwrap();
    (temp, config)
}

#[test]
fn full_sync_and_verify_round_trip() {
    let (temp, config) = setup();
    let engine = SyncEngine::new(&config).unwrap();

    for project in &config.projects {
        let report = engine.sync_project(project, &SyncOptions::default()).unwrap();
        // Every written path is absolute and normalized.
        assert!(report.written.iter().all(NormalizedPath::is_absolute));
    }

    // App got the concatenated document and the mirrored tree, minus the
    // excluded legacy rule.
    let app = temp.path().join("projects/app");
    let claude = fs::read_to_string(app.join("CLAUDE.md")).unwrap();
    assert!(claude.contains("# General"));
    assert!(claude.contains("# Python"));
    assert!(!claude.contains("# Old"));
    assert!(app.join(".cursor/rules/general.md").exists());
    assert!(app.join(".cursor/rules/python/style.md").exists());
    assert!(!app.join(".cursor/rules/python/legacy/old.md").exists());

    // Tool got only the rule it selected.
    let agents = fs::read_to_string(temp.path().join("projects/tool/AGENTS.md")).unwrap();
    assert!(agents.contains("# General"));
    assert!(!agents.contains("# Python"));

    // Verification right after execution reports zero issues everywhere.
    for project in &config.projects {
        for verification in engine.verify_project(project).unwrap() {
            assert!(verification.result.synced);
        }
    }
}

#[test]
fn drift_is_detected_and_repaired_by_resync() {
    let (temp, config) = setup();
    let engine = SyncEngine::new(&config).unwrap();
    let app = &config.projects[0];

    engine.sync_project(app, &SyncOptions::default()).unwrap();

    // Introduce drift of all three kinds.
    let app_root = temp.path().join("projects/app");
    fs::write(app_root.join("CLAUDE.md"), "# hand edited\n").unwrap();
    fs::remove_file(app_root.join(".cursor/rules/general.md")).unwrap();
    write(&app_root, ".cursor/rules/stray.md", "# stray\n");

    let results = engine.verify_project(app).unwrap();
    let claude = results.iter().find(|v| v.format == "claude").unwrap();
    let cursor = results.iter().find(|v| v.format == "cursor").unwrap();

    assert!(!claude.result.synced);
    assert_eq!(claude.result.issues[0].kind, IssueKind::Modified);

    let cursor_kinds: Vec<IssueKind> =
        cursor.result.issues.iter().map(|i| i.kind).collect();
    assert!(cursor_kinds.contains(&IssueKind::Missing));
    assert!(cursor_kinds.contains(&IssueKind::Extra));

    // Re-sync repairs the managed files; the stray file stays and keeps
    // being reported as extra.
    engine.sync_project(app, &SyncOptions::default()).unwrap();
    let results = engine.verify_project(app).unwrap();
    let claude = results.iter().find(|v| v.format == "claude").unwrap();
    let cursor = results.iter().find(|v| v.format == "cursor").unwrap();

    assert!(claude.result.synced);
    assert!(!cursor.result.synced);
    assert_eq!(cursor.result.issues.len(), 1);
    assert_eq!(cursor.result.issues[0].kind, IssueKind::Extra);
}

#[test]
fn source_change_propagates_on_next_sync() {
    let (temp, config) = setup();
    let engine = SyncEngine::new(&config).unwrap();
    let app = &config.projects[0];

    engine.sync_project(app, &SyncOptions::default()).unwrap();

    // Update a source rule; the project drifts until the next sync.
    let source = temp.path().join("central/rules");
    write(&source, "general.md", "# General\n\nBe very consistent.\n");

    let results = engine.verify_project(app).unwrap();
    assert!(results.iter().any(|v| !v.result.synced));

    engine.sync_project(app, &SyncOptions::default()).unwrap();
    let results = engine.verify_project(app).unwrap();
    assert!(results.iter().all(|v| v.result.synced));

    let claude = fs::read_to_string(temp.path().join("projects/app/CLAUDE.md")).unwrap();
    assert!(claude.contains("Be very consistent."));
}

#[test]
fn reports_serialize_for_scripting() {
    let (_temp, config) = setup();
    let engine = SyncEngine::new(&config).unwrap();
    let app = &config.projects[0];

    engine.sync_project(app, &SyncOptions::default()).unwrap();
    let results = engine.verify_project(app).unwrap();

    let json = serde_json::to_string(&results).unwrap();
    assert!(json.contains("\"synced\":true"));
    assert!(json.contains("\"claude\""));
}

#[test]
fn projects_are_isolated_from_each_other() {
    let (temp, config) = setup();
    let engine = SyncEngine::new(&config).unwrap();

    // Syncing only the first project must not touch the second.
    engine
        .sync_project(&config.projects[0], &SyncOptions::default())
        .unwrap();

    assert!(!temp.path().join("projects/tool/AGENTS.md").exists());
}
