// tests/cli_spec.rs
//
// Drives the `roadmap` binary end to end against roadmaps in temporary
// project directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SCENARIO: &str = "# Roadmap\n\n### Phase 1: Setup\n- [x] Create repository\n- [ ] Configure CI\n\n### Phase 2: Build\n";

struct Project {
    dir: TempDir,
}

impl Project {
    /// A project root (`.git` marker) with `docs/ROADMAP.md` holding `roadmap`.
    fn with_roadmap(roadmap: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/ROADMAP.md"), roadmap).unwrap();
        Self { dir }
    }

    fn without_roadmap() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn roadmap_path(&self) -> PathBuf {
        self.root().join("docs/ROADMAP.md")
    }

    fn roadmap(&self) -> String {
        fs::read_to_string(self.roadmap_path()).unwrap()
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_roadmap"))
            .args(args)
            .current_dir(self.root())
            .env_remove("ROADMAP_FILE")
            .env_remove("ROADMAP_ROOT")
            .env("XDG_CONFIG_HOME", self.root().join("xdg"))
            .env("NO_COLOR", "1")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn list_prints_phases_in_document_order() {
    let project = Project::with_roadmap(SCENARIO);
    let output = project.run(&["list"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Available Phases:\nPhase 1: Setup\nPhase 2: Build\n"
    );
}

#[test]
fn list_without_phases_prints_only_the_header() {
    let project = Project::with_roadmap("# Roadmap\n\nTBD\n");
    let output = project.run(&["ls"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Available Phases:\n");
}

#[test]
fn view_prints_only_the_phase_block() {
    let project = Project::with_roadmap(SCENARIO);

    let output = project.run(&["view", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "### Phase 2: Build\n");

    let output = project.run(&["view", "1"]);
    assert_eq!(
        stdout(&output),
        "### Phase 1: Setup\n- [x] Create repository\n- [ ] Configure CI\n"
    );
}

#[test]
fn view_unknown_phase_fails_without_output() {
    let project = Project::with_roadmap(SCENARIO);
    let output = project.run(&["view", "3"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Phase 3 not found."));
    assert_eq!(project.roadmap(), SCENARIO);
}

#[test]
fn add_item_inserts_after_last_entry() {
    let project = Project::with_roadmap(SCENARIO);
    let output = project.run(&["add-item", "1", "Write tests"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Added item to Phase 1: Write tests\n");
    assert_eq!(
        project.roadmap(),
        "# Roadmap\n\n### Phase 1: Setup\n- [x] Create repository\n- [ ] Configure CI\n- [ ] Write tests\n\n### Phase 2: Build\n"
    );
}

#[test]
fn add_item_to_empty_last_phase_appends_at_end_of_file() {
    let project = Project::with_roadmap(SCENARIO);
    let output = project.run(&["add", "2", "Compile", "everything"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(project.roadmap(), format!("{SCENARIO}- [ ] Compile everything\n"));
}

#[test]
fn add_item_unknown_phase_leaves_file_untouched() {
    let project = Project::with_roadmap(SCENARIO);
    let output = project.run(&["add-item", "7", "Nope"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Phase 7 not found."));
    assert!(stdout(&output).is_empty());
    assert_eq!(project.roadmap(), SCENARIO);
}

#[test]
fn add_item_preserves_crlf_and_untouched_bytes() {
    let original = "Intro  \r\n### Phase 1: A\r\n- [ ] a\r\nnotes\t\r\n### Phase 2: B\r\n";
    let project = Project::with_roadmap(original);
    let output = project.run(&["add-item", "1", "b"]);

    assert!(output.status.success());
    assert_eq!(
        project.roadmap(),
        "Intro  \r\n### Phase 1: A\r\n- [ ] a\r\n- [ ] b\r\nnotes\t\r\n### Phase 2: B\r\n"
    );
}

#[test]
fn add_item_rejects_text_with_line_breaks() {
    let project = Project::with_roadmap(SCENARIO);

    for text in ["two\nlines", ""] {
        let output = project.run(&["add-item", "1", text]);
        assert_eq!(output.status.code(), Some(1), "text: {text:?}");
        assert!(stderr(&output).contains("single non-empty line"));
        assert!(stdout(&output).is_empty());
    }
    assert_eq!(project.roadmap(), SCENARIO);
}

#[cfg(unix)]
#[test]
fn failed_write_leaves_the_original_intact() {
    use std::os::unix::fs::PermissionsExt;

    let project = Project::with_roadmap(SCENARIO);
    fs::write(project.root().join("roadmap.toml"), "lock = false\n").unwrap();
    let docs = project.root().join("docs");
    fs::set_permissions(&docs, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users can still write into a read-only directory.
    let writable = fs::File::create(docs.join("write-check")).is_ok();
    if writable {
        fs::remove_file(docs.join("write-check")).unwrap();
        fs::set_permissions(&docs, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping: read-only directories are writable for this user");
        return;
    }

    let output = project.run(&["add-item", "1", "Write tests"]);
    fs::set_permissions(&docs, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).trim().is_empty());
    assert!(stderr(&output).contains("Failed to update roadmap"));
    assert!(stdout(&output).is_empty());
    assert_eq!(fs::read(project.roadmap_path()).unwrap(), SCENARIO.as_bytes());

    let leftovers: Vec<_> = fs::read_dir(&docs)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(".roadmap-"))
        .collect();
    assert!(leftovers.is_empty(), "leftover temp files: {leftovers:?}");
}

#[test]
fn reads_never_modify_the_file() {
    let project = Project::with_roadmap(SCENARIO);

    for args in [&["list"][..], &["view", "1"], &["show"]] {
        let first = project.run(args);
        let second = project.run(args);
        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
        assert_eq!(project.roadmap(), SCENARIO);
    }
}

#[test]
fn show_prints_the_whole_roadmap() {
    let project = Project::with_roadmap(SCENARIO);
    let output = project.run(&["show"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", SCENARIO.trim_end()));
}

#[test]
fn missing_roadmap_fails_for_every_command() {
    let project = Project::without_roadmap();

    for args in [&["list"][..], &["view", "1"], &["add-item", "1", "x"], &["show"]] {
        let output = project.run(args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stderr(&output).contains("not found"), "args: {args:?}");
    }
    assert!(!project.roadmap_path().exists());
    assert!(!project.root().join("docs").exists());
}

#[test]
fn project_config_selects_the_roadmap() {
    let project = Project::without_roadmap();
    fs::write(project.root().join("roadmap.toml"), "path = \"PLAN.md\"\n").unwrap();
    fs::write(project.root().join("PLAN.md"), "### Phase 4: Custom\n").unwrap();

    let output = project.run(&["list"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Available Phases:\nPhase 4: Custom\n");
}

#[test]
fn file_flag_overrides_configuration() {
    let project = Project::with_roadmap(SCENARIO);
    fs::write(project.root().join("OTHER.md"), "### Phase 9: Elsewhere\n").unwrap();

    let output = project.run(&["--file", "OTHER.md", "list"]);
    assert_eq!(stdout(&output), "Available Phases:\nPhase 9: Elsewhere\n");
}

#[test]
fn lock_file_is_created_next_to_the_roadmap() {
    let project = Project::with_roadmap(SCENARIO);
    let output = project.run(&["add-item", "2", "x"]);

    assert!(output.status.success());
    assert!(project.root().join("docs/ROADMAP.md.lock").is_file());
}

#[test]
fn lock_can_be_disabled() {
    let project = Project::with_roadmap(SCENARIO);
    fs::write(project.root().join("roadmap.toml"), "lock = false\n").unwrap();
    let output = project.run(&["add-item", "2", "x"]);

    assert!(output.status.success());
    assert!(!project.root().join("docs/ROADMAP.md.lock").exists());
}

#[test]
fn missing_or_unknown_command_fails() {
    let project = Project::with_roadmap(SCENARIO);

    let output = project.run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Available commands"));

    let output = project.run(&["archive"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("archive"));
}

#[test]
fn command_help_exits_successfully() {
    let project = Project::with_roadmap(SCENARIO);
    let output = project.run(&["view", "--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("phase"));
}
