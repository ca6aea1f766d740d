//! Pipeline property tests against the library API.
//!
//! These exercise the end-to-end guarantees: idempotent artifacts, stable
//! identifiers across regenerations, no duplicated solution entries, and
//! pass-through of unrelated content.

use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use slnsync::{SyncOptions, SyncRequest, Synchronizer};

const ARTIFACTS: [&str; 4] = [
    "media.sln",
    "player.vcxproj",
    "player.vcxproj.filters",
    "media-settings.xml",
];

fn request(root: &Path, files: &[&str]) -> SyncRequest {
    let toolchain_root = root.join("toolchain");
    fs::create_dir_all(
        toolchain_root
            .join("arm-none-linux-gnueabi")
            .join("libc")
            .join("usr")
            .join("include"),
    )
    .unwrap();
    let qt_root = root.join("qt");
    fs::create_dir_all(qt_root.join("include")).unwrap();

    SyncRequest {
        project: "player".to_string(),
        solution: "media".to_string(),
        files: files.iter().map(|f| f.to_string()).collect(),
        dest_dir: root.join("out"),
        target_addr: "192.168.7.2".to_string(),
        toolchain_path: toolchain_root.join("cs-g++"),
        qt_path: qt_root.join("qmake"),
        make_tool: "jom.exe".to_string(),
        configurations: vec!["Debug".to_string(), "Release".to_string()],
        platform: "Win32".to_string(),
        template_dir: None,
        extra_tokens: HashMap::new(),
    }
}

fn run(req: SyncRequest) -> slnsync::SyncReport {
    Synchronizer::new(req).run(&SyncOptions::default()).unwrap()
}

fn read_artifacts(dest: &Path) -> Vec<(String, Vec<u8>)> {
    ARTIFACTS
        .iter()
        .map(|name| (name.to_string(), fs::read(dest.join(name)).unwrap()))
        .collect()
}

/// The second quoted brace group of the project declaration line.
fn declared_config_id(sln: &str, project: &str) -> String {
    let needle = format!("= \"{project}\",");
    let line = sln
        .lines()
        .find(|l| l.starts_with("Project(") && l.contains(&needle))
        .expect("project declaration present");
    line.rsplit('"').nth(1).unwrap().trim_matches(['{', '}']).to_string()
}

#[test]
fn test_pipeline_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("out");

    let first_report = run(request(temp_dir.path(), &["a.cpp", "b.h"]));
    assert_eq!(first_report.updated.len(), 4);
    let first_bytes = read_artifacts(&dest);

    let second_report = run(request(temp_dir.path(), &["a.cpp", "b.h"]));
    assert!(second_report.updated.is_empty());
    assert_eq!(second_report.unchanged.len(), 4);

    assert_eq!(first_bytes, read_artifacts(&dest));
}

#[test]
fn test_identifiers_stable_across_file_list_growth() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("out");

    run(request(temp_dir.path(), &["a.cpp", "b.h"]));
    let first_sln = fs::read_to_string(dest.join("media.sln")).unwrap();
    let first_id = declared_config_id(&first_sln, "player");

    run(request(temp_dir.path(), &["a.cpp", "b.h", "c.cpp"]));
    let second_sln = fs::read_to_string(dest.join("media.sln")).unwrap();
    let second_id = declared_config_id(&second_sln, "player");

    assert_eq!(first_id, second_id);

    // the grown file list reaches the project descriptor
    let vcxproj = fs::read_to_string(dest.join("player.vcxproj")).unwrap();
    assert!(vcxproj.contains("<ClCompile Include=\"c.cpp\" />"));
}

#[test]
fn test_no_duplicate_declarations_or_configuration_lines() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("out");

    run(request(temp_dir.path(), &["a.cpp", "b.h"]));
    run(request(temp_dir.path(), &["a.cpp", "b.h", "c.cpp"]));

    let sln = fs::read_to_string(dest.join("media.sln")).unwrap();
    let id = declared_config_id(&sln, "player");

    assert_eq!(sln.matches("= \"player\",").count(), 1);
    assert_eq!(
        sln.matches(&format!("{{{id}}}.Debug|Win32.ActiveCfg")).count(),
        1
    );
    assert_eq!(
        sln.matches(&format!("{{{id}}}.Release|Win32.Build.0")).count(),
        1
    );
}

#[test]
fn test_unrelated_solution_content_passes_through() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("out");
    fs::create_dir_all(&dest).unwrap();

    let existing = "\
Microsoft Visual Studio Solution File, Format Version 11.00
# Visual Studio 2010
Project(\"{11111111-2222-3333-4444-555555555555}\") = \"recorder\", \"recorder.vcxproj\", \"{66666666-7777-8888-9999-AAAAAAAAAAAA}\"
EndProject
Global
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution
\t\t{66666666-7777-8888-9999-AAAAAAAAAAAA}.Debug|Win32.ActiveCfg = Debug|Win32
\tEndGlobalSection
EndGlobal
";
    fs::write(dest.join("media.sln"), existing).unwrap();

    run(request(temp_dir.path(), &["a.cpp"]));

    let sln = fs::read_to_string(dest.join("media.sln")).unwrap();
    for line in existing.lines() {
        assert!(sln.contains(line), "line lost in merge: {line}");
    }
    // the unrelated declaration still precedes the new one's config lines
    assert_eq!(sln.matches("= \"recorder\",").count(), 1);
    assert_eq!(sln.matches("= \"player\",").count(), 1);
}

#[test]
fn test_settings_document_expands_each_configuration_once() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("out");

    run(request(temp_dir.path(), &["a.cpp"]));

    let settings = fs::read_to_string(dest.join("media-settings.xml")).unwrap();
    assert_eq!(settings.matches("<preferences>").count(), 1);
    assert_eq!(settings.matches("</preferences>").count(), 1);
    assert_eq!(settings.matches("player - Debug").count(), 1);
    assert_eq!(settings.matches("player - Release").count(), 1);
    assert_eq!(settings.matches("192.168.7.2").count(), 2);
}

#[test]
fn test_unresolved_placeholder_aborts_before_any_write() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    // minimal overrides, one of them carrying an unbound placeholder
    fs::write(
        templates.join("solution.sln"),
        "Global\n\tGlobalSection(ProjectConfigurationPlatforms) = postSolution\n\tEndGlobalSection\nEndGlobal\n",
    )
    .unwrap();
    fs::write(
        templates.join("project.vcxproj"),
        "<Project>\n  <ItemGroup>\n  </ItemGroup>\n  <Note>__NOT_A_TOKEN__</Note>\n</Project>\n",
    )
    .unwrap();
    fs::write(templates.join("project.vcxproj.filters"), "<Project>\n</Project>\n").unwrap();
    fs::write(templates.join("settings.xml"), "  <cfg>__CONFIGURATION_NAME__</cfg>\n").unwrap();

    let mut req = request(temp_dir.path(), &["a.cpp"]);
    req.template_dir = Some(templates);
    let dest = req.dest_dir.clone();

    let err = Synchronizer::new(req)
        .run(&SyncOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("__NOT_A_TOKEN__"));

    // nothing was committed, not even the solution rendered before the failure
    assert!(!dest.join("media.sln").exists());
}
