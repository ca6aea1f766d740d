//! Solution descriptor merging.
//!
//! The merger rebuilds an existing solution line by line, passing everything
//! through verbatim, and inserts at well-defined anchors: a missing project
//! declaration goes in front of the `Global` line, missing configuration
//! mappings go in front of the post-solution section terminator. Identifiers
//! already present in the document are never regenerated, so IDE state that
//! references them stays valid across runs.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::error::SyncError;

static PROJECT_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^Project\("\{(?P<guid>[^}]*)\}"\) = "(?P<name>[^"]*)", "(?P<path>[^"]*)", "\{(?P<config>[^}]*)\}""#,
    )
    .unwrap()
});

const GLOBAL_MARKER: &str = "Global";
const END_GLOBAL_MARKER: &str = "EndGlobal";
const SECTION_END_MARKER: &str = "EndGlobalSection";
const POST_SOLUTION_SUFFIX: &str = "postSolution";

/// One named project inside a solution, with its stable identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: String,
    /// Identifies the project wrapper in its declaration line.
    pub guid: String,
    /// Identifies the project's build-configuration mappings.
    pub config_id: String,
    pub descriptor_path: String,
}

impl ProjectEntry {
    fn generate(name: &str) -> Self {
        Self {
            name: name.to_string(),
            guid: new_id(),
            config_id: new_id(),
            descriptor_path: format!("{name}.vcxproj"),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}

/// Remembers per-project identifiers seen while scanning a solution.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    entries: HashMap<String, ProjectEntry>,
}

impl ProjectRegistry {
    pub fn record(&mut self, entry: ProjectEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ProjectEntry> {
        self.entries.get(name)
    }

    /// Return the entry for `name`, synthesizing fresh identifiers if the
    /// project is not yet known. Known entries are returned unchanged.
    pub fn ensure(&mut self, name: &str) -> &ProjectEntry {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| ProjectEntry::generate(name))
    }
}

/// Result of merging one project into a solution document.
#[derive(Debug)]
pub struct MergeOutcome {
    /// The authoritative new document text.
    pub text: String,
    /// Resolved entry for the target project.
    pub entry: ProjectEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeState {
    Scanning,
    InPostSolutionSection,
    Done,
}

/// Merge `project` into the solution text, preserving every unrelated line
/// in its original position.
///
/// `source_path` labels errors; `source` may come from the file at that path
/// or from the bundled fallback template. A document with no `Global` line or
/// no post-solution configuration section is rejected as malformed rather
/// than silently skipping the insertions.
pub fn merge(
    source: &str,
    source_path: &Path,
    project: &str,
    configurations: &[String],
    platform: &str,
) -> Result<MergeOutcome, SyncError> {
    let mut registry = ProjectRegistry::default();
    let mut out = String::with_capacity(source.len());
    let mut state = MergeState::Scanning;
    let mut recorded_configs: HashSet<String> = HashSet::new();
    let mut resolved: Option<ProjectEntry> = None;
    let mut saw_post_section = false;

    for line in source.lines() {
        let trimmed = line.trim();
        match state {
            MergeState::Scanning => {
                if let Some(caps) = PROJECT_DECL_RE.captures(trimmed) {
                    registry.record(ProjectEntry {
                        name: caps["name"].to_string(),
                        guid: caps["guid"].to_string(),
                        config_id: caps["config"].to_string(),
                        descriptor_path: caps["path"].to_string(),
                    });
                } else if trimmed == GLOBAL_MARKER {
                    let known = registry.contains(project);
                    let entry = registry.ensure(project).clone();
                    if !known {
                        push_declaration(&mut out, &entry);
                    }
                    resolved = Some(entry);
                } else if trimmed.ends_with(POST_SOLUTION_SUFFIX) {
                    state = MergeState::InPostSolutionSection;
                    saw_post_section = true;
                } else if trimmed == END_GLOBAL_MARKER {
                    state = MergeState::Done;
                }
            }
            MergeState::InPostSolutionSection => {
                if trimmed == SECTION_END_MARKER {
                    if let Some(entry) = &resolved
                        && !recorded_configs.contains(&entry.config_id)
                    {
                        push_configuration_lines(&mut out, entry, configurations, platform);
                    }
                    state = MergeState::Scanning;
                } else if let Some(id) = leading_config_id(trimmed) {
                    recorded_configs.insert(id.to_string());
                }
            }
            MergeState::Done => {}
        }
        out.push_str(line);
        out.push('\n');
    }

    let entry = resolved.ok_or_else(|| {
        SyncError::malformed(source_path, "no Global section to anchor the project declaration")
    })?;
    if !saw_post_section {
        return Err(SyncError::malformed(
            source_path,
            "no post-solution configuration section",
        ));
    }

    Ok(MergeOutcome { text: out, entry })
}

/// The configuration identifier is the brace-stripped token before the
/// first `.` of a configuration-platform line.
fn leading_config_id(trimmed: &str) -> Option<&str> {
    let token = trimmed.split('.').next()?;
    let id = token.trim_start_matches('{').trim_end_matches('}');
    if id.is_empty() { None } else { Some(id) }
}

fn push_declaration(out: &mut String, entry: &ProjectEntry) {
    out.push_str(&format!(
        "Project(\"{{{guid}}}\") = \"{name}\", \"{path}\", \"{{{config}}}\"\nEndProject\n",
        guid = entry.guid,
        name = entry.name,
        path = entry.descriptor_path,
        config = entry.config_id,
    ));
}

fn push_configuration_lines(
    out: &mut String,
    entry: &ProjectEntry,
    configurations: &[String],
    platform: &str,
) {
    for cfg in configurations {
        out.push_str(&format!(
            "\t\t{{{id}}}.{cfg}|{platform}.ActiveCfg = {cfg}|{platform}\n",
            id = entry.config_id,
        ));
        out.push_str(&format!(
            "\t\t{{{id}}}.{cfg}|{platform}.Build.0 = {cfg}|{platform}\n",
            id = entry.config_id,
        ));
    }
}
