//! Synchronization pipeline.
//!
//! One run resolves the declared inputs into token bindings, renders every
//! artifact in memory, and only then commits them through the idempotent
//! writer. Rendering everything first means a bad template or missing token
//! aborts before a single file is touched.

use anyhow::Result;
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::classify::{self, BUILD_MANIFEST};
use crate::error::SyncError;
use crate::preferences;
use crate::render;
use crate::solution;
use crate::templates;
use crate::tokens::{self, TokenSet};
use crate::toolchain;
use crate::writer::{self, CommitOutcome};

/// Fully resolved inputs for one synchronization pass.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Sub-project to register and describe.
    pub project: String,
    /// Solution hosting the project; names the `.sln` and settings files.
    pub solution: String,
    /// Declared source files, in display order.
    pub files: Vec<String>,
    pub dest_dir: PathBuf,
    pub target_addr: String,
    pub toolchain_path: PathBuf,
    pub qt_path: PathBuf,
    pub make_tool: String,
    pub configurations: Vec<String>,
    pub platform: String,
    /// Template overrides on disk; bundled templates when unset.
    pub template_dir: Option<PathBuf>,
    pub extra_tokens: HashMap<String, String>,
}

/// Options for the sync operation
#[derive(Debug, Default)]
pub struct SyncOptions {
    /// Show what would be done without making changes
    pub dry_run: bool,
    /// Show detailed output
    pub verbose: bool,
}

/// Which artifacts a run generated versus left alone.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
}

/// Performs one descriptor synchronization pass.
pub struct Synchronizer {
    request: SyncRequest,
}

impl Synchronizer {
    pub fn new(request: SyncRequest) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &SyncRequest {
        &self.request
    }

    /// Run the full pipeline: classify, merge, render, commit, expand.
    pub fn run(&self, options: &SyncOptions) -> Result<SyncReport> {
        let req = &self.request;
        let mut report = SyncReport::default();

        if options.dry_run {
            println!("{}", "Running in dry-run mode\n".cyan());
        }

        // The project's own build manifest always rides along.
        let mut declared = req.files.clone();
        declared.push(format!("../{}/{}", req.project, BUILD_MANIFEST));
        let records = classify::classify_all(&declared);
        tracing::debug!(files = records.len(), "classified declared file list");
        if options.verbose {
            println!("  {} files declared", records.len());
        }

        let include_dirs = toolchain::derive_include_path(&req.toolchain_path, &req.qt_path)?;

        let mut base = TokenSet::new();
        base.set(tokens::PROJECT_NAME, &req.project);
        base.set(tokens::TARGET_ADDR, &req.target_addr);
        base.set(
            tokens::TOOLCHAIN_PATH,
            req.toolchain_path.display().to_string(),
        );
        base.set(tokens::MAKE_TOOL, &req.make_tool);
        base.set(tokens::INCLUDE_DIRS, include_dirs);
        base.extend(req.extra_tokens.iter().map(|(k, v)| (k.clone(), v.clone())));

        // Render every artifact before committing any of them.
        let sln_target = req.dest_dir.join(format!("{}.sln", req.solution));
        let sln_source = self.solution_source(&sln_target)?;
        let merged = solution::merge(
            &sln_source,
            &sln_target,
            &req.project,
            &req.configurations,
            &req.platform,
        )?;

        let project_tokens = base.with(tokens::PROJECT_GUID, &merged.entry.guid);
        let project_template =
            self.load_template(templates::PROJECT_TEMPLATE_NAME, templates::PROJECT_TEMPLATE)?;
        let filters_template =
            self.load_template(templates::FILTERS_TEMPLATE_NAME, templates::FILTERS_TEMPLATE)?;
        let project_text = render::render_project(
            templates::PROJECT_TEMPLATE_NAME,
            &project_template,
            &project_tokens,
            &records,
            false,
        )?;
        let filters_text = render::render_project(
            templates::FILTERS_TEMPLATE_NAME,
            &filters_template,
            &project_tokens,
            &records,
            true,
        )?;

        let settings_target = req.dest_dir.join(format!("{}-settings.xml", req.solution));
        let settings_template =
            self.load_template(templates::SETTINGS_TEMPLATE_NAME, templates::SETTINGS_TEMPLATE)?;
        let existing_settings = read_optional(&settings_target)?;
        let settings_text = preferences::expand(
            existing_settings.as_deref(),
            templates::SETTINGS_TEMPLATE_NAME,
            &settings_template,
            &base,
            &req.configurations,
        )?;

        // Commit phase.
        self.commit_one(&sln_target, &merged.text, options, &mut report)?;

        let project_target = req.dest_dir.join(&merged.entry.descriptor_path);
        let filters_target = req.dest_dir.join(format!(
            "{}.filters",
            merged.entry.descriptor_path
        ));
        self.commit_pair(
            (&project_target, &project_text),
            (&filters_target, &filters_text),
            options,
            &mut report,
        )?;

        self.commit_one(&settings_target, &settings_text, options, &mut report)?;

        Ok(report)
    }

    /// Existing solution text, or the fallback template when none exists.
    fn solution_source(&self, sln_target: &Path) -> Result<String, SyncError> {
        match read_optional(sln_target)? {
            Some(text) => Ok(text),
            None => {
                tracing::debug!(solution = %sln_target.display(), "no existing solution, using fallback template");
                self.load_template(templates::SOLUTION_TEMPLATE_NAME, templates::SOLUTION_TEMPLATE)
            }
        }
    }

    fn load_template(
        &self,
        file_name: &str,
        bundled: &'static str,
    ) -> Result<String, SyncError> {
        match &self.request.template_dir {
            Some(dir) => {
                let path = dir.join(file_name);
                fs::read_to_string(&path).map_err(|e| SyncError::missing_input(path, e))
            }
            None => Ok(bundled.to_string()),
        }
    }

    fn commit_one(
        &self,
        target: &Path,
        contents: &str,
        options: &SyncOptions,
        report: &mut SyncReport,
    ) -> Result<()> {
        let staged = writer::stage(target, contents)?;
        let outcome = if options.dry_run {
            staged.preview()?
        } else {
            staged.commit()?
        };
        record(target, outcome, options, report);
        Ok(())
    }

    /// The project descriptor and its filter sidecar share one outcome.
    fn commit_pair(
        &self,
        primary: (&Path, &str),
        sidecar: (&Path, &str),
        options: &SyncOptions,
        report: &mut SyncReport,
    ) -> Result<()> {
        let staged_primary = writer::stage(primary.0, primary.1)?;
        let staged_sidecar = writer::stage(sidecar.0, sidecar.1)?;
        let outcome = if options.dry_run {
            staged_primary.preview()?
        } else {
            writer::commit_group(staged_primary, vec![staged_sidecar])?
        };
        record(primary.0, outcome, options, report);
        record(sidecar.0, outcome, options, report);
        Ok(())
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, SyncError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SyncError::missing_input(path, e)),
    }
}

fn record(target: &Path, outcome: CommitOutcome, options: &SyncOptions, report: &mut SyncReport) {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());

    match outcome {
        CommitOutcome::Updated => {
            if options.dry_run {
                println!("  {} Would generate {}", "→".cyan(), name);
            } else {
                println!("  {} Generated new {}", "✔".green(), name);
            }
            report.updated.push(name);
        }
        CommitOutcome::Unchanged => {
            if options.verbose {
                println!("  {} {} unchanged", "○".yellow(), name);
            }
            report.unchanged.push(name);
        }
    }
}
