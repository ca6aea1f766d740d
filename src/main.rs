//! slnsync CLI
//!
//! Command-line interface for synchronizing IDE manifests from a declared
//! source-file set.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::path::PathBuf;

use slnsync::{Config, SyncOptions, SyncRequest, Synchronizer, init};

#[derive(Parser)]
#[command(name = "slnsync")]
#[command(
    author,
    version,
    about = "Sync IDE solution/project manifests from a declared file set"
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter slnsync configuration
    Init {
        /// Directory to place slnsync.toml in (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Regenerate the solution, project, and preferences manifests
    Sync {
        /// Project to register and describe
        project: String,

        /// Declared source files, in display order
        files: Vec<String>,

        /// Solution name (default: the project name)
        #[arg(short, long, env = "SLNSYNC_SOLUTION")]
        solution: Option<String>,

        /// Directory the manifests are written to
        #[arg(short, long, env = "SLNSYNC_DEST_DIR")]
        dest_dir: Option<PathBuf>,

        /// Target device address for the debugger preferences
        #[arg(short, long, env = "SLNSYNC_TARGET_ADDR")]
        target_addr: Option<String>,

        /// Cross-toolchain binary; the sysroot is probed next to it
        #[arg(long, env = "SLNSYNC_TOOLCHAIN")]
        toolchain: Option<PathBuf>,

        /// Qt tool binary; headers are expected next to it
        #[arg(long, env = "SLNSYNC_QT_PATH")]
        qt_path: Option<PathBuf>,

        /// Build tool written into the generated build command lines
        #[arg(long, env = "SLNSYNC_MAKE_TOOL")]
        make_tool: Option<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,

        /// Show detailed output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => {
            let dir = path.unwrap_or(env::current_dir()?);

            print_header();
            println!("{}", "Initializing slnsync configuration...\n".cyan());

            init::init(&dir, force)?;

            println!("\n{}", "✨ Initialization complete!".green().bold());
            println!(
                "\nNext steps:\n  1. Fill in {} with your paths\n  2. Run {} to generate the manifests",
                "slnsync.toml".cyan(),
                "slnsync sync <project> <files>...".cyan()
            );
        }

        Commands::Sync {
            project,
            files,
            solution,
            dest_dir,
            target_addr,
            toolchain,
            qt_path,
            make_tool,
            config,
            dry_run,
            verbose,
        } => {
            print_header();

            let cwd = env::current_dir()?;
            let config = Config::load_or_default(config.as_deref(), &cwd)?;

            if verbose {
                println!(
                    "Project: {} ({} declared files)\n",
                    project.cyan(),
                    files.len()
                );
            }

            let request = SyncRequest {
                solution: solution
                    .or_else(|| config.solution.clone())
                    .unwrap_or_else(|| project.clone()),
                dest_dir: dest_dir.or(config.dest_dir).context(
                    "no destination directory (use --dest-dir, SLNSYNC_DEST_DIR, or dest_dir in slnsync.toml)",
                )?,
                target_addr: target_addr.or(config.target_addr).context(
                    "no target address (use --target-addr, SLNSYNC_TARGET_ADDR, or target_addr in slnsync.toml)",
                )?,
                toolchain_path: toolchain.or(config.toolchain_path).context(
                    "no toolchain path (use --toolchain, SLNSYNC_TOOLCHAIN, or toolchain_path in slnsync.toml)",
                )?,
                qt_path: qt_path.or(config.qt_path).context(
                    "no Qt path (use --qt-path, SLNSYNC_QT_PATH, or qt_path in slnsync.toml)",
                )?,
                make_tool: make_tool.unwrap_or(config.make_tool),
                configurations: config.configurations,
                platform: config.platform,
                template_dir: config.template_dir,
                extra_tokens: config.tokens,
                project,
                files,
            };

            println!("{}", "➤ Syncing project manifests".cyan().bold());
            let synchronizer = Synchronizer::new(request);
            let report = synchronizer.run(&SyncOptions { dry_run, verbose })?;

            println!("\n{}", "✨ Sync complete!".green().bold());
            println!(
                "  Updated: {}, Unchanged: {}",
                report.updated.len().to_string().green(),
                report.unchanged.len().to_string().dimmed()
            );
        }
    }

    Ok(())
}

fn print_header() {
    println!(
        "{}",
        r#"
╔═══════════════════════════════════════════════════════════════════╗
║                            slnsync                                ║
║               IDE Manifest Synchronization                        ║
╚═══════════════════════════════════════════════════════════════════╝
"#
        .cyan()
        .bold()
    );
}
