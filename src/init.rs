//! Starter configuration for new projects.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::config::CONFIG_FILE_NAME;

/// Default configuration template
pub const DEFAULT_CONFIG: &str = r#"# slnsync configuration
# Values here are defaults; command-line flags and SLNSYNC_* environment
# variables override them per run.

# Solution name (defaults to the project name passed on the command line)
# solution = "usb_ir"

# Directory the solution, project, and preferences files are written to
# dest_dir = "C:/work/usb_ir/win"

# Device address substituted into the remote-debugger preferences
# target_addr = "192.168.7.2"

# Cross-compiler binary; the target sysroot is located next to it
# toolchain_path = "C:/CodeSourcery/bin/arm-none-linux-gnueabi-g++.exe"

# Qt tool binary; headers are expected in <parent>/include
# qt_path = "C:/Qt/4.8/bin/qmake.exe"

# Build tool written into the generated build command lines
make_tool = "jom.exe"

# Build configurations, in emission order
configurations = ["Debug", "Release"]
platform = "Win32"

# Directory of template overrides (solution.sln, project.vcxproj,
# project.vcxproj.filters, settings.xml). Bundled templates are used
# when unset.
# template_dir = "templates"

# Additional placeholder bindings for template overrides
[tokens]
"#;

/// Write a starter configuration file into `dir`.
pub fn init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::create_dir_all(dir)?;
    fs::write(&path, DEFAULT_CONFIG)?;
    println!("  {} Wrote {}", "✔".green(), path.display());

    Ok(())
}
