//! Preferences document expansion.
//!
//! The preferences file collects one rendered settings block per build
//! configuration inside a single root element. An existing document is
//! carried over line for line (minus its closing root line) so hand-edited
//! blocks survive; a block is only appended when the document does not
//! already contain it, keeping repeated runs from accumulating duplicates.

use crate::error::SyncError;
use crate::render::render;
use crate::tokens::{self, TokenSet};

pub const ROOT_OPEN: &str = "<preferences>";
pub const ROOT_CLOSE: &str = "</preferences>";

/// Build the new preferences document text.
///
/// Each configuration renders the template against a copy of the shared
/// token set extended with that configuration's name, immediately, so no
/// binding leaks between iterations.
pub fn expand(
    existing: Option<&str>,
    template_name: &str,
    template: &str,
    base_tokens: &TokenSet,
    configurations: &[String],
) -> Result<String, SyncError> {
    let mut out = String::new();

    match existing {
        Some(doc) => {
            for line in doc.lines() {
                if line.trim() != ROOT_CLOSE {
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
        None => {
            out.push_str(ROOT_OPEN);
            out.push('\n');
        }
    }

    for configuration in configurations {
        let scoped = base_tokens.with(tokens::CONFIGURATION_NAME, configuration);
        let block = render(template_name, template, &scoped)?;
        if !out.contains(&block) {
            out.push_str(&block);
        }
    }

    out.push_str(ROOT_CLOSE);
    out.push('\n');
    Ok(out)
}
