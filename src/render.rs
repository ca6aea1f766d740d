//! Descriptor template rendering.
//!
//! Templates carry `__UPPER_SNAKE__` placeholders. Every placeholder must
//! resolve against the supplied [`TokenSet`] before any output is produced;
//! an unbound placeholder aborts the render. Project descriptors additionally
//! receive the classified file list as an item group injected after the first
//! end-of-item-group marker.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::classify::FileRecord;
use crate::error::SyncError;
use crate::tokens::TokenSet;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([A-Z][A-Z0-9_]*?)__").unwrap());

/// Marker line after which the generated item group is injected.
const ITEM_GROUP_END: &str = "</ItemGroup>";

/// Substitute every placeholder in `text`.
///
/// `template_name` only labels the error when a placeholder has no binding.
pub fn render(template_name: &str, text: &str, tokens: &TokenSet) -> Result<String, SyncError> {
    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let name = caps.get(1).unwrap().as_str();
        if tokens.get(name).is_none() {
            return Err(SyncError::UnresolvedToken {
                placeholder: caps.get(0).unwrap().as_str().to_string(),
                template: template_name.to_string(),
            });
        }
    }

    Ok(PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| {
            tokens.get(caps.get(1).unwrap().as_str()).unwrap().to_string()
        })
        .to_string())
}

/// Render a project descriptor (or its filter sidecar) from a template.
///
/// The file list is injected as a fresh item group immediately after the
/// first `</ItemGroup>` line; later occurrences are left alone. When
/// `filtered` is set, records carrying a filter group get a nested
/// `<Filter>` element; the plain variant always emits self-closing entries.
pub fn render_project(
    template_name: &str,
    text: &str,
    tokens: &TokenSet,
    files: &[FileRecord],
    filtered: bool,
) -> Result<String, SyncError> {
    let substituted = render(template_name, text, tokens)?;

    let mut out = String::with_capacity(substituted.len());
    let mut injected = false;
    for line in substituted.lines() {
        out.push_str(line);
        out.push('\n');
        if !injected && line.trim() == ITEM_GROUP_END {
            push_item_group(&mut out, files, filtered);
            injected = true;
        }
    }
    Ok(out)
}

fn push_item_group(out: &mut String, files: &[FileRecord], filtered: bool) {
    out.push_str("  <ItemGroup>\n");
    for record in files {
        let element = record.kind.element_name();
        if filtered && let Some(group) = record.filter {
            out.push_str(&format!(
                "    <{element} Include=\"{path}\">\n      <Filter>{group}</Filter>\n    </{element}>\n",
                path = record.path,
            ));
        } else {
            out.push_str(&format!(
                "    <{element} Include=\"{path}\" />\n",
                path = record.path,
            ));
        }
    }
    out.push_str("  </ItemGroup>\n");
}
