//! Source-file classification for descriptor generation.
//!
//! Each declared file gets a descriptor item kind (which element wraps it in
//! the project descriptor) and an optional filter group (which logical folder
//! the IDE displays it under). Filter groups are decided by an ordered rule
//! table; the first matching rule wins.

/// Extensions treated as compiled translation units.
const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cxx"];

/// Extensions treated as headers.
const HEADER_EXTENSIONS: &[&str] = &["h"];

/// Prefix marking machine-generated sources.
const GENERATED_PREFIX: &str = "moc_";

/// The top-level build manifest, rendered without a display folder.
pub const BUILD_MANIFEST: &str = "CMakeLists.txt";

pub const GENERATED_FILES: &str = "Generated Files";
pub const SOURCE_FILES: &str = "Source Files";
pub const HEADER_FILES: &str = "Header Files";
pub const RESOURCE_FILES: &str = "Resource Files";

/// Descriptor element that wraps a file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Compile,
    Header,
    None,
}

impl ItemKind {
    /// Element name used in the project and filter descriptors.
    pub fn element_name(self) -> &'static str {
        match self {
            ItemKind::Compile => "ClCompile",
            ItemKind::Header => "ClInclude",
            ItemKind::None => "None",
        }
    }
}

/// A classified file, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path with separators normalized to `/`.
    pub path: String,
    pub kind: ItemKind,
    pub filter: Option<&'static str>,
}

type FilterRule = (fn(name: &str, ext: &str) -> bool, Option<&'static str>);

/// Ordered filter rules, evaluated top to bottom.
static FILTER_RULES: &[FilterRule] = &[
    (is_generated, Some(GENERATED_FILES)),
    (is_source, Some(SOURCE_FILES)),
    (is_header, Some(HEADER_FILES)),
    (is_build_manifest, None),
    (catch_all, Some(RESOURCE_FILES)),
];

fn is_generated(name: &str, _ext: &str) -> bool {
    name.starts_with(GENERATED_PREFIX)
}

fn is_source(_name: &str, ext: &str) -> bool {
    SOURCE_EXTENSIONS.contains(&ext)
}

fn is_header(_name: &str, ext: &str) -> bool {
    HEADER_EXTENSIONS.contains(&ext)
}

fn is_build_manifest(name: &str, _ext: &str) -> bool {
    name == BUILD_MANIFEST
}

fn catch_all(_name: &str, _ext: &str) -> bool {
    true
}

/// Classify one path into a [`FileRecord`].
pub fn classify(path: &str) -> FileRecord {
    let normalized = path.replace('\\', "/");
    let file_name = normalized.rsplit('/').next().unwrap_or(&normalized);
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let kind = if SOURCE_EXTENSIONS.contains(&ext.as_str()) {
        ItemKind::Compile
    } else {
        ItemKind::None
    };

    let filter = FILTER_RULES
        .iter()
        .find(|(applies, _)| applies(file_name, &ext))
        .and_then(|(_, group)| *group);

    FileRecord {
        path: normalized,
        kind,
        filter,
    }
}

/// Classify a declared file list, preserving input order.
pub fn classify_all<I, S>(paths: I) -> Vec<FileRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths.into_iter().map(|p| classify(p.as_ref())).collect()
}
