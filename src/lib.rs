//! slnsync - IDE manifest synchronization
//!
//! A tool that regenerates Visual Studio solution/project descriptors and a
//! remote-debugger preferences document from a declared source-file set.
//! Hand-authored content and stable project identifiers already present in
//! the descriptors are preserved, and artifacts are rewritten only when
//! their content actually changes.

pub mod classify;
pub mod config;
pub mod error;
pub mod init;
pub mod preferences;
pub mod render;
pub mod solution;
pub mod sync;
pub mod templates;
pub mod tokens;
pub mod toolchain;
pub mod writer;

pub use config::Config;
pub use error::SyncError;
pub use sync::{SyncOptions, SyncReport, SyncRequest, Synchronizer};
pub use tokens::TokenSet;
