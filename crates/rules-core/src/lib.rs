//! Rule synchronization engine
//!
//! This crate turns a central directory of Markdown rule documents into
//! per-tool renderings inside client projects and keeps them provably in
//! sync:
//!
//! - **Pattern splitting**: positive/negative glob separation with a
//!   Markdown-wide default
//! - **Rule loading**: glob resolution against the source directory into a
//!   sorted, deduplicated rule list
//! - **Output planning**: pure per-format adapters producing write intents
//! - **Execution**: guarded, fail-fast application of a write plan
//! - **Verification**: independent re-derivation and drift detection
//!
//! # Architecture
//!
//! ```text
//!             CLI shell
//!                 |
//!             SyncEngine
//!         /      |       \
//!    loader   formats   executor / verify
//!                 |
//!             rules-fs
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod format;
pub mod intent;
pub mod loader;
pub mod patterns;
pub mod rule;
pub mod sync;
pub mod verify;

pub use config::{Config, ProjectConfig, SourceSection};
pub use error::{Error, Result, WriteAction};
pub use executor::{ExecuteOptions, ExecutionReport, execute};
pub use format::OutputFormat;
pub use intent::WriteIntent;
pub use loader::{LoadedRules, load_rules};
pub use patterns::{DEFAULT_RULE_GLOB, PatternSet, compile_globs};
pub use rule::Rule;
pub use sync::{FormatVerification, ProjectPlan, SyncEngine, SyncOptions, SyncReport};
pub use verify::{
    IssueKind, VerificationIssue, VerificationResult, content_checksum, normalize_content,
};
