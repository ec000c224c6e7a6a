//! Command implementations for rules-cli

pub mod check;
pub mod list;
pub mod sync;

pub use check::run_check;
pub use list::run_list;
pub use sync::run_sync;

use crate::error::Result;
use rules_core::{Config, SyncEngine};
use rules_fs::NormalizedPath;

/// Load the manifest and construct the engine it describes.
pub(crate) fn load_engine(config_path: &str) -> Result<(Config, SyncEngine)> {
    let config = Config::load(&NormalizedPath::new(config_path))?;
    let engine = SyncEngine::new(&config)?;
    Ok((config, engine))
}
