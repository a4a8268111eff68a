//! Ledger state file loading and saving.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use gradeledger_core::audit::TracingSink;
use gradeledger_core::store::RecordStore;

/// Load the ledger from `path`, reattaching the tracing audit sink so
/// mutations show up as structured log records.
pub fn load(path: &Path) -> Result<RecordStore> {
    if !path.exists() {
        bail!(
            "ledger state file {} does not exist (run `gradeledger init` first)",
            path.display()
        );
    }
    let mut store = RecordStore::load_json(path)
        .with_context(|| format!("failed to load ledger state from {}", path.display()))?;
    store.set_sink(Arc::new(TracingSink));
    tracing::debug!(path = %path.display(), registrations = store.queries().count(), "loaded ledger");
    Ok(store)
}

/// Save the ledger back to `path`.
pub fn save(store: &RecordStore, path: &Path) -> Result<()> {
    store
        .save_json(path)
        .with_context(|| format!("failed to save ledger state to {}", path.display()))
}
