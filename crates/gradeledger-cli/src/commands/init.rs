//! The `gradeledger init` command.

use std::path::Path;

use anyhow::{bail, Result};

use gradeledger_core::model::ActorId;
use gradeledger_core::store::RecordStore;

use crate::state;

pub fn execute(state_path: &Path, owner: String) -> Result<()> {
    if state_path.exists() {
        bail!("{} already exists, refusing to overwrite", state_path.display());
    }
    let owner = ActorId::new(owner);
    if owner.is_null() {
        bail!("owner identity must not be empty");
    }

    let store = RecordStore::new(owner.clone());
    state::save(&store, state_path)?;

    println!("Created {} (owner: {owner})", state_path.display());
    Ok(())
}
