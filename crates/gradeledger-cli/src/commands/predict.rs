//! The `gradeledger predict` command.

use std::path::Path;

use anyhow::Result;

use gradeledger_core::model::ActorId;

use crate::state;

pub fn execute(state_path: &Path, actor: String, id: u32) -> Result<()> {
    let mut store = state::load(state_path)?;
    let prediction = store.predict(&ActorId::new(actor), id)?;
    state::save(&store, state_path)?;

    println!(
        "Student {id}: predicted score {} — {} (confidence {}%)",
        prediction.score,
        prediction.category.label(),
        prediction.confidence
    );
    Ok(())
}
