//! The `gradeledger authorize` / `deauthorize` commands.

use std::path::Path;

use anyhow::Result;

use gradeledger_core::model::ActorId;

use crate::state;

pub fn authorize(state_path: &Path, actor: String, target: String) -> Result<()> {
    let mut store = state::load(state_path)?;
    let target = ActorId::new(target);
    store.authorize(&ActorId::new(actor), &target)?;
    state::save(&store, state_path)?;
    println!("Authorized '{target}'");
    Ok(())
}

pub fn deauthorize(state_path: &Path, actor: String, target: String) -> Result<()> {
    let mut store = state::load(state_path)?;
    let target = ActorId::new(target);
    store.deauthorize(&ActorId::new(actor), &target)?;
    state::save(&store, state_path)?;
    println!("Deauthorized '{target}'");
    Ok(())
}
