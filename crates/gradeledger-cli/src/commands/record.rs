//! Record mutation commands: register, add-grades, attendance,
//! study-hours, deactivate.

use std::path::Path;

use anyhow::Result;

use gradeledger_core::model::ActorId;

use crate::state;

pub fn register(
    state_path: &Path,
    actor: String,
    id: u32,
    name: String,
    attendance: u8,
    study_hours: u8,
) -> Result<()> {
    let mut store = state::load(state_path)?;
    store.register(&ActorId::new(actor), id, &name, attendance, study_hours)?;
    state::save(&store, state_path)?;
    println!("Registered student {id} ({name})");
    Ok(())
}

pub fn add_grades(state_path: &Path, actor: String, id: u32, grades: Vec<u8>) -> Result<()> {
    let mut store = state::load(state_path)?;
    store.add_grades(&ActorId::new(actor), id, &grades)?;
    state::save(&store, state_path)?;
    println!("Added {} grade(s) to student {id}", grades.len());
    Ok(())
}

pub fn attendance(state_path: &Path, actor: String, id: u32, pct: u8) -> Result<()> {
    let mut store = state::load(state_path)?;
    store.update_attendance(&ActorId::new(actor), id, pct)?;
    state::save(&store, state_path)?;
    println!("Set attendance of student {id} to {pct}%");
    Ok(())
}

pub fn study_hours(state_path: &Path, actor: String, id: u32, hours: u8) -> Result<()> {
    let mut store = state::load(state_path)?;
    store.update_study_hours(&ActorId::new(actor), id, hours)?;
    state::save(&store, state_path)?;
    println!("Set study hours of student {id} to {hours}h/week");
    Ok(())
}

pub fn deactivate(state_path: &Path, actor: String, id: u32) -> Result<()> {
    let mut store = state::load(state_path)?;
    store.deactivate(&ActorId::new(actor), id)?;
    state::save(&store, state_path)?;
    println!("Deactivated student {id}");
    Ok(())
}
