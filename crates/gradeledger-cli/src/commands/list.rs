//! The `gradeledger list` / `count` commands.

use std::path::Path;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::state;

pub fn execute(state_path: &Path, offset: usize, limit: usize) -> Result<()> {
    let store = state::load(state_path)?;
    let queries = store.queries();
    let ids = queries.list_ids(offset, limit)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "id", "name", "grades", "attendance", "predicted", "status",
    ]);

    for id in &ids {
        match queries.get(*id) {
            Ok(student) => {
                table.add_row(vec![
                    Cell::new(student.id),
                    Cell::new(&student.name),
                    Cell::new(student.grades.len()),
                    Cell::new(format!("{}%", student.attendance_pct)),
                    Cell::new(student.predicted_score),
                    Cell::new("active"),
                ]);
            }
            // The enumeration sequence may hold deactivated ids.
            Err(_) => {
                table.add_row(vec![
                    Cell::new(id),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("inactive"),
                ]);
            }
        }
    }

    println!("{table}");
    println!(
        "Showing {} of {} registration(s) (offset {offset})",
        ids.len(),
        queries.count()
    );
    Ok(())
}

pub fn count(state_path: &Path) -> Result<()> {
    let store = state::load(state_path)?;
    println!("{}", store.queries().count());
    Ok(())
}
