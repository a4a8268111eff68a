//! The `gradeledger show` / `metrics` commands.

use std::path::Path;

use anyhow::Result;

use crate::state;

pub fn record(state_path: &Path, id: u32) -> Result<()> {
    let store = state::load(state_path)?;
    let student = store.queries().get(id)?;

    println!("Student {}: {}", student.id, student.name);
    println!("  registered by: {}", student.registered_by);
    println!("  registered at: {}", student.created_at);
    println!("  attendance:    {}%", student.attendance_pct);
    println!("  study hours:   {}h/week", student.study_hours);
    println!("  predicted:     {}", student.predicted_score);
    if student.grades.is_empty() {
        println!("  grades:        (none)");
    } else {
        let grades: Vec<String> = student.grades.iter().map(|g| g.to_string()).collect();
        println!("  grades:        {}", grades.join(", "));
    }
    Ok(())
}

pub fn metrics(state_path: &Path, id: u32) -> Result<()> {
    let store = state::load(state_path)?;
    let metrics = store.queries().metrics(id)?;

    println!("Metrics for student {id}:");
    println!("  average grade:    {}", metrics.average_grade);
    println!("  improvement rate: {}%", metrics.improvement_rate);
    match metrics.category {
        Some(cat) => println!(
            "  category:         {} (confidence {}%)",
            cat.label(),
            metrics.confidence_score
        ),
        None => println!("  category:         (not yet predicted)"),
    }
    println!("  last updated:     {}", metrics.last_updated);
    Ok(())
}
