use serde::Serialize;
use uvflow_core::translate::Translation;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a translated plan: one command per line, notes after.
pub fn print_plan(plan: &Translation) {
    for command in &plan.commands {
        println!("{command}");
    }
    for note in &plan.notes {
        eprintln!("note: {note}");
    }
}

/// JSON shape shared by `translate --json` and `exec --dry-run --json`.
pub fn plan_json(plan: &Translation) -> serde_json::Value {
    serde_json::json!({
        "intent": plan.intent,
        "commands": plan.rendered(),
        "steps": plan.commands,
        "notes": plan.notes,
    })
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!("{}", render(headers.iter().map(|h| h.to_string()).collect()));
    println!(
        "{}",
        render(widths.iter().map(|&w| "-".repeat(w)).collect())
    );
    for row in rows {
        println!("{}", render(row));
    }
}
