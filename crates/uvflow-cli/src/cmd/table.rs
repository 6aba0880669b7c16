use crate::output::{print_json, print_table};
use std::path::Path;
use uvflow_core::translate::mapping_table;

pub fn run(root: &Path, tool: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = super::load_config(root, tool)?;
    let rows = mapping_table(&config);

    if json {
        return print_json(&rows);
    }

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|r| {
            vec![
                r.intent.to_string(),
                r.conventional.to_string(),
                r.preferred,
            ]
        })
        .collect();
    print_table(&["INTENT", "INSTEAD OF", "USE"], rows);
    Ok(())
}
