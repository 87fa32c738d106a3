use crate::output::{print_json, print_table};
use anyhow::Context;
use badgegen_core::config::Config;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load badge config")?;

    if json {
        print_json(&config.badges)?;
        return Ok(());
    }

    if config.badges.is_empty() {
        println!("No badges configured.");
        return Ok(());
    }

    let rows = config
        .badges
        .iter()
        .map(|b| {
            vec![
                b.name.clone(),
                b.template.display().to_string(),
                b.output.display().to_string(),
                b.placeholder.clone(),
                format!("{}: {}", b.value.kind(), b.value.describe()),
            ]
        })
        .collect();
    print_table(&["NAME", "TEMPLATE", "OUTPUT", "PLACEHOLDER", "VALUE"], rows);

    Ok(())
}
