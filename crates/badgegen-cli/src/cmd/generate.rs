use crate::output::{print_json, print_table};
use anyhow::Context;
use badgegen_core::{
    config::{BadgeSpec, Config},
    generate::generate_badges,
};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime};
use std::path::Path;

pub fn run(
    root: &Path,
    date: Option<NaiveDate>,
    dry_run: bool,
    only: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load badge config")?;

    let badges: Vec<&BadgeSpec> = if only.is_empty() {
        config.badges.iter().collect()
    } else {
        only.iter()
            .map(|name| config.badge(name))
            .collect::<badgegen_core::Result<Vec<_>>>()?
    };

    let now = timestamp(date);
    let report = generate_badges(root, &badges, &now, dry_run)
        .with_context(|| format!("failed to generate badges in {}", root.display()))?;

    if json {
        print_json(&report)?;
        return Ok(());
    }

    let verb = if dry_run { "would write" } else { "wrote" };
    let rows = report
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.output.display().to_string(),
                r.value.trim_end().to_string(),
                r.replacements.to_string(),
            ]
        })
        .collect();
    print_table(&["BADGE", "OUTPUT", "VALUE", "REPLACED"], rows);
    println!("\n{verb} {} badge(s)", report.len());

    Ok(())
}

/// `--date` pins the timestamp to midnight UTC on that day; otherwise local now.
fn timestamp(date: Option<NaiveDate>) -> DateTime<FixedOffset> {
    match date {
        Some(d) => d.and_time(NaiveTime::default()).and_utc().fixed_offset(),
        None => Local::now().fixed_offset(),
    }
}
