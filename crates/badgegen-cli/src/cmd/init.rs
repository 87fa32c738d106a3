use crate::output::print_json;
use anyhow::Context;
use badgegen_core::{config::Config, io, paths};
use serde::Serialize;
use std::path::Path;

const ITERATION_SEED: &str = "1";

const DATE_TEMPLATE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="156" height="20" role="img" aria-label="updated: //DATE//">
  <title>updated: //DATE//</title>
  <rect width="58" height="20" fill="#555"/>
  <rect x="58" width="98" height="20" fill="#007ec6"/>
  <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" font-size="11">
    <text x="29" y="14">updated</text>
    <text x="107" y="14">//DATE//</text>
  </g>
</svg>
"##;

const ITERATION_TEMPLATE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="96" height="20" role="img" aria-label="iteration: //ITER//">
  <title>iteration: //ITER//</title>
  <rect width="62" height="20" fill="#555"/>
  <rect x="62" width="34" height="20" fill="#4c1"/>
  <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" font-size="11">
    <text x="31" y="14">iteration</text>
    <text x="79" y="14">//ITER//</text>
  </g>
</svg>
"##;

#[derive(Serialize)]
struct InitEntry {
    path: &'static str,
    status: &'static str,
}

pub fn run(root: &Path, force: bool, json: bool) -> anyhow::Result<()> {
    let badges_dir = paths::badges_dir(root);
    io::ensure_dir(&badges_dir)
        .with_context(|| format!("failed to create {}", badges_dir.display()))?;

    let config_yaml = Config::default()
        .to_yaml()
        .context("failed to serialize default config")?;

    let files: [(&'static str, &str); 4] = [
        (paths::ITERATION_FILE, ITERATION_SEED),
        (paths::DATE_TEMPLATE, DATE_TEMPLATE_SVG),
        (paths::ITERATION_TEMPLATE, ITERATION_TEMPLATE_SVG),
        (paths::CONFIG_FILE, &config_yaml),
    ];

    let mut entries = Vec::with_capacity(files.len());
    for (rel, content) in files {
        let path = root.join(rel);
        let status = if force {
            let existed = path.exists();
            io::atomic_write(&path, content.as_bytes())
                .with_context(|| format!("failed to write {rel}"))?;
            if existed {
                "replaced"
            } else {
                "created"
            }
        } else if io::write_if_missing(&path, content.as_bytes())
            .with_context(|| format!("failed to write {rel}"))?
        {
            "created"
        } else {
            "exists"
        };
        entries.push(InitEntry { path: rel, status });
    }

    if json {
        print_json(&entries)?;
        return Ok(());
    }

    println!("Initializing badges in: {}", root.display());
    for e in &entries {
        println!("  {:<9}{}", format!("{}:", e.status), e.path);
    }
    println!("\nRun `badgegen` to generate the badges.");

    Ok(())
}
