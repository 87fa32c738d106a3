//! Render badge templates and write the generated SVGs.
//!
//! The badge set is validated and every badge is rendered before anything is
//! written, so a bad config or a missing template or value file leaves all
//! files untouched.

use crate::config::{ensure_valid, BadgeSpec, Config};
use crate::error::Result;
use crate::paths;
use crate::template::substitute;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A badge rendered in memory, not yet written.
#[derive(Debug, Clone)]
pub struct RenderedBadge {
    pub name: String,
    pub output: PathBuf,
    pub placeholder: String,
    pub value: String,
    pub body: String,
    pub replacements: usize,
}

/// Report row for one generated badge.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedBadge {
    pub name: String,
    pub output: PathBuf,
    pub placeholder: String,
    pub value: String,
    pub replacements: usize,
    pub written: bool,
}

pub fn render(root: &Path, badge: &BadgeSpec, now: &DateTime<FixedOffset>) -> Result<RenderedBadge> {
    let template = crate::io::read_input(&paths::resolve(root, &badge.template))?;
    let value = badge.value.resolve(root, now)?;
    let rendered = substitute(&template, &badge.placeholder, &value);

    if rendered.replacements == 0 {
        tracing::warn!(
            badge = %badge.name,
            placeholder = %badge.placeholder,
            template = %badge.template.display(),
            "placeholder not found in template; output will match the template"
        );
    }
    tracing::debug!(badge = %badge.name, replacements = rendered.replacements, "rendered badge");

    Ok(RenderedBadge {
        name: badge.name.clone(),
        output: badge.output.clone(),
        placeholder: badge.placeholder.clone(),
        value,
        body: rendered.body,
        replacements: rendered.replacements,
    })
}

/// Render every badge in `badges`, then write all outputs unless `dry_run`.
///
/// Refuses badge sets with error-level validation problems, such as an output
/// that would overwrite a template.
pub fn generate_badges(
    root: &Path,
    badges: &[&BadgeSpec],
    now: &DateTime<FixedOffset>,
    dry_run: bool,
) -> Result<Vec<GeneratedBadge>> {
    ensure_valid(badges.iter().copied())?;

    let rendered = badges
        .iter()
        .map(|b| render(root, b, now))
        .collect::<Result<Vec<_>>>()?;

    let mut report = Vec::with_capacity(rendered.len());
    for r in rendered {
        if !dry_run {
            let out = paths::resolve(root, &r.output);
            crate::io::atomic_write(&out, r.body.as_bytes())?;
            tracing::info!(badge = %r.name, output = %out.display(), "wrote badge");
        }
        report.push(GeneratedBadge {
            name: r.name,
            output: r.output,
            placeholder: r.placeholder,
            value: r.value,
            replacements: r.replacements,
            written: !dry_run,
        });
    }
    Ok(report)
}

/// Generate every badge in `config`.
pub fn generate(
    root: &Path,
    config: &Config,
    now: &DateTime<FixedOffset>,
    dry_run: bool,
) -> Result<Vec<GeneratedBadge>> {
    let badges: Vec<&BadgeSpec> = config.badges.iter().collect();
    generate_badges(root, &badges, now, dry_run)
}
