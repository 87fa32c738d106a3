use crate::error::{BadgeError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Path constants
// ---------------------------------------------------------------------------

pub const GITHUB_DIR: &str = ".github";
pub const BADGES_DIR: &str = ".github/badges";

pub const CONFIG_FILE: &str = ".github/badges.yaml";
pub const ITERATION_FILE: &str = ".github/iteration.txt";

pub const DATE_TEMPLATE: &str = ".github/badges/date.svg";
pub const DATE_OUTPUT: &str = ".github/badges/date_gen.svg";
pub const ITERATION_TEMPLATE: &str = ".github/badges/iteration.svg";
pub const ITERATION_OUTPUT: &str = ".github/badges/iteration_gen.svg";

pub const DATE_PLACEHOLDER: &str = "//DATE//";
pub const ITERATION_PLACEHOLDER: &str = "//ITER//";

/// `MM/DD/YYYY`
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn badges_dir(root: &Path) -> PathBuf {
    root.join(BADGES_DIR)
}

/// Resolve a configured path against the project root. Absolute paths are
/// returned unchanged.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

// ---------------------------------------------------------------------------
// Badge name validation
// ---------------------------------------------------------------------------

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$")
            .unwrap_or_else(|e| panic!("badge name pattern failed to compile: {e}"))
    })
}

pub fn validate_badge_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > 64 || !name_re().is_match(name) {
        return Err(BadgeError::InvalidBadgeName(name.to_string()));
    }
    Ok(())
}
