use crate::error::{BadgeError, Result};
use crate::paths;
use crate::value::{is_valid_date_format, ValueSource};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

impl ConfigWarning {
    fn warning(message: String) -> Self {
        Self {
            level: WarnLevel::Warning,
            message,
        }
    }

    fn error(message: String) -> Self {
        Self {
            level: WarnLevel::Error,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// BadgeSpec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeSpec {
    pub name: String,
    pub template: PathBuf,
    pub output: PathBuf,
    pub placeholder: String,
    pub value: ValueSource,
}

impl BadgeSpec {
    pub fn date() -> Self {
        Self {
            name: "date".to_string(),
            template: PathBuf::from(paths::DATE_TEMPLATE),
            output: PathBuf::from(paths::DATE_OUTPUT),
            placeholder: paths::DATE_PLACEHOLDER.to_string(),
            value: ValueSource::Date {
                format: paths::DEFAULT_DATE_FORMAT.to_string(),
            },
        }
    }

    pub fn iteration() -> Self {
        Self {
            name: "iteration".to_string(),
            template: PathBuf::from(paths::ITERATION_TEMPLATE),
            output: PathBuf::from(paths::ITERATION_OUTPUT),
            placeholder: paths::ITERATION_PLACEHOLDER.to_string(),
            value: ValueSource::File {
                path: PathBuf::from(paths::ITERATION_FILE),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_badges")]
    pub badges: Vec<BadgeSpec>,
}

fn default_badges() -> Vec<BadgeSpec> {
    vec![BadgeSpec::date(), BadgeSpec::iteration()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            badges: default_badges(),
        }
    }
}

impl Config {
    /// Load `.github/badges.yaml`, falling back to the built-in date and
    /// iteration badges when the file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no badge config, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        crate::io::atomic_write(&path, self.to_yaml()?.as_bytes())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn badge(&self, name: &str) -> Result<&BadgeSpec> {
        self.badges
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| BadgeError::BadgeNotFound(name.to_string()))
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.badges.is_empty() {
            warnings.push(ConfigWarning::warning(
                "no badges configured; generate will do nothing".to_string(),
            ));
        }
        warnings.extend(validate_badges(&self.badges));
        warnings
    }
}

/// Check a set of badges for mistakes. Error-level entries make generation
/// unsafe: outputs that clobber templates or each other.
pub fn validate_badges<'a, I>(badges: I) -> Vec<ConfigWarning>
where
    I: IntoIterator<Item = &'a BadgeSpec>,
{
    let badges: Vec<&BadgeSpec> = badges.into_iter().collect();
    let templates: HashSet<&Path> = badges.iter().map(|b| b.template.as_path()).collect();
    let mut warnings = Vec::new();
    let mut names = HashSet::new();
    let mut outputs = HashSet::new();

    for badge in &badges {
        let name = &badge.name;

        if paths::validate_badge_name(name).is_err() {
            warnings.push(ConfigWarning::error(format!(
                "invalid badge name '{name}': must be lowercase alphanumeric with hyphens"
            )));
        }
        if !names.insert(name.as_str()) {
            warnings.push(ConfigWarning::error(format!(
                "duplicate badge name '{name}'"
            )));
        }
        if !outputs.insert(badge.output.as_path()) {
            warnings.push(ConfigWarning::error(format!(
                "badge '{name}': output {} is written by more than one badge",
                badge.output.display()
            )));
        }
        if badge.output == badge.template {
            warnings.push(ConfigWarning::error(format!(
                "badge '{name}': output would overwrite its own template"
            )));
        } else if templates.contains(badge.output.as_path()) {
            warnings.push(ConfigWarning::error(format!(
                "badge '{name}': output {} is another badge's template",
                badge.output.display()
            )));
        }
        if badge.placeholder.is_empty() {
            warnings.push(ConfigWarning::error(format!(
                "badge '{name}': placeholder is empty"
            )));
        }
        if let ValueSource::Date { format } = &badge.value {
            if !is_valid_date_format(format) {
                warnings.push(ConfigWarning::error(format!(
                    "badge '{name}': invalid date format '{format}'"
                )));
            }
        }
        if badge.output.extension().and_then(|e| e.to_str()) != Some("svg") {
            warnings.push(ConfigWarning::warning(format!(
                "badge '{name}': output {} does not end in .svg",
                badge.output.display()
            )));
        }
    }

    warnings
}

/// Fail with [`BadgeError::InvalidConfig`] if any badge has an error-level problem.
pub fn ensure_valid<'a, I>(badges: I) -> Result<()>
where
    I: IntoIterator<Item = &'a BadgeSpec>,
{
    let errors: Vec<String> = validate_badges(badges)
        .into_iter()
        .filter(|w| w.level == WarnLevel::Error)
        .map(|w| w.message)
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(BadgeError::InvalidConfig(errors))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
