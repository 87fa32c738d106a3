use crate::error::{BadgeError, Result};
use crate::paths;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Where a badge's substituted value comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueSource {
    /// Contents of a text file, taken verbatim.
    File { path: PathBuf },
    /// The generation timestamp rendered with a strftime format.
    Date {
        #[serde(default = "default_date_format")]
        format: String,
    },
}

fn default_date_format() -> String {
    paths::DEFAULT_DATE_FORMAT.to_string()
}

impl ValueSource {
    pub fn resolve(&self, root: &Path, now: &DateTime<FixedOffset>) -> Result<String> {
        match self {
            ValueSource::File { path } => crate::io::read_input(&paths::resolve(root, path)),
            ValueSource::Date { format } => format_date(now, format),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ValueSource::File { .. } => "file",
            ValueSource::Date { .. } => "date",
        }
    }

    /// Short human description: the file path or the date format.
    pub fn describe(&self) -> String {
        match self {
            ValueSource::File { path } => path.display().to_string(),
            ValueSource::Date { format } => format.clone(),
        }
    }
}

pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

pub fn format_date(now: &DateTime<FixedOffset>, format: &str) -> Result<String> {
    if !is_valid_date_format(format) {
        return Err(BadgeError::InvalidDateFormat(format.to_string()));
    }
    let mut out = String::new();
    write!(out, "{}", now.format(format))
        .map_err(|_| BadgeError::InvalidDateFormat(format.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    #[test]
    fn default_format_is_month_day_year() {
        assert_eq!(
            format_date(&at(2026, 3, 7), paths::DEFAULT_DATE_FORMAT).unwrap(),
            "03/07/2026"
        );
    }

    #[test]
    fn custom_format() {
        assert_eq!(format_date(&at(2026, 10, 19), "%Y-%m-%d").unwrap(), "2026-10-19");
    }

    #[test]
    fn invalid_format_is_rejected() {
        assert!(!is_valid_date_format("%Q"));
        assert!(matches!(
            format_date(&at(2026, 1, 1), "%Q"),
            Err(BadgeError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn file_source_reads_verbatim() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".github")).unwrap();
        std::fs::write(dir.path().join(paths::ITERATION_FILE), "42\n").unwrap();
        let src = ValueSource::File {
            path: PathBuf::from(paths::ITERATION_FILE),
        };
        assert_eq!(src.resolve(dir.path(), &at(2026, 1, 1)).unwrap(), "42\n");
    }

    #[test]
    fn missing_file_source_errors() {
        let dir = TempDir::new().unwrap();
        let src = ValueSource::File {
            path: PathBuf::from(paths::ITERATION_FILE),
        };
        assert!(matches!(
            src.resolve(dir.path(), &at(2026, 1, 1)),
            Err(BadgeError::MissingInput { .. })
        ));
    }

    #[test]
    fn date_source_defaults_format_when_omitted() {
        let src: ValueSource = serde_yaml::from_str("type: date").unwrap();
        assert_eq!(
            src,
            ValueSource::Date {
                format: "%m/%d/%Y".to_string()
            }
        );
    }
}
