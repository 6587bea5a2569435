//! Report assembly and JSON output.
//!
//! A run produces either the detailed report (timestamp, scanned sources,
//! settings, palettes) or the flattened `{name: [hex]}` mapping.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, SwatchError};
use crate::extract::Settings;
use crate::types::PaletteItem;

/// Detailed report payload.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedReport {
    /// UTC generation time, e.g. `2026-10-18T09:30:00.123456Z`.
    pub generated: String,
    /// Every scanned asset, whether or not it yielded a palette.
    pub sources: Vec<String>,
    pub settings: Settings,
    pub palette: Vec<PaletteItem>,
}

/// The payload of one run.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Detailed(DetailedReport),
    /// Asset name to colours. A repeated name keeps its first position but
    /// takes the colours of the last asset with that name.
    Flat(Map<String, Value>),
}

/// Format a timestamp as ISO-8601 UTC with microseconds and a `Z` suffix.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Assemble the report for a finished run.
pub fn build(
    items: &[PaletteItem],
    scanned: &[PathBuf],
    settings: Settings,
    flatten: bool,
    now: DateTime<Utc>,
) -> Report {
    if flatten {
        let mut map = Map::new();
        for item in items {
            let colours = item.colors().iter().map(|c| Value::String(c.to_string()));
            map.insert(item.name().to_string(), Value::Array(colours.collect()));
        }
        return Report::Flat(map);
    }

    Report::Detailed(DetailedReport {
        generated: format_timestamp(now),
        sources: scanned.iter().map(|p| p.display().to_string()).collect(),
        settings,
        palette: items.to_vec(),
    })
}

impl Report {
    /// Serialize as indented JSON; non-ASCII text is left unescaped.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SwatchError::Report {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })
    }

    /// Write the JSON report to `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SwatchError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
        fs::write(path, json).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write report: {}", e),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use chrono::TimeZone;

    fn item(path: &str, colours: &[Colour]) -> PaletteItem {
        PaletteItem::new(Path::new(path), colours.to_vec())
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(fixed_now()), "2026-10-18T09:30:00.000000Z");
    }

    #[test]
    fn test_detailed_report_fields() {
        let items = vec![item("/a/logo.png", &[Colour::WHITE])];
        let scanned = vec![PathBuf::from("/a/logo.png"), PathBuf::from("/a/empty.svg")];
        let settings = Settings { top: 6, sample: 80 };

        let report = build(&items, &scanned, settings, false, fixed_now());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["generated"], "2026-10-18T09:30:00.000000Z");
        assert_eq!(value["sources"][1], "/a/empty.svg");
        assert_eq!(value["settings"]["top"], 6);
        assert_eq!(value["settings"]["sample"], 80);
        assert_eq!(value["palette"][0]["name"], "logo");
        assert_eq!(value["palette"][0]["colors"][0], "#ffffff");
    }

    #[test]
    fn test_flatten_last_duplicate_wins() {
        let items = vec![
            item("/a/logo.png", &[Colour::WHITE]),
            item("/a/icon.png", &[Colour::rgb(1, 2, 3)]),
            item("/b/logo.svg", &[Colour::BLACK]),
        ];

        let report = build(&items, &[], Settings::default(), true, fixed_now());
        let Report::Flat(map) = &report else {
            panic!("expected flat report");
        };

        assert_eq!(map.len(), 2);
        assert_eq!(map["logo"], serde_json::json!(["#000000"]));
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["logo", "icon"]);
    }

    #[test]
    fn test_detailed_keeps_duplicate_names() {
        let items = vec![
            item("/a/logo.png", &[Colour::WHITE]),
            item("/b/logo.svg", &[Colour::BLACK]),
        ];

        let report = build(&items, &[], Settings::default(), false, fixed_now());
        let Report::Detailed(detailed) = report else {
            panic!("expected detailed report");
        };
        assert_eq!(detailed.palette.len(), 2);
    }

    #[test]
    fn test_json_keeps_non_ascii() {
        let items = vec![item("градиент.png", &[Colour::WHITE])];
        let report = build(&items, &[], Settings::default(), true, fixed_now());

        let json = report.to_json().unwrap();
        assert!(json.contains("\"градиент\""));
        assert!(json.contains("\n  \"градиент\": ["));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/palette.json");
        let report = build(&[], &[], Settings::default(), true, fixed_now());

        report.write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blocker"), b"").unwrap();
        let report = build(&[], &[], Settings::default(), true, fixed_now());

        let result = report.write(&dir.path().join("blocker/palette.json"));
        assert!(matches!(result, Err(SwatchError::Io { .. })));
    }
}
