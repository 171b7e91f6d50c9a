//! Collision report and its renderings.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::scan::ClassOccurrenceMap;

/// First line of the text report.
pub const TEXT_HEADER: &str = "Classes in multiple files:";

/// A class name found in more than one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    /// Class name without the leading `.`.
    pub class: String,
    /// Files containing the class, in scan order.
    pub files: Vec<String>,
}

/// All collisions of a scan, sorted by class name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionReport {
    /// One entry per colliding class.
    pub collisions: Vec<Collision>,
}

impl CollisionReport {
    /// Collects the classes of `map` that appear in two or more files.
    #[must_use]
    pub fn from_occurrences(map: &ClassOccurrenceMap) -> Self {
        let collisions = map
            .collisions()
            .map(|(class, files)| Collision { class: class.to_string(), files: files.to_vec() })
            .collect();
        Self { collisions }
    }

    /// Returns `true` if no class is shared between files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Renders the plain-text report, one `.<class>: <files>` line per collision.
    ///
    /// The result always ends with a newline.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::from(TEXT_HEADER);
        out.push('\n');
        for collision in &self.collisions {
            let _ = writeln!(out, ".{}: {}", collision.class, collision.files.join(", "));
        }
        out
    }

    /// Renders the report as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    pub fn render_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("failed to serialize report: {e}"))
    }

    /// Renders the report as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    pub fn render_json(&self) -> Result<String, String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        json.push('\n');
        Ok(json)
    }

    /// Renders the report in `format`.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Yaml => self.render_yaml(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> ClassOccurrenceMap {
        let mut map = ClassOccurrenceMap::new();
        map.record_file("common.css", ["btn", "header", "card"]);
        map.record_file("molotov.css", ["btn", "footer", "card"]);
        map.record_file("wafer.css", ["card"]);
        map
    }

    #[test]
    fn text_lists_collisions_in_class_order() {
        let report = CollisionReport::from_occurrences(&sample_map());
        assert_eq!(
            report.render_text(),
            "Classes in multiple files:\n\
             .btn: common.css, molotov.css\n\
             .card: common.css, molotov.css, wafer.css\n"
        );
    }

    #[test]
    fn text_without_collisions_is_header_only() {
        let mut map = ClassOccurrenceMap::new();
        map.record_file("common.css", ["btn"]);
        map.record_file("molotov.css", ["footer"]);
        let report = CollisionReport::from_occurrences(&map);
        assert!(report.is_empty());
        assert_eq!(report.render_text(), "Classes in multiple files:\n");
    }

    #[test]
    fn yaml_and_json_carry_the_same_collisions() {
        let report = CollisionReport::from_occurrences(&sample_map());

        let from_yaml: CollisionReport =
            serde_yaml::from_str(&report.render(OutputFormat::Yaml).unwrap()).unwrap();
        let from_json: CollisionReport =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(from_yaml, report);
        assert_eq!(from_json, report);
        assert_eq!(report.collisions[1].class, "card");
        assert_eq!(report.collisions[1].files, ["common.css", "molotov.css", "wafer.css"]);
    }
}
