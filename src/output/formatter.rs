use crate::config::Language;
use crate::keys::KeySet;
use crate::report::{CheckReport, LanguageReport};
use colored::{Color, Colorize};
use std::path::Path;

const RULE_WIDTH: usize = 80;

/// Formatter for rendering a `CheckReport` as human-readable text
pub struct ReportFormatter {
    use_color: bool,
}

impl ReportFormatter {
    /// Create a new ReportFormatter without colors and 80-column rules
    pub fn new() -> Self {
        Self { use_color: false }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Format the full report: per-language counts, key details, summary
    pub fn format(&self, report: &CheckReport) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Total keys in {} ({}): {}",
            report.reference.name,
            file_label(&report.reference_file),
            report.reference_keys
        ));
        lines.push(String::new());

        for language_report in &report.languages {
            self.format_language(language_report, &mut lines);
            lines.push(String::new());
        }

        self.format_details(report, &mut lines);
        self.format_summary(report, &mut lines);

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    /// Counts for one language, or its load failure
    fn format_language(&self, report: &LanguageReport, lines: &mut Vec<String>) {
        let label = format!(
            "{} ({})",
            report.language().name,
            file_label(report.file())
        );

        match report {
            LanguageReport::Compared {
                total_keys,
                comparison,
                ..
            } => {
                let status = if comparison.is_in_sync() {
                    self.paint("✅", Color::Green)
                } else {
                    self.paint("⚠️", Color::Yellow)
                };
                lines.push(format!("{} {}:", status, self.bold(&label)));
                lines.push(format!("   Total keys: {}", total_keys));
                lines.push(format!("   Missing keys: {}", comparison.missing.len()));
                lines.push(format!("   Extra keys: {}", comparison.extra.len()));
            }
            LanguageReport::Failed { reason, .. } => {
                lines.push(format!(
                    "{} {}: {}",
                    self.paint("❌", Color::Red),
                    self.bold(&label),
                    self.paint("Failed to load", Color::Red)
                ));
                for reason_line in reason.lines().filter(|l| !l.trim().is_empty()) {
                    lines.push(format!("   {}", reason_line));
                }
            }
        }
    }

    fn format_details(&self, report: &CheckReport, lines: &mut Vec<String>) {
        if report.with_missing().next().is_some() {
            self.heading("MISSING KEYS DETAILS", lines);
            for (language, comparison) in report.with_missing() {
                self.format_key_list(language, report, "Missing", &comparison.missing, lines);
            }
        }

        if report.with_extra().next().is_some() {
            let title = format!(
                "EXTRA KEYS DETAILS (keys in language but not in {})",
                report.reference.name
            );
            self.heading(&title, lines);
            for (language, comparison) in report.with_extra() {
                self.format_key_list(language, report, "Extra", &comparison.extra, lines);
            }
        }
    }

    fn format_key_list(
        &self,
        language: &Language,
        report: &CheckReport,
        kind: &str,
        keys: &KeySet,
        lines: &mut Vec<String>,
    ) {
        let file = report
            .languages
            .iter()
            .find(|r| r.language() == language)
            .map(|r| file_label(r.file()))
            .unwrap_or_else(|| language.code.clone());

        lines.push(String::new());
        lines.push(format!(
            "{} ({}) - {} {}:",
            language.name,
            file,
            kind,
            plural(keys.len(), "key")
        ));
        for key in keys {
            lines.push(format!("  - {}", key));
        }
    }

    fn format_summary(&self, report: &CheckReport, lines: &mut Vec<String>) {
        self.heading("SUMMARY", lines);

        if report.is_in_sync() {
            lines.push(format!(
                "{} All translation files are in sync with {}!",
                self.paint("✅", Color::Green),
                report.reference.name
            ));
        } else {
            let warn = self.paint("⚠️ ", Color::Yellow);
            lines.push(format!(
                "{} Total missing keys across all languages: {}",
                warn,
                report.total_missing()
            ));
            lines.push(format!(
                "{} Total extra keys across all languages: {}",
                warn,
                report.total_extra()
            ));

            if report.with_missing().next().is_some() {
                lines.push(String::new());
                lines.push("Languages with missing keys:".to_string());
                for (language, comparison) in report.with_missing() {
                    lines.push(format!(
                        "  - {}: {} missing",
                        language,
                        comparison.missing.len()
                    ));
                }
            }

            if report.with_extra().next().is_some() {
                lines.push(String::new());
                lines.push("Languages with extra keys:".to_string());
                for (language, comparison) in report.with_extra() {
                    lines.push(format!("  - {}: {} extra", language, comparison.extra.len()));
                }
            }
        }

        if report.failed().next().is_some() {
            lines.push(String::new());
            lines.push(format!(
                "{} Languages that failed to load:",
                self.paint("❌", Color::Red)
            ));
            for failed in report.failed() {
                lines.push(format!("  - {}", failed.language()));
            }
        }
    }

    /// Blank line, then a title framed by `=` rules
    fn heading(&self, title: &str, lines: &mut Vec<String>) {
        let rule = "=".repeat(RULE_WIDTH);
        lines.push(String::new());
        lines.push(rule.clone());
        lines.push(self.bold(title));
        lines.push(rule);
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// File name without its directory, e.g. `fr.json`
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Comparison;
    use std::path::PathBuf;

    fn set(keys: &[&str]) -> KeySet {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn in_sync_report() -> CheckReport {
        let mut report = CheckReport::new(
            Language::new("en", "English"),
            PathBuf::from("lib/i18n/translations/en.json"),
            3,
        );
        report.push(LanguageReport::Compared {
            language: Language::new("fr", "French"),
            file: PathBuf::from("lib/i18n/translations/fr.json"),
            total_keys: 3,
            comparison: Comparison::default(),
        });
        report
    }

    #[test]
    fn test_formatter_defaults() {
        assert!(!ReportFormatter::new().use_color);
        assert!(!ReportFormatter::default().use_color);
        assert!(ReportFormatter::new().with_color(true).use_color);
    }

    #[test]
    fn test_format_in_sync() {
        let output = ReportFormatter::new().format(&in_sync_report());

        assert!(output.starts_with("Total keys in English (en.json): 3\n"));
        assert!(output.contains("✅ French (fr.json):\n   Total keys: 3\n   Missing keys: 0\n   Extra keys: 0\n"));
        assert!(output.contains("All translation files are in sync with English!"));
        assert!(!output.contains("MISSING KEYS DETAILS"));
        assert!(!output.contains("EXTRA KEYS DETAILS"));
        assert!(!output.contains('\u{1b}'), "no ANSI codes without color");
    }

    #[test]
    fn test_format_missing_and_extra() {
        let mut report = in_sync_report();
        report.push(LanguageReport::Compared {
            language: Language::new("de", "German"),
            file: PathBuf::from("de.json"),
            total_keys: 3,
            comparison: Comparison {
                missing: set(&["a.d"]),
                extra: set(&["b", "c.e"]),
            },
        });

        let output = ReportFormatter::new().format(&report);

        assert!(output.contains("⚠️ German (de.json):"));
        assert!(output.contains("MISSING KEYS DETAILS"));
        assert!(output.contains("German (de.json) - Missing 1 key:\n  - a.d\n"));
        assert!(output.contains("EXTRA KEYS DETAILS (keys in language but not in English)"));
        assert!(output.contains("German (de.json) - Extra 2 keys:\n  - b\n  - c.e\n"));
        assert!(output.contains("Total missing keys across all languages: 1"));
        assert!(output.contains("Total extra keys across all languages: 2"));
        assert!(output.contains("  - German (de): 1 missing"));
        assert!(output.contains("  - German (de): 2 extra"));
        assert!(!output.contains("in sync with English"));
    }

    #[test]
    fn test_format_failed_language() {
        let mut report = in_sync_report();
        report.push(LanguageReport::Failed {
            language: Language::new("it", "Italian"),
            file: PathBuf::from("it.json"),
            reason: "Failed to parse JSON file it.json:\nInvalid JSON syntax\n\nTip: check".to_string(),
        });

        let output = ReportFormatter::new().format(&report);

        assert!(output.contains("❌ Italian (it.json): Failed to load\n   Failed to parse JSON file it.json:\n   Invalid JSON syntax\n   Tip: check\n"));
        assert!(output.contains("All translation files are in sync with English!"));
        assert!(output.contains("Languages that failed to load:\n  - Italian (it)"));
    }

    #[test]
    fn test_summary_comes_last() {
        let output = ReportFormatter::new().format(&in_sync_report());
        let summary = output.find("SUMMARY").unwrap();
        let french = output.find("French").unwrap();
        assert!(french < summary);
        assert!(output.lines().any(|line| line == "=".repeat(RULE_WIDTH)));
    }

    #[test]
    fn test_color_output_contains_escape_codes() {
        colored::control::set_override(true);
        let output = ReportFormatter::new()
            .with_color(true)
            .format(&in_sync_report());
        colored::control::unset_override();
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("French (fr.json)"));
    }
}
