//! Output Rendering
//!
//! Summary of a generation run, as text or JSON.

use serde_json::json;

use crate::application::DeployResult;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render the summary of a deploy result
pub fn render_summary(result: &DeployResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = format!("✓ Generated scripts for {} host(s)\n", result.host_count);
            for path in &result.written {
                out.push_str(&format!("  → {}\n", path.display()));
            }
            out
        }
        OutputFormat::Json => {
            let value = json!({
                "event": "generate",
                "hosts": result.host_count,
                "config": result.config_path.display().to_string(),
                "run": result.run_path.display().to_string(),
                "clean": result.clean_path.display().to_string(),
            });
            format!("{}\n", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::script::GeneratedScript;
    use std::path::PathBuf;

    fn result() -> DeployResult {
        DeployResult {
            written: vec![
                PathBuf::from("tmp/config.json"),
                PathBuf::from("tmp/clean"),
                PathBuf::from("tmp/run"),
            ],
            config_path: PathBuf::from("tmp/config.json"),
            run_path: PathBuf::from("tmp/run"),
            clean_path: PathBuf::from("tmp/clean"),
            run_script: GeneratedScript::new(""),
            clean_script: GeneratedScript::new(""),
            host_count: 2,
        }
    }

    #[test]
    fn text_summary_lists_written_files() {
        let out = render_summary(&result(), OutputFormat::Text);
        assert!(out.starts_with("✓ Generated scripts for 2 host(s)\n"));
        assert!(out.contains("  → tmp/run\n"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn json_summary_is_one_line() {
        let out = render_summary(&result(), OutputFormat::Json);
        assert_eq!(out.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["hosts"], 2);
        assert_eq!(value["run"], "tmp/run");
    }
}
