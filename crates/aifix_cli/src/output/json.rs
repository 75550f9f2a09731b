//! JSON output formatter

use crate::report::Report;

/// Renders the report as pretty-printed JSON (2-space indentation).
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Issue;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_only_file_and_issues() {
        let report = Report {
            file: "/work/draft.md".to_string(),
            issues: vec![Issue {
                line: 2,
                column: 3,
                rule: "no-ai-list-formatting".to_string(),
                message: "絵文字".to_string(),
                before: "🚀".to_string(),
                after: None,
            }],
        };

        let expected = r#"{
  "file": "/work/draft.md",
  "issues": [
    {
      "line": 2,
      "column": 3,
      "rule": "no-ai-list-formatting",
      "message": "絵文字",
      "before": "🚀",
      "after": null
    }
  ]
}"#;
        assert_eq!(render_json(&report).unwrap(), expected);
    }

    #[test]
    fn renders_empty_issue_list() {
        let report = Report {
            file: "/work/clean.md".to_string(),
            issues: Vec::new(),
        };
        assert_eq!(
            render_json(&report).unwrap(),
            "{\n  \"file\": \"/work/clean.md\",\n  \"issues\": []\n}"
        );
    }
}
