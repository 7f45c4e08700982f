use crate::models::BatchReport;
use crate::utils::{OutputFormat, PassportError};

pub const DIVIDER_WIDTH: usize = 132;

/// Console layout: each shown record under a `-` divider, then an `=`
/// divider and the total.
pub fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();
    for record in &report.records {
        out.push_str(&"-".repeat(DIVIDER_WIDTH));
        out.push('\n');
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out.push_str(&"=".repeat(DIVIDER_WIDTH));
    out.push('\n');
    out.push_str(&format!("Valid records: {}\n", report.count));
    out
}

pub fn render_json(report: &BatchReport) -> Result<String, PassportError> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String, PassportError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn report() -> BatchReport {
        let record: Record = [("born", "1990"), ("eyes", "blue")].into_iter().collect();
        BatchReport {
            count: 3,
            records: vec![record],
        }
    }

    #[test]
    fn text_layout() {
        let text = render_text(&report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "-".repeat(132));
        assert_eq!(lines[1], "{born=1990, eyes=blue}");
        assert_eq!(lines[2], "=".repeat(132));
        assert_eq!(lines[3], "Valid records: 3");
    }

    #[test]
    fn empty_report_still_prints_total() {
        let text = render_text(&BatchReport::default());
        assert_eq!(text, format!("{}\nValid records: 0\n", "=".repeat(132)));
    }

    #[test]
    fn json_layout() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["records"][0]["fields"]["eyes"], "blue");
        assert!(value["records"][0].get("malformed_tokens").is_none());
    }
}
