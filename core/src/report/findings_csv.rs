use crate::analyzer::AnalysisReport;
use crate::error::CoreResult;

/// Render findings as CSV, one row per finding in report order.
pub fn render_findings_csv(report: &AnalysisReport) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    wtr.write_record(["id", "risk", "title", "clause", "suggestion"])?;
    for finding in &report.findings {
        wtr.write_record([
            finding.id.to_string(),
            finding.risk.tag().to_string(),
            finding.title.clone(),
            finding.clause.clone(),
            finding.suggestion.clone(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
}
