use crate::analyzer::{AnalysisReport, RiskLevel};

fn risk_label(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "HIGH",
        RiskLevel::Medium => "MEDIUM",
        RiskLevel::Low => "LOW",
        RiskLevel::Info => "INFO",
    }
}

/// Render an analysis report as a markdown risk memo, one section per
/// finding in report order.
pub fn render_risk_memo(report: &AnalysisReport) -> String {
    let mut lines = vec![
        "# Informe de Riesgos".to_string(),
        String::new(),
        format!("Puntuación de riesgo: {}/100", report.risk_score),
        String::new(),
    ];

    for finding in &report.findings {
        lines.push(format!(
            "## {}. {} [{}]",
            finding.id,
            finding.title,
            risk_label(finding.risk)
        ));
        lines.push(String::new());
        lines.push(finding.description.clone());
        lines.push(String::new());
        lines.push(format!("> {}", finding.clause));
        lines.push(String::new());
        lines.push(format!("Sugerencia: {}", finding.suggestion));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn test_memo_includes_every_finding() {
        let report = analyze(
            "Hay una penalización del 30%. Las partes se someten a los tribunales de Madrid.",
        );
        let memo = render_risk_memo(&report);
        assert!(memo.starts_with("# Informe de Riesgos"));
        assert!(memo.contains(&format!("Puntuación de riesgo: {}/100", report.risk_score)));
        for finding in &report.findings {
            assert!(memo.contains(&finding.title));
            assert!(memo.contains(&finding.suggestion));
        }
    }

    #[test]
    fn test_memo_labels_severity() {
        let report = analyze("Se aplicará una penalización del 50%.");
        let memo = render_risk_memo(&report);
        assert!(memo.contains("[HIGH]"));
    }
}
