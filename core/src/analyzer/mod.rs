pub mod model;
pub mod rules;
mod sentences;

pub use model::{AnalysisReport, Finding, RiskLevel};

use rules::risk_rules;
use sentences::clause_excerpt;

const HIGH_PENALTY: i32 = 20;
const MEDIUM_PENALTY: i32 = 10;
const LOW_PENALTY: i32 = 5;

/// Analyze contract text against the fixed rule table.
///
/// One finding is emitted per matching rule, in rule-table order, with
/// contiguous 1-based ids. When nothing matches, a single informational
/// finding is synthesized and the score stays at 100. Any input is
/// accepted; there is no failure mode.
pub fn analyze(text: &str) -> AnalysisReport {
    let mut findings = Vec::new();

    for rule in risk_rules() {
        if let Some(found) = rule.pattern.find(text) {
            findings.push(Finding {
                id: findings.len() as u32 + 1,
                title: rule.title.to_string(),
                description: rule.description.to_string(),
                clause: clause_excerpt(&rule.pattern, text, found.as_str()),
                risk: rule.risk,
                suggestion: rule.suggestion.to_string(),
            });
        }
    }

    if findings.is_empty() {
        findings.push(no_risk_finding());
    }

    let risk_score = score(&findings);
    AnalysisReport {
        findings,
        risk_score,
    }
}

fn no_risk_finding() -> Finding {
    Finding {
        id: 1,
        title: "Contrato revisado".to_string(),
        description: "No se detectaron cláusulas de alto riesgo en el análisis automático."
            .to_string(),
        clause: "El documento ha sido analizado completamente.".to_string(),
        risk: RiskLevel::Info,
        suggestion: "Aunque el análisis automático no detectó problemas, siempre es recomendable una revisión legal profesional para contratos importantes.".to_string(),
    }
}

/// 100 minus weighted penalties per severity, clamped to 0..=100.
/// `info` findings carry no penalty.
fn score(findings: &[Finding]) -> u8 {
    let count = |level: RiskLevel| findings.iter().filter(|f| f.risk == level).count() as i32;
    let raw = 100
        - count(RiskLevel::High) * HIGH_PENALTY
        - count(RiskLevel::Medium) * MEDIUM_PENALTY
        - count(RiskLevel::Low) * LOW_PENALTY;
    raw.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_high_risk_scores_80() {
        let report = analyze("El prestador pagará una penalización del 50% si se retrasa");
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].risk, RiskLevel::High);
        assert_eq!(report.findings[0].title, "Penalización elevada detectada");
        assert_eq!(report.risk_score, 80);
    }

    #[test]
    fn test_no_match_synthesizes_info_finding() {
        let report = analyze("Este es un documento de prueba sin cláusulas relevantes");
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].id, 1);
        assert_eq!(report.findings[0].risk, RiskLevel::Info);
        assert_eq!(report.findings[0].title, "Contrato revisado");
        assert_eq!(report.risk_score, 100);
    }

    #[test]
    fn test_empty_input_is_accepted() {
        let report = analyze("");
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.risk_score, 100);
    }

    #[test]
    fn test_two_high_one_medium_scores_50() {
        let text = "Se aplicará una penalización del 40% por retraso. \
                    El proveedor asume responsabilidad ilimitada. \
                    El pago se realizará a 90 días.";
        let report = analyze(text);
        let highs = report
            .findings
            .iter()
            .filter(|f| f.risk == RiskLevel::High)
            .count();
        let mediums = report
            .findings
            .iter()
            .filter(|f| f.risk == RiskLevel::Medium)
            .count();
        assert_eq!(highs, 2);
        assert_eq!(mediums, 1);
        assert_eq!(report.risk_score, 50);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let text = "Se impone una penalización del 50% por cada retraso. \
                    El proveedor cede todos los derechos de la obra. \
                    La exclusividad será indefinida. \
                    El pago se hará a 90 días. \
                    La confidencialidad será unilateral. \
                    La empresa podrá modificar unilateralmente el contrato. \
                    El proveedor asume responsabilidad ilimitada. \
                    La propiedad intelectual pasa al cliente.";
        let report = analyze(text);
        assert_eq!(report.findings.len(), 8);
        assert_eq!(report.risk_score, 0);
    }

    #[test]
    fn test_finding_ids_are_contiguous() {
        // Matches rules 1 and 8 of the table; ids must still be 1 and 2.
        let text = "Hay una penalización del 30%. La jurisdicción será Madrid.";
        let report = analyze(text);
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[0].id, 1);
        assert_eq!(report.findings[1].id, 2);
    }

    #[test]
    fn test_findings_follow_rule_table_order() {
        let text = "La jurisdicción será Madrid y hay una penalización del 30%.";
        let report = analyze(text);
        assert_eq!(report.findings[0].title, "Penalización elevada detectada");
        assert_eq!(report.findings[1].title, "Jurisdicción especificada");
    }

    #[test]
    fn test_clause_is_trimmed_matching_sentence() {
        let text = "Primera cláusula. La penalización será del 25% mensual. Última.";
        let report = analyze(text);
        assert_eq!(
            report.findings[0].clause,
            "La penalización será del 25% mensual"
        );
    }

    #[test]
    fn test_info_findings_do_not_reduce_score() {
        let report = analyze("Las partes se someten a los tribunales de Valencia");
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].risk, RiskLevel::Info);
        assert_eq!(report.risk_score, 100);
    }
}
