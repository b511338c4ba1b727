//! The fixed risk taxonomy evaluated against contract text.

use regex::Regex;
use std::sync::OnceLock;

use super::model::RiskLevel;

/// One entry in the rule table. Patterns use case-insensitive,
/// unanchored substring search; rules are evaluated in declaration
/// order and are not mutually exclusive.
pub struct RiskRule {
    pub pattern: Regex,
    pub title: &'static str,
    pub risk: RiskLevel,
    pub description: &'static str,
    pub suggestion: &'static str,
}

/// Pattern source, title, risk, description, suggestion.
const RULE_TABLE: &[(&str, &str, RiskLevel, &str, &str)] = &[
    (
        r"(?i)penalización|penalidad|multa.*(\d{2,}%|\d{4,})",
        "Penalización elevada detectada",
        RiskLevel::High,
        "Se detectó una cláusula de penalización que podría ser excesiva.",
        "Considera negociar una penalización más razonable (10-15%) o escalonada.",
    ),
    (
        r"(?i)cede.*todos.*derechos|cesión.*total.*irrevocable",
        "Cesión total de derechos",
        RiskLevel::High,
        "El contrato transfiere todos los derechos sin límites.",
        "Limita la cesión al proyecto específico o negocia una licencia de uso.",
    ),
    (
        r"(?i)exclusividad.*indefinid|no.*competencia.*sin.*límite",
        "Exclusividad sin límite temporal",
        RiskLevel::High,
        "La cláusula de exclusividad no tiene fecha de fin.",
        "Establece un período máximo de exclusividad (6-12 meses).",
    ),
    (
        r"(?i)pago.*(\d{2,}\s*días|60.*días|90.*días)",
        "Plazo de pago extenso",
        RiskLevel::Medium,
        "El plazo de pago es superior al estándar del mercado.",
        "Negocia pago a 30 días o establece pagos parciales.",
    ),
    (
        r"(?i)confidencialidad.*unilateral|solo.*prestador.*confidencial",
        "Confidencialidad unidireccional",
        RiskLevel::Medium,
        "Solo una parte está obligada a mantener confidencialidad.",
        "Añade una cláusula de confidencialidad bidireccional.",
    ),
    (
        r"(?i)modificar.*unilateralmente|cambios.*sin.*notificación",
        "Modificaciones unilaterales",
        RiskLevel::Medium,
        "Una parte puede modificar el contrato sin consentimiento.",
        "Requiere que cualquier modificación sea acordada por ambas partes.",
    ),
    (
        r"(?i)responsabilidad.*ilimitada|indemnizar.*sin.*límite",
        "Responsabilidad ilimitada",
        RiskLevel::High,
        "No hay límite en la responsabilidad que asumes.",
        "Establece un límite de responsabilidad (ej: valor del contrato).",
    ),
    (
        r"(?i)jurisdicción|tribunales|juzgados",
        "Jurisdicción especificada",
        RiskLevel::Info,
        "El contrato especifica la jurisdicción aplicable.",
        "Verifica que la jurisdicción te sea conveniente.",
    ),
    (
        r"(?i)propiedad.*intelectual.*cliente|derechos.*autor.*transferidos",
        "Transferencia de propiedad intelectual",
        RiskLevel::Low,
        "Se transfieren derechos de propiedad intelectual.",
        "Asegúrate de que la transferencia es justa y después del pago completo.",
    ),
];

/// The ordered rule table. Patterns are static and compiled once per
/// process; `test_all_patterns_compile` guards the table.
pub fn risk_rules() -> &'static [RiskRule] {
    static RULES: OnceLock<Vec<RiskRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RULE_TABLE
            .iter()
            .map(|(pattern, title, risk, description, suggestion)| RiskRule {
                pattern: Regex::new(pattern).expect("static risk pattern"),
                title,
                risk: *risk,
                description,
                suggestion,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(risk_rules().len(), 9);
    }

    #[test]
    fn test_penalty_rule_matches_case_insensitive() {
        let rule = &risk_rules()[0];
        assert!(rule
            .pattern
            .is_match("El prestador pagará una PENALIZACIÓN del 50% si se retrasa"));
        assert_eq!(rule.risk, RiskLevel::High);
    }

    #[test]
    fn test_payment_rule_requires_day_count() {
        let rule = &risk_rules()[3];
        assert!(rule.pattern.is_match("El pago se realizará a 90 días"));
        assert!(!rule.pattern.is_match("El pago se realizará puntualmente"));
    }

    #[test]
    fn test_jurisdiction_rule_is_substring_search() {
        let rule = &risk_rules()[7];
        assert!(rule
            .pattern
            .is_match("las partes se someten a los Juzgados y Tribunales de Madrid"));
        assert_eq!(rule.risk, RiskLevel::Info);
    }
}
