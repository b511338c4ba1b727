use serde::{Deserialize, Serialize};

/// Selector for the template a document is rendered from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Services,
    Nda,
    Employment,
    Partnership,
    Rental,
    Sale,
    Terms,
    Privacy,
}

impl ContractType {
    /// Resolve a free-form tag. Unknown tags resolve to `Services` so a
    /// stale or mistyped tag still produces a usable document.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "services" => ContractType::Services,
            "nda" => ContractType::Nda,
            "employment" => ContractType::Employment,
            "partnership" => ContractType::Partnership,
            "rental" => ContractType::Rental,
            "sale" => ContractType::Sale,
            "terms" => ContractType::Terms,
            "privacy" => ContractType::Privacy,
            _ => ContractType::Services,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ContractType::Services => "services",
            ContractType::Nda => "nda",
            ContractType::Employment => "employment",
            ContractType::Partnership => "partnership",
            ContractType::Rental => "rental",
            ContractType::Sale => "sale",
            ContractType::Terms => "terms",
            ContractType::Privacy => "privacy",
        }
    }

    /// Human-facing document name, as shown in listings.
    pub fn display_name(self) -> &'static str {
        match self {
            ContractType::Services => "Contrato de Prestación de Servicios",
            ContractType::Nda => "Acuerdo de Confidencialidad (NDA)",
            ContractType::Employment => "Contrato de Trabajo",
            ContractType::Partnership => "Contrato de Socios",
            ContractType::Rental => "Contrato de Arrendamiento",
            ContractType::Sale => "Contrato de Compraventa",
            ContractType::Terms => "Términos y Condiciones",
            ContractType::Privacy => "Política de Privacidad",
        }
    }

    pub fn all() -> [ContractType; 8] {
        [
            ContractType::Services,
            ContractType::Nda,
            ContractType::Employment,
            ContractType::Partnership,
            ContractType::Rental,
            ContractType::Sale,
            ContractType::Terms,
            ContractType::Privacy,
        ]
    }
}

/// User-supplied parameters for document generation.
///
/// Every field is optional; absent or empty values render as bracketed
/// placeholder text so the output degrades to a fill-in-the-blank
/// document instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractFields {
    pub party_a: Option<String>,
    pub party_b: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub duration: Option<String>,
    pub additional_clauses: Option<String>,
    pub city: Option<String>,
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for contract_type in ContractType::all() {
            assert_eq!(ContractType::from_tag(contract_type.tag()), contract_type);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_services() {
        assert_eq!(ContractType::from_tag("loan"), ContractType::Services);
        assert_eq!(ContractType::from_tag(""), ContractType::Services);
        assert_eq!(ContractType::from_tag("SERVICES"), ContractType::Services);
    }

    #[test]
    fn test_display_names_are_distinct() {
        let mut names: Vec<&str> = ContractType::all()
            .into_iter()
            .map(ContractType::display_name)
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
        assert_eq!(
            ContractType::Nda.display_name(),
            "Acuerdo de Confidencialidad (NDA)"
        );
    }

    #[test]
    fn test_fields_deserialize_camel_case() {
        let fields: ContractFields = serde_json::from_str(
            r#"{"partyA":"Acme","additionalClauses":"Cláusula extra"}"#,
        )
        .unwrap();
        assert_eq!(fields.party_a.as_deref(), Some("Acme"));
        assert_eq!(fields.additional_clauses.as_deref(), Some("Cláusula extra"));
        assert!(fields.city.is_none());
    }
}
