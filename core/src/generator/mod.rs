pub mod date;
pub mod fields;
pub mod templates;

pub use fields::{ContractFields, ContractType};

/// Render a contract document for the given type tag.
///
/// Unknown tags fall back to the services template; generation never
/// fails for a bad tag or missing fields.
pub fn generate(type_tag: &str, fields: &ContractFields) -> String {
    generate_for(ContractType::from_tag(type_tag), fields)
}

/// Render a contract document for an already-resolved contract type.
pub fn generate_for(contract_type: ContractType, fields: &ContractFields) -> String {
    let template = templates::template_for(contract_type);
    template(fields)
}
