pub mod findings_csv;
pub mod memo;

pub use findings_csv::render_findings_csv;
pub use memo::render_risk_memo;
