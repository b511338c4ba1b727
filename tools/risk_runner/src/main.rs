use pacta_core::analyzer::{analyze, RiskLevel};
use pacta_core::report::render_risk_memo;
use std::process::ExitCode;

// risk_runner analyzes a contract text file and prints one line per
// finding plus the overall score. With --memo it also prints the
// markdown risk memo. Exits 1 when any HIGH finding is present, 2 on
// usage or read errors.
fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: risk_runner <contract.txt> [--memo]");
        return ExitCode::from(2);
    };
    let want_memo = match args.next().as_deref() {
        None => false,
        Some("--memo") => true,
        Some(other) => {
            eprintln!("unknown argument: {}", other);
            eprintln!("usage: risk_runner <contract.txt> [--memo]");
            return ExitCode::from(2);
        }
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {}", path, err);
            return ExitCode::from(2);
        }
    };

    let report = analyze(&text);
    for finding in &report.findings {
        println!(
            "FINDING {} {} {}",
            finding.id,
            finding.risk.tag().to_uppercase(),
            finding.title
        );
    }
    println!("RISK_SCORE {}", report.risk_score);

    if want_memo {
        println!();
        println!("{}", render_risk_memo(&report));
    }

    let any_high = report.findings.iter().any(|f| f.risk == RiskLevel::High);
    if any_high {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
