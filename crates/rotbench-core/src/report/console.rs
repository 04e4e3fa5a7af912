//! Human-readable run summary, printed to stderr.

use super::RunReport;

pub fn print_report(report: &RunReport) {
    eprintln!("\nTest Results:");
    for (strength, tally) in &report.tallies {
        eprintln!(
            "Shift {}: Passed {}, Failed {}",
            strength, tally.pass, tally.fail
        );
    }
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("Total tests: {}", report.total_tests());
    eprintln!("Total passed: {}", report.total_pass);
    eprintln!("Total failed: {}", report.total_fail);
    match report.success_rate {
        Some(rate) => eprintln!("Success rate: {:.2}%", rate * 100.0),
        None => eprintln!("Success rate: undefined (no tests ran)"),
    }
    eprintln!("Seed: {}", report.seed);
}
