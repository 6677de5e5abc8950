//! Terminal rendering for previews and analysis reports.

use billscope_analysis::AnalysisReport;
use billscope_common::util::truncate_chars;

/// Number of extracted-text characters shown in a preview.
pub const PREVIEW_CHARS: usize = 3000;

/// Print a preview of the extracted bill text.
pub fn print_preview(text: &str) {
    let shown = truncate_chars(text, PREVIEW_CHARS);

    println!("--- Bill Text Preview ---");
    println!("{shown}");
    if shown.len() < text.len() {
        println!("[... {} more characters]", text.chars().count() - PREVIEW_CHARS);
    }
    println!("-------------------------");
}

/// Print the analysis, sectioned when the model honored the headers.
pub fn print_report(analysis: &str) {
    let report = AnalysisReport::parse(analysis);

    println!();
    println!("Policy Analysis Report");
    println!("{}", "=".repeat(60));

    if report.is_sectioned() {
        for section in &report.sections {
            println!();
            println!("{}:", section.heading);
            println!("{}", section.body);
        }
    } else {
        println!("{}", report.raw);
    }
    println!();
}
