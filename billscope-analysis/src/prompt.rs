//! Prompt construction for the policy analysis request.

use billscope_common::util::truncate_chars;

/// Maximum number of bill characters embedded in the prompt.
pub const MAX_BILL_CHARS: usize = 12_000;

/// Section headers the model is instructed to emit, in order.
pub const SECTION_HEADERS: [&str; 6] = [
    "SECTOR:",
    "SUMMARY:",
    "IMPACT:",
    "POSITIVES:",
    "RISKS:",
    "BENEFICIARIES:",
];

/// Build the analysis prompt for a bill text.
///
/// The first 12,000 characters of the text are embedded in the fixed
/// policy-analyst template. The template wording and the header set are a
/// contract with the model; downstream consumers of the output depend on
/// them, so they must not drift.
pub fn build_prompt(text: &str) -> String {
    format!(
        "\nYou are a Public Policy Analyst.\n\nGenerate analysis using EXACT headers:\n\nSECTOR:\nSUMMARY:\nIMPACT:\nPOSITIVES:\nRISKS:\nBENEFICIARIES:\n\nBILL TEXT:\n{}\n",
        truncate_chars(text, MAX_BILL_CHARS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_all_headers_in_order() {
        let prompt = build_prompt("some bill text");
        let mut last = 0;
        for header in SECTION_HEADERS {
            let pos = prompt[last..]
                .find(header)
                .unwrap_or_else(|| panic!("missing header {header}"));
            last += pos + header.len();
        }
    }

    #[test]
    fn test_short_text_embedded_verbatim() {
        let prompt = build_prompt("The Finance Bill, 2024");
        assert!(prompt.ends_with("BILL TEXT:\nThe Finance Bill, 2024\n"));
    }

    #[test]
    fn test_truncates_to_exactly_12000_chars() {
        let text = "a".repeat(MAX_BILL_CHARS + 1000);
        let prompt = build_prompt(&text);

        let embedded = prompt
            .split("BILL TEXT:\n")
            .nth(1)
            .unwrap()
            .trim_end_matches('\n');
        assert_eq!(embedded.len(), MAX_BILL_CHARS);
        assert!(embedded.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_template_prefix_is_fixed() {
        let prompt = build_prompt("");
        assert!(prompt.starts_with("\nYou are a Public Policy Analyst.\n"));
        assert!(prompt.contains("Generate analysis using EXACT headers:"));
    }
}
