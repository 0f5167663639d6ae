//! Prompt Optimizer — rewrites a free-text contact request into the
//! structured instruction sent to the completion model.
//!
//! Pure and total: a field that fails to match falls back to its documented
//! default, never an error. The intent record lives only for the duration of
//! one `optimize` call and the preview the caller sees.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub mod prompts;
pub mod rules;

use self::prompts::INSTRUCTION_TEMPLATE;
use self::rules::{
    match_all, match_first, COMPANY_SIZE_RULES, INDUSTRY_RULES, JOB_FUNCTION_RULES, LOCATION_RULES,
    RESTRICTION_RULES,
};

const DEFAULT_COUNT: u32 = 25;
const DEFAULT_JOB_FUNCTIONS: &[&str] = &["Investment professionals", "deal sourcers", "analysts"];
const DEFAULT_INDUSTRY: &str = "Investment/Financial Services";
const DEFAULT_LOCATION: &str = "Global";
const DEFAULT_COMPANY_SIZE: &str = "Various sizes";
const DEFAULT_RESTRICTIONS: &str = "Professional corporate emails only";
const FORMAT_SPREADSHEET: &str = "Structured data format suitable for spreadsheet export";
const FORMAT_GENERIC: &str = "Structured format";

// A run of digits immediately before the word "email", e.g. "50 email addresses".
static COUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*email").expect("count pattern is valid"));

/// Intent fields recovered from the raw request text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedIntent {
    pub count: u32,
    pub job_functions: Vec<&'static str>,
    pub industry: &'static str,
    pub location: Vec<&'static str>,
    pub company_size: &'static str,
    pub email_restrictions: String,
    /// Reported to the caller but never interpolated into the instruction —
    /// the template's OUTPUT FORMAT block is fixed.
    pub output_format: &'static str,
}

/// Result of one optimize call: the recovered intent and the instruction
/// built from it.
#[derive(Debug, Clone)]
pub struct OptimizedPrompt {
    pub extracted: ExtractedIntent,
    pub instruction: String,
}

/// Rewrites the raw request into the structured instruction.
pub fn optimize(user_text: &str) -> OptimizedPrompt {
    let extracted = extract_intent(user_text);
    let instruction = build_instruction(&extracted);
    OptimizedPrompt {
        extracted,
        instruction,
    }
}

fn extract_intent(text: &str) -> ExtractedIntent {
    let lower = text.to_lowercase();

    let restriction_clauses = match_all(&lower, RESTRICTION_RULES);
    let email_restrictions = if restriction_clauses.is_empty() {
        DEFAULT_RESTRICTIONS.to_string()
    } else {
        restriction_clauses.join(", ")
    };

    ExtractedIntent {
        count: extract_count(text),
        job_functions: non_empty_or(match_all(&lower, JOB_FUNCTION_RULES), DEFAULT_JOB_FUNCTIONS),
        industry: match_first(&lower, INDUSTRY_RULES).unwrap_or(DEFAULT_INDUSTRY),
        location: non_empty_or(match_all(&lower, LOCATION_RULES), &[DEFAULT_LOCATION]),
        company_size: match_first(&lower, COMPANY_SIZE_RULES).unwrap_or(DEFAULT_COMPANY_SIZE),
        email_restrictions,
        output_format: if lower.contains("spreadsheet") || lower.contains("csv") {
            FORMAT_SPREADSHEET
        } else {
            FORMAT_GENERIC
        },
    }
}

/// First digit run followed by "email"; anything unmatchable falls back to 25.
fn extract_count(text: &str) -> u32 {
    COUNT_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_COUNT)
}

fn non_empty_or(matched: Vec<&'static str>, default: &'static [&'static str]) -> Vec<&'static str> {
    if matched.is_empty() {
        default.to_vec()
    } else {
        matched
    }
}

fn build_instruction(intent: &ExtractedIntent) -> String {
    INSTRUCTION_TEMPLATE
        .replace("{count}", &intent.count.to_string())
        .replace("{job_functions}", &intent.job_functions.join(", "))
        .replace("{industry}", intent.industry)
        .replace("{location}", &intent.location.join(", "))
        .replace("{company_size}", intent.company_size)
        .replace("{email_restrictions}", &intent.email_restrictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_extracted_from_digits_before_email() {
        let intent = extract_intent("I need 50 email addresses of analysts");
        assert_eq!(intent.count, 50);
    }

    #[test]
    fn test_count_defaults_to_25() {
        let intent = extract_intent("find me some partners at VC firms");
        assert_eq!(intent.count, 25);
    }

    #[test]
    fn test_count_ignores_digits_not_followed_by_email() {
        let intent = extract_intent("top 10 firms, 30 email contacts");
        assert_eq!(intent.count, 30);
    }

    #[test]
    fn test_job_functions_cumulative_in_scan_order() {
        let intent = extract_intent("partners and deal sourcers at funds");
        assert_eq!(intent.job_functions, vec!["Deal Sourcers", "Partners"]);
    }

    #[test]
    fn test_job_functions_default_when_none_match() {
        let intent = extract_intent("some people please");
        assert_eq!(
            intent.job_functions,
            vec!["Investment professionals", "deal sourcers", "analysts"]
        );
    }

    #[test]
    fn test_industry_first_priority_wins() {
        let intent = extract_intent("venture capital and private equity contacts");
        assert_eq!(intent.industry, "Venture Capital");
    }

    #[test]
    fn test_industry_default() {
        let intent = extract_intent("some financial folks");
        assert_eq!(intent.industry, "Investment/Financial Services");
    }

    #[test]
    fn test_location_cumulative_with_global_default() {
        let intent = extract_intent("people in london and europe");
        assert_eq!(intent.location, vec!["London", "Europe"]);

        let fallback = extract_intent("people anywhere");
        assert_eq!(fallback.location, vec!["Global"]);
    }

    #[test]
    fn test_company_size_first_wins() {
        let intent = extract_intent("small boutique shops, not one of the biggest");
        assert_eq!(intent.company_size, "Mid-tier to smaller firms (not top-tier)");
    }

    #[test]
    fn test_restrictions_default() {
        let intent = extract_intent("analysts in the uk");
        assert_eq!(intent.email_restrictions, "Professional corporate emails only");
    }

    #[test]
    fn test_output_format_spreadsheet_hint() {
        let intent = extract_intent("export to csv please");
        assert_eq!(
            intent.output_format,
            "Structured data format suitable for spreadsheet export"
        );
        let generic = extract_intent("just a list");
        assert_eq!(generic.output_format, "Structured format");
    }

    #[test]
    fn test_instruction_always_names_the_six_result_fields() {
        // The OUTPUT FORMAT block is fixed regardless of input.
        for text in ["", "50 email addresses", "partners at a PE firm in London"] {
            let optimized = optimize(text);
            for field in [
                "firstName",
                "lastName",
                "jobTitle",
                "emailAddress",
                "companyName",
                "context",
            ] {
                assert!(
                    optimized.instruction.contains(field),
                    "instruction must name field {field}"
                );
            }
        }
    }

    #[test]
    fn test_instruction_has_no_unfilled_placeholders() {
        let optimized = optimize("10 email addresses of analysts in the uk");
        for placeholder in [
            "{count}",
            "{job_functions}",
            "{industry}",
            "{location}",
            "{company_size}",
            "{email_restrictions}",
        ] {
            assert!(
                !optimized.instruction.contains(placeholder),
                "placeholder {placeholder} must be substituted"
            );
        }
    }

    /// End-to-end extraction scenario over a realistic request.
    #[test]
    fn test_full_request_scenario() {
        let optimized = optimize(
            "Find 10 deal sourcers at a VC in London, corporate emails only, no info@ addresses",
        );

        // "10" is not followed by "email" here, so the count rule falls back.
        assert_eq!(optimized.extracted.count, 25);
        assert!(optimized.extracted.job_functions.contains(&"Deal Sourcers"));
        assert_eq!(optimized.extracted.industry, "Venture Capital");
        assert!(optimized.extracted.location.contains(&"London"));
        assert!(optimized
            .extracted
            .email_restrictions
            .contains("Must be corporate domain emails"));
        assert!(optimized
            .extracted
            .email_restrictions
            .contains("No generic company emails (info@, admin@, contact@)"));
    }

    #[test]
    fn test_optimize_is_total_on_empty_input() {
        // Blank input is rejected by the handler, but the core stays total.
        let optimized = optimize("");
        assert!(optimized
            .instruction
            .contains("TASK: Generate a list of 25 professional email contacts"));
        assert_eq!(optimized.extracted.location, vec!["Global"]);
    }
}
