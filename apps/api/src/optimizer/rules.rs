//! Declarative keyword tables driving intent extraction.
//!
//! Each rule maps a set of trigger phrases to one output label. Matching is
//! case-insensitive substring containment over the raw request text, so short
//! tokens like "vc" or "uk" also match inside longer words — the recognition
//! rules are forgiving by contract. Adding a recognized phrase means adding a
//! table row, not a branch.

/// One phrase→label rule. Any of `patterns` appearing in the text selects `label`.
/// Patterns are stored lowercase; callers pass pre-lowercased text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub patterns: &'static [&'static str],
    pub label: &'static str,
}

impl KeywordRule {
    fn matches(&self, lower_text: &str) -> bool {
        self.patterns.iter().any(|p| lower_text.contains(p))
    }
}

/// Role phrases, scanned in order; every hit is kept (cumulative).
pub const JOB_FUNCTION_RULES: &[KeywordRule] = &[
    KeywordRule {
        patterns: &["deal sourcer", "deal sourcing"],
        label: "Deal Sourcers",
    },
    KeywordRule {
        patterns: &["deal originator"],
        label: "Deal Originators",
    },
    KeywordRule {
        patterns: &["investment"],
        label: "Investment Professionals",
    },
    KeywordRule {
        patterns: &["analyst"],
        label: "Investment Analysts",
    },
    KeywordRule {
        patterns: &["associate"],
        label: "Investment Associates",
    },
    KeywordRule {
        patterns: &["principal"],
        label: "Principals",
    },
    KeywordRule {
        patterns: &["partner"],
        label: "Partners",
    },
];

/// Industry phrases; table order is priority order, first hit wins.
pub const INDUSTRY_RULES: &[KeywordRule] = &[
    KeywordRule {
        patterns: &["venture capital", "vc"],
        label: "Venture Capital",
    },
    KeywordRule {
        patterns: &["private equity", "pe"],
        label: "Private Equity",
    },
    KeywordRule {
        patterns: &["investment bank"],
        label: "Investment Banking",
    },
];

/// Place phrases, cumulative like job functions.
pub const LOCATION_RULES: &[KeywordRule] = &[
    KeywordRule {
        patterns: &["uk", "united kingdom"],
        label: "United Kingdom",
    },
    KeywordRule {
        patterns: &["london"],
        label: "London",
    },
    KeywordRule {
        patterns: &["us", "united states"],
        label: "United States",
    },
    KeywordRule {
        patterns: &["europe"],
        label: "Europe",
    },
];

/// Firm-size phrases, first hit wins.
pub const COMPANY_SIZE_RULES: &[KeywordRule] = &[
    KeywordRule {
        patterns: &["mid to low tier", "not one of the biggest"],
        label: "Mid-tier to smaller firms (not top-tier)",
    },
    KeywordRule {
        patterns: &["small", "boutique"],
        label: "Small/boutique firms",
    },
    KeywordRule {
        patterns: &["large", "big"],
        label: "Large firms",
    },
];

/// Email-restriction phrases; each hit contributes one clause to the
/// restrictions line. Both "not …" and "no …" phrasings are accepted.
pub const RESTRICTION_RULES: &[KeywordRule] = &[
    KeywordRule {
        patterns: &["not @gmail", "no @gmail"],
        label: "No personal email domains (@gmail.com, @yahoo.com, @hotmail.com)",
    },
    KeywordRule {
        patterns: &["corporate email"],
        label: "Must be corporate domain emails",
    },
    KeywordRule {
        patterns: &["not info@", "no info@", "not admin@", "no admin@"],
        label: "No generic company emails (info@, admin@, contact@)",
    },
];

/// Every matching label, in table order.
pub fn match_all(lower_text: &str, rules: &[KeywordRule]) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| rule.matches(lower_text))
        .map(|rule| rule.label)
        .collect()
}

/// First matching label, or `None` when nothing in the table hits.
pub fn match_first(lower_text: &str, rules: &[KeywordRule]) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| rule.matches(lower_text))
        .map(|rule| rule.label)
}
