//! Deny-list policy over generated contact records.
//!
//! The model is an untrusted source: a record that violates the policy is
//! dropped wholesale, never corrected. The built-in lists can be extended at
//! startup via configuration, not per request.

use crate::models::contact::ContactRecord;

/// Consumer mail domains that disqualify a contact.
const DENIED_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];

/// Generic mailbox local parts that disqualify a contact.
const DENIED_LOCAL_PARTS: &[&str] = &["info", "admin", "contact"];

/// The deny-list policy applied to every generated record.
#[derive(Debug, Clone)]
pub struct EmailPolicy {
    denied_domains: Vec<String>,
    denied_local_parts: Vec<String>,
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self {
            denied_domains: DENIED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            denied_local_parts: DENIED_LOCAL_PARTS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl EmailPolicy {
    /// Policy with extra denied domains / local parts on top of the built-ins.
    pub fn with_extensions(extra_domains: &[String], extra_local_parts: &[String]) -> Self {
        let mut policy = Self::default();
        policy
            .denied_domains
            .extend(extra_domains.iter().map(|d| d.to_lowercase()));
        policy
            .denied_local_parts
            .extend(extra_local_parts.iter().map(|l| l.to_lowercase()));
        policy
    }

    /// True when the record satisfies every validity condition: non-empty
    /// names, a well-formed address, and no deny-list hit.
    pub fn allows(&self, record: &ContactRecord) -> bool {
        if record.first_name.is_empty() || record.last_name.is_empty() {
            return false;
        }
        self.allows_address(&record.email_address)
    }

    /// Address check: a non-empty local part and domain around the first `@`,
    /// neither on a deny list. Comparison is case-insensitive.
    fn allows_address(&self, address: &str) -> bool {
        let Some((local, domain)) = address.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.is_empty() {
            return false;
        }

        let local = local.to_lowercase();
        let domain = domain.to_lowercase();

        !self.denied_domains.contains(&domain) && !self.denied_local_parts.contains(&local)
    }
}
