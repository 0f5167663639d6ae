//! Contact generation — sends the optimized instruction to the completion
//! backend and turns the free-text reply into validated contact records.
//!
//! Flow: complete → extract JSON array → parse → policy filter.
//!
//! Every failure is terminal for the invocation: no retry, no partial repair.
//! An empty list after filtering is a legitimate success, not an error.

use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::GENERATION_SYSTEM;
use crate::generation::validation::EmailPolicy;
use crate::llm_client::CompletionBackend;
use crate::models::contact::ContactRecord;

/// Runs one generation call and returns the surviving records in model order.
pub async fn generate_contacts(
    backend: &dyn CompletionBackend,
    api_key: &str,
    instruction: &str,
    policy: &EmailPolicy,
) -> Result<Vec<ContactRecord>, AppError> {
    let reply = backend
        .complete(api_key, GENERATION_SYSTEM, instruction)
        .await?;

    let array = extract_json_array(&reply)
        .ok_or_else(|| AppError::Malformed("no JSON array found in model reply".to_string()))?;

    let parsed: Vec<ContactRecord> = serde_json::from_str(array)
        .map_err(|e| AppError::Malformed(format!("contact array did not parse: {e}")))?;

    let total = parsed.len();
    let contacts: Vec<ContactRecord> = parsed
        .into_iter()
        .filter(|record| policy.allows(record))
        .collect();

    info!(
        "generation returned {} contacts ({} dropped by policy)",
        contacts.len(),
        total - contacts.len()
    );

    Ok(contacts)
}

/// First `[` through the last `]` of the reply — the widest span that can
/// hold the array. The model is told to return the array alone, but replies
/// wrapped in prose still parse.
fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
