//! Wire shape of a generated contact.

use serde::{Deserialize, Serialize};

/// One fabricated professional contact returned by the model.
///
/// Field names follow the camelCase JSON contract the instruction template
/// imposes on the model. Missing string fields deserialize as empty and are
/// dropped later by the deny-list policy — records are never repaired.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub email_address: String,
    pub company_name: String,
    /// Free text explaining why this contact matches the request criteria.
    pub context: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_record_deserializes_camel_case() {
        let json = r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "jobTitle": "Principal",
            "emailAddress": "jane.doe@acme.com",
            "companyName": "Acme Capital",
            "context": "Leads deal sourcing at a mid-tier VC"
        }"#;

        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.email_address, "jane.doe@acme.com");
        assert_eq!(record.context, "Leads deal sourcing at a mid-tier VC");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        // The model sometimes omits fields entirely — that must not abort the
        // whole batch. Validation drops the incomplete record downstream.
        let json = r#"{"firstName": "Jane", "emailAddress": "jane@acme.com"}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name, "Jane");
        assert!(record.last_name.is_empty());
        assert!(record.job_title.is_empty());
    }

    #[test]
    fn test_contact_record_serializes_camel_case() {
        let record = ContactRecord {
            first_name: "Bob".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("firstName").is_some());
        assert!(value.get("first_name").is_none());
    }
}
