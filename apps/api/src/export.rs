//! CSV export of a result set.
//!
//! Fixed six-column layout in contact field order. Only the Context column is
//! quoted: it is the only field expected to contain commas. Embedded quotes
//! in Context are doubled so the quoted field survives a round trip.

use crate::models::contact::ContactRecord;

pub const CSV_HEADER: &str = "First Name,Last Name,Job Title,Email Address,Company Name,Context";

/// Download filename offered with the export.
pub const EXPORT_FILENAME: &str = "email-results.csv";

/// Renders records as CSV text, one row per record, rows joined with `\n`.
pub fn to_csv(records: &[ContactRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for record in records {
        lines.push(format!(
            "{},{},{},{},{},\"{}\"",
            record.first_name,
            record.last_name,
            record.job_title,
            record.email_address,
            record.company_name,
            record.context.replace('"', "\"\""),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(context: &str) -> ContactRecord {
        ContactRecord {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            job_title: "Partner".to_string(),
            email_address: "jane.doe@acme.com".to_string(),
            company_name: "Acme Capital".to_string(),
            context: context.to_string(),
        }
    }

    #[test]
    fn test_header_is_first_line() {
        let csv = to_csv(&[record("fits the brief")]);
        assert_eq!(csv.lines().next(), Some(CSV_HEADER));
    }

    #[test]
    fn test_one_data_row_per_record() {
        let records = vec![record("a"), record("b"), record("c")];
        let csv = to_csv(&records);
        assert_eq!(csv.lines().count(), records.len() + 1);
    }

    #[test]
    fn test_context_with_comma_stays_one_row() {
        // The quoted Context column must not split the row.
        let csv = to_csv(&[record("sources deals, mostly in fintech")]);
        assert_eq!(csv.lines().count(), 2);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with("\"sources deals, mostly in fintech\""));
    }

    #[test]
    fn test_context_quotes_are_doubled() {
        let csv = to_csv(&[record(r#"known as the "closer""#)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(r#""known as the ""closer""""#));
    }

    #[test]
    fn test_fields_render_in_header_order() {
        let csv = to_csv(&[record("ctx")]);
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "Jane,Doe,Partner,jane.doe@acme.com,Acme Capital,\"ctx\""
        );
    }

    #[test]
    fn test_empty_set_is_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }
}
