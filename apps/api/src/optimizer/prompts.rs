// Instruction template for the contact-generation call.
// The template text is part of the contract with the downstream model —
// changing it changes what the model returns.

/// Instruction template. Replace `{count}`, `{job_functions}`, `{industry}`,
/// `{location}`, `{company_size}` and `{email_restrictions}` before sending.
/// The braces in the OUTPUT FORMAT block are literal JSON, not placeholders.
pub const INSTRUCTION_TEMPLATE: &str = r#"TASK: Generate a list of {count} professional email contacts based on the following criteria.

TARGET PROFESSIONALS:
- Job Functions: {job_functions}
- Industry: {industry}
- Location: {location}
- Company Size: {company_size}

EMAIL REQUIREMENTS:
- Only corporate email addresses (no personal emails like @gmail.com, @yahoo.com)
- No generic emails (info@, admin@, contact@, support@)
- Must be individual professional email addresses
- {email_restrictions}

OUTPUT FORMAT:
Return ONLY a JSON array with objects containing these exact fields:
{
  "firstName": "string",
  "lastName": "string",
  "jobTitle": "string",
  "emailAddress": "string",
  "companyName": "string",
  "context": "string explaining why this person matches the criteria"
}

IMPORTANT:
- Generate realistic, professional email addresses following corporate naming conventions
- Ensure job titles accurately reflect the requested functions
- Provide meaningful context for each selection
- Focus on quality over quantity
- Make emails appear authentic and professional

Generate the JSON array now:"#;
