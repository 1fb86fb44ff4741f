use super::fields::FormFields;

const SITE_LABEL: &str = "[Website]";

/// Pre-filled mail-client link used when no relay is configured: fixed site
/// label, action label and sender name in the subject, every serialized
/// field as a `key: value` line in the body.
pub fn fallback_link(recipient: &str, action: Option<&str>, fields: &FormFields) -> String {
    let name = fields
        .text("name")
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Visitor".into());
    let subject = format!("{SITE_LABEL} {} from {name}", action.unwrap_or("Message"));
    let body = fields
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.as_text()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
