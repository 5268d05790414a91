//! Null-safe coercion of optional attribute values to display strings.

use artifact_model::AttributeValue;

/// Display string of an optional attribute value, `""` when absent.
pub fn display_string_of(value: Option<&AttributeValue>) -> String {
    value.map(AttributeValue::display_string).unwrap_or_default()
}

/// Map a direction attribute to the preposition used in message summaries.
///
/// `"Incoming"` maps to `"from"` and `"Outgoing"` to `"to"`. Any other
/// present value maps to a single space while an absent one maps to the
/// empty string; downstream string layouts depend on that distinction, so
/// the two cases must not be collapsed.
pub fn direction_label(value: Option<&AttributeValue>) -> String {
    match value {
        None => String::new(),
        Some(direction) => match direction.display_string().as_str() {
            "Incoming" => "from".to_string(),
            "Outgoing" => "to".to_string(),
            _ => " ".to_string(),
        },
    }
}
