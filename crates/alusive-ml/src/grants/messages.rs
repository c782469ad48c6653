/// Returned when the model predicts a label with no advisory message.
pub const INVALID_CATEGORY_MESSAGE: &str = "Error: Invalid category predicted.";

/// Advisory message for a predicted grant category.
pub fn grant_message(category: i64) -> Option<&'static str> {
    match category {
        0 => Some("You qualify for up to $400 of funding pending the verification of supporting documents by ALU Financial Aid."),
        1 => Some("You qualify for up to $700 of funding pending the verification of supporting documents by ALU Financial Aid."),
        2 => Some("You qualify for up to $1000 of funding pending the verification of supporting documents by ALU Financial Aid."),
        _ => None,
    }
}

pub fn grant_message_or_invalid(category: i64) -> &'static str {
    grant_message(category).unwrap_or(INVALID_CATEGORY_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_funding_tiers() {
        assert!(grant_message_or_invalid(0).contains("$400"));
        assert!(grant_message_or_invalid(1).contains("$700"));
        assert!(grant_message_or_invalid(2).contains("$1000"));
    }

    #[test]
    fn unknown_categories_map_to_invalid_message() {
        assert_eq!(grant_message(3), None);
        assert_eq!(grant_message_or_invalid(-1), INVALID_CATEGORY_MESSAGE);
    }
}
