use super::domain::{ApplicantName, DocumentKind, DocumentStatus};

pub const EMAIL_SUBJECT: &str = "Status of your Uploaded Document";

/// In-app notification and email body for a validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMessages {
    pub notification: String,
    pub email: String,
}

pub fn compose_messages(
    name: &ApplicantName,
    kind: DocumentKind,
    status: DocumentStatus,
) -> DocumentMessages {
    let first = &name.first_name;
    let last = &name.last_name;
    let kind = kind.as_str();

    match status {
        DocumentStatus::Signed => DocumentMessages {
            notification: format!(
                "Dear {first},\n\nThank you for signing your '{kind}'.\n\nYou will receive an email shortly once it has been verified."
            ),
            email: format!(
                "Dear {first} {last},\n\nAlusive Africa is delighted to acknowledge receipt of a signed copy of your '{kind}'.\n\nThank you."
            ),
        },
        DocumentStatus::Unsigned => DocumentMessages {
            notification: format!(
                "Dear {first},\n\nThe document you uploaded is unsigned.\n\nPlease sign the document and upload it again."
            ),
            email: format!(
                "Dear {first} {last},\n\nWe noticed that the '{kind}' you uploaded is unsigned.\n\nKindly sign it and re-submit.\n\nThank you."
            ),
        },
    }
}
