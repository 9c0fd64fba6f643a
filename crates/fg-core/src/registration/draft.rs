use crate::security::Secret;

/// The in-progress, not-yet-committed registration input set.
///
/// Owned exclusively by the registration session and replaced wholesale on
/// reset. `image_data` is an opaque base64 blob as delivered by the image
/// acquisition collaborator, possibly still carrying a data-URL prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Secret,
    pub confirm_password: Secret,
    pub image_data: String,
}

impl RegistrationDraft {
    /// The base64 payload to transmit, with any `data:<mime>;base64,` prefix
    /// stripped. The remainder is treated as opaque bytes.
    pub fn image_payload(&self) -> &str {
        match self.image_data.split_once(',') {
            Some((head, payload)) if head.starts_with("data:") => payload,
            _ => &self.image_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RegistrationDraft;

    #[test]
    fn image_payload_strips_data_url_prefix() {
        let draft = RegistrationDraft {
            image_data: "data:image/jpeg;base64,/9j/4AAQSkZJRg==".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.image_payload(), "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn image_payload_passes_bare_base64_through() {
        let draft = RegistrationDraft {
            image_data: "/9j/4AAQSkZJRg==".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.image_payload(), "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn image_payload_keeps_commas_without_data_prefix() {
        // base64 never contains a comma, but the strip must not eat opaque
        // payloads that happen to carry one
        let draft = RegistrationDraft {
            image_data: "blob,with,commas".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.image_payload(), "blob,with,commas");
    }
}
