use crate::error::{CheckoutError, Result};
use crate::text;
use serde::Serialize;

/// Details the donor fills into the checkout form.
///
/// Starts empty when the flow opens and is mutated field-by-field as the
/// donor types. Nothing is validated until submission; `validate` is the
/// single checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub is_anonymous: bool,
}

impl DonorInfo {
    /// Submission-time check: name must be present and the email must look
    /// like an address. Phone and message stay optional.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CheckoutError::Validation(text::NAME_REQUIRED_PROMPT));
        }
        if !has_email_shape(&self.email) {
            return Err(CheckoutError::Validation(text::EMAIL_INVALID_PROMPT));
        }
        Ok(())
    }
}

fn has_email_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_donor() -> DonorInfo {
        DonorInfo {
            name: "రవి కుమార్".to_string(),
            email: "ravi@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_donor_passes() {
        assert!(valid_donor().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut donor = valid_donor();
        donor.name = "   ".to_string();
        assert!(matches!(
            donor.validate(),
            Err(CheckoutError::Validation(msg)) if msg == text::NAME_REQUIRED_PROMPT
        ));
    }

    #[test]
    fn test_bad_email_shapes_rejected() {
        for email in ["", "ravi", "@example.com", "ravi@", "ravi@example", "ra vi@example.com"] {
            let mut donor = valid_donor();
            donor.email = email.to_string();
            assert!(donor.validate().is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn test_phone_and_message_are_optional() {
        let donor = valid_donor();
        assert!(donor.phone.is_empty());
        assert!(donor.message.is_empty());
        assert!(donor.validate().is_ok());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(valid_donor()).unwrap();
        assert!(value.get("isAnonymous").is_some());
        assert!(value.get("is_anonymous").is_none());
    }
}
