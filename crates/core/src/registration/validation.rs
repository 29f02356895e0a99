use thiserror::Error;

use super::NewDistributor;

/// Errors produced when a registration payload is incomplete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl NewDistributor {
    /// Checks that every required field is present and non-blank.
    ///
    /// Whitespace-only values count as missing; the submitted text is
    /// otherwise stored verbatim.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("distributor_name", &self.distributor_name),
            ("contact_person", &self.contact_person),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewDistributor {
        NewDistributor {
            distributor_name: "Acme".to_string(),
            contact_person: "Jo".to_string(),
            email: "jo@acme.com".to_string(),
            phone: "555".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[test]
    fn accepts_complete_payload() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_name() {
        let mut payload = complete();
        payload.distributor_name = String::new();
        assert_eq!(
            payload.validate(),
            Err(ValidationError::MissingField("distributor_name"))
        );
    }

    #[test]
    fn rejects_whitespace_only_email() {
        let mut payload = complete();
        payload.email = "   ".to_string();
        assert_eq!(
            payload.validate(),
            Err(ValidationError::MissingField("email"))
        );
    }

    #[test]
    fn reports_first_missing_field_in_declaration_order() {
        let mut payload = complete();
        payload.contact_person = String::new();
        payload.address = String::new();
        assert_eq!(
            payload.validate(),
            Err(ValidationError::MissingField("contact_person"))
        );
    }

    #[test]
    fn missing_field_error_display() {
        assert_eq!(
            ValidationError::MissingField("phone").to_string(),
            "Missing required field: phone"
        );
    }
}
