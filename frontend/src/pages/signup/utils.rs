use crate::api::{ApiError, SignupRequest};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const SIGNUP_SUCCESS: &str = "Account created successfully";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFormState {
    pub name: String,
    pub roll_no: String,
    pub class_name: String,
    pub password: String,
}

impl SignupFormState {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("Full name is required");
        }
        if self.roll_no.trim().is_empty() {
            errors.push("Roll number is required");
        }
        if self.class_name.trim().is_empty() {
            errors.push("Class is required");
        }
        if self.password.is_empty() {
            errors.push("Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push("Password must be at least 6 characters");
        }

        match errors.as_slice() {
            [] => Ok(()),
            [only] => Err(ApiError::validation(*only)),
            _ => {
                let mut error = ApiError::validation("Please fix the highlighted fields");
                error.details = Some(serde_json::json!({ "errors": errors }));
                Err(error)
            }
        }
    }

    pub fn to_request(&self) -> Result<SignupRequest, ApiError> {
        self.validate()?;
        Ok(SignupRequest {
            name: self.name.trim().to_string(),
            roll_no: self.roll_no.trim().to_string(),
            class_name: self.class_name.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupFormState {
        SignupFormState {
            name: " Asha Kumar ".into(),
            roll_no: "21EE001".into(),
            class_name: "III EEE".into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn complete_form_builds_trimmed_request() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.name, "Asha Kumar");
        assert_eq!(request.class_name, "III EEE");
    }

    #[test]
    fn short_password_is_rejected() {
        let form = SignupFormState {
            password: "12345".into(),
            ..filled()
        };
        let error = form.validate().unwrap_err();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.error, "Password must be at least 6 characters");
    }

    #[test]
    fn multiple_problems_are_listed_in_details() {
        let error = SignupFormState::default().validate().unwrap_err();
        let errors = error.details.unwrap()["errors"].as_array().unwrap().len();
        assert_eq!(errors, 4);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, SignupFormState::default());
    }
}
