use crate::api::{ApiError, LoginRequest};
use leptos::*;

pub const LOGIN_SUCCESS: &str = "Logged in successfully";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub roll_no: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            roll_no: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    /// Validates the current input and builds the request body.
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let roll_no = self.roll_no.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&roll_no, &password)?;
        Ok(LoginRequest {
            roll_no: roll_no.trim().to_string(),
            password,
        })
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}

pub fn validate_credentials(roll_no: &str, password: &str) -> Result<(), ApiError> {
    if roll_no.trim().is_empty() {
        return Err(ApiError::validation("Please enter your roll number"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_credentials_requires_both_fields() {
        assert_eq!(
            validate_credentials("  ", "secret").unwrap_err().error,
            "Please enter your roll number"
        );
        assert_eq!(
            validate_credentials("21EE001", "").unwrap_err().error,
            "Please enter your password"
        );
        assert!(validate_credentials("21EE001", "secret").is_ok());
    }
}
