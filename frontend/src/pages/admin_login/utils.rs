use crate::api::{AdminLoginRequest, ApiError};

pub fn validate_admin_credentials(email: &str, password: &str) -> Result<AdminLoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Please enter the admin email"));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("Please enter a valid email address"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter the admin password"));
    }
    Ok(AdminLoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}
