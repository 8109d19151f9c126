use crate::api::{ApiClient, ApiError, LoginRequest, Student};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn check_auth(&self) -> Result<Student, ApiError> {
        self.client.check_auth().await
    }

    pub async fn login(&self, request: LoginRequest) -> Result<Student, ApiError> {
        self.client.login(&request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }
}
