use crate::api::{AdminLoginRequest, AdminSession, ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminLoginRepository {
    client: Rc<ApiClient>,
}

impl AdminLoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: AdminLoginRequest) -> Result<AdminSession, ApiError> {
        self.client.admin_login(&request).await
    }

    pub async fn check(&self) -> Result<AdminSession, ApiError> {
        self.client.admin_check().await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.admin_logout().await
    }
}
