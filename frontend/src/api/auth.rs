use super::{
    client::ApiClient,
    types::{
        AdminLoginRequest, AdminPayload, AdminSession, ApiError, LoginRequest, SignupRequest,
        Student, UserPayload,
    },
};

impl ApiClient {
    pub async fn check_auth(&self) -> Result<Student, ApiError> {
        let url = self.auth_url("/check").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json::<UserPayload>(response, "Session check failed")
            .await
            .map(UserPayload::into_student)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Student, ApiError> {
        let url = self.auth_url("/login").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        Self::parse_json::<UserPayload>(response, "Login failed")
            .await
            .map(UserPayload::into_student)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Student, ApiError> {
        let url = self.auth_url("/signup").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        Self::parse_json::<UserPayload>(response, "Signup failed")
            .await
            .map(UserPayload::into_student)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.auth_url("/logout").await;
        let response = self.send(self.http_client().post(url)).await?;
        Self::read_message(response, "Logout failed").await.map(|_| ())
    }

    pub async fn admin_login(&self, request: &AdminLoginRequest) -> Result<AdminSession, ApiError> {
        let url = self.auth_url("/admin/login").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        Self::parse_json::<AdminPayload>(response, "Invalid admin credentials")
            .await
            .map(AdminPayload::into_session)
    }

    pub async fn admin_check(&self) -> Result<AdminSession, ApiError> {
        let url = self.auth_url("/admin/check").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json::<AdminPayload>(response, "Admin session check failed")
            .await
            .map(AdminPayload::into_session)
    }

    pub async fn admin_logout(&self) -> Result<(), ApiError> {
        let url = self.auth_url("/admin/logout").await;
        let response = self.send(self.http_client().post(url)).await?;
        Self::read_message(response, "Logout failed").await.map(|_| ())
    }
}
