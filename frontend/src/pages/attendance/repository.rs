use crate::api::{ApiClient, ApiError, AttendanceSubmission};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, submission: AttendanceSubmission) -> Result<String, ApiError> {
        self.client.submit_attendance(&submission).await
    }
}
