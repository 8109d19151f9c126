use crate::api::{ApiClient, ApiError, Student};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRosterRepository {
    client: Rc<ApiClient>,
}

impl AdminRosterRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_students(&self) -> Result<Vec<Student>, ApiError> {
        self.client.list_students().await
    }

    pub async fn update_attendance(&self, id: String, has_attended: bool) -> Result<(), ApiError> {
        self.client.update_attendance(&id, has_attended).await
    }
}
