use super::{
    client::{encode_path_segment, ApiClient},
    types::{ApiError, Student, StudentListPayload, UpdateAttendanceRequest},
};

impl ApiClient {
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let url = self.auth_url("/users").await;
        let response = self.send(self.http_client().get(url)).await?;
        let students = Self::parse_json::<StudentListPayload>(response, "Failed to load students")
            .await?
            .into_vec();
        log::debug!("Loaded {} student records", students.len());
        Ok(students)
    }

    pub async fn update_attendance(&self, id: &str, has_attended: bool) -> Result<(), ApiError> {
        let url = self
            .auth_url(&format!("/users/{}/attendance", encode_path_segment(id)))
            .await;
        let body = UpdateAttendanceRequest { has_attended };
        let response = self
            .send(self.http_client().patch(url).json(&body))
            .await?;
        Self::read_message(response, "Failed to update attendance. Please try again.")
            .await
            .map(|_| ())
    }
}
