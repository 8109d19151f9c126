use super::{
    client::ApiClient,
    types::{ApiError, AttendanceSubmission},
};

pub const ATTENDANCE_POSTED: &str = "Attendance Posted Successfully";

impl ApiClient {
    /// Posts the attendance record. Returns the success message to show.
    pub async fn submit_attendance(
        &self,
        submission: &AttendanceSubmission,
    ) -> Result<String, ApiError> {
        let url = self.auth_url("/attendance").await;
        let response = self
            .send(self.http_client().post(url).json(submission))
            .await?;
        Self::read_message(response, "Attendance failed").await?;
        log::info!(
            "Attendance posted for {} at {}",
            submission.student_id,
            submission.event
        );
        Ok(ATTENDANCE_POSTED.to_string())
    }
}
