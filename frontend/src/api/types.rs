use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{geo::Coordinates, geolocation::GeolocationError};

/// A student record as stored by the backend. Also the shape of the
/// signed-in user returned by the session endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub roll_no: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub has_attended: bool,
    #[serde(default)]
    pub attended_at: Option<DateTime<Utc>>,
}

/// Session endpoints answer with the user either bare or as `{ "user": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum UserPayload {
    Wrapped { user: Student },
    Bare(Student),
}

impl UserPayload {
    pub(crate) fn into_student(self) -> Student {
        match self {
            UserPayload::Wrapped { user } => user,
            UserPayload::Bare(user) => user,
        }
    }
}

/// `GET /users` answers with either a bare array or `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum StudentListPayload {
    Wrapped { data: Vec<Student> },
    Bare(Vec<Student>),
}

impl StudentListPayload {
    pub(crate) fn into_vec(self) -> Vec<Student> {
        match self {
            StudentListPayload::Wrapped { data } => data,
            StudentListPayload::Bare(data) => data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub roll_no: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub roll_no: String,
    pub class_name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AdminPayload {
    Wrapped { admin: AdminSession },
    Bare(AdminSession),
}

impl AdminPayload {
    pub(crate) fn into_session(self) -> AdminSession {
        match self {
            AdminPayload::Wrapped { admin } => admin,
            AdminPayload::Bare(admin) => admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    pub name: String,
    pub roll_no: String,
    pub class_name: String,
}

impl From<&Student> for StudentInfo {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            roll_no: student.roll_no.clone(),
            class_name: student.class_name.clone(),
        }
    }
}

/// Body of `POST /auth/attendance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubmission {
    pub student_id: String,
    pub event: String,
    pub user_location: Coordinates,
    pub event_location: Coordinates,
    pub radius: f64,
    pub student_info: StudentInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRequest {
    pub has_attended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn geolocation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "GEOLOCATION_UNAVAILABLE")
    }

    pub fn out_of_range(distance_m: f64) -> Self {
        Self {
            error: format!("You are {}m away from venue", distance_m.round()),
            code: "OUT_OF_RANGE".to_string(),
            details: Some(serde_json::json!({ "distance_m": distance_m })),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

impl From<GeolocationError> for ApiError {
    fn from(error: GeolocationError) -> Self {
        ApiError::geolocation(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn deserialize_student_accepts_mongo_id() {
        let raw = r#"{
            "_id": "65f1c0ab",
            "name": "Asha",
            "rollNo": "21EE001",
            "className": "III EEE",
            "hasAttended": true,
            "attendedAt": "2025-01-05T05:00:00Z"
        }"#;
        let student: Student = serde_json::from_str(raw).unwrap();
        assert_eq!(student.id, "65f1c0ab");
        assert_eq!(student.roll_no, "21EE001");
        assert!(student.has_attended);
        assert!(student.attended_at.is_some());
    }

    #[wasm_bindgen_test]
    fn deserialize_student_defaults_missing_attendance() {
        let raw = r#"{ "id": "s1", "name": "Ravi", "rollNo": "21EE002" }"#;
        let student: Student = serde_json::from_str(raw).unwrap();
        assert!(!student.has_attended);
        assert!(student.attended_at.is_none());
        assert_eq!(student.class_name, "");
    }

    #[wasm_bindgen_test]
    fn serialize_attendance_submission_camel_case_fields() {
        let submission = AttendanceSubmission {
            student_id: "s1".into(),
            event: "Career Connect 2.0".into(),
            user_location: Coordinates::new(10.6543, 77.0353),
            event_location: Coordinates::new(10.654281, 77.035257),
            radius: 200.0,
            student_info: StudentInfo {
                name: "Asha".into(),
                roll_no: "21EE001".into(),
                class_name: "III EEE".into(),
            },
        };
        let v = serde_json::to_value(&submission).unwrap();
        assert_eq!(v["studentId"], serde_json::json!("s1"));
        assert_eq!(v["userLocation"]["lat"], serde_json::json!(10.6543));
        assert_eq!(v["eventLocation"]["lng"], serde_json::json!(77.035257));
        assert_eq!(v["radius"], serde_json::json!(200.0));
        assert_eq!(v["studentInfo"]["rollNo"], serde_json::json!("21EE001"));
        assert_eq!(v["studentInfo"]["className"], serde_json::json!("III EEE"));
    }

    #[wasm_bindgen_test]
    fn student_list_payload_accepts_both_shapes() {
        let wrapped: StudentListPayload = serde_json::from_str(
            r#"{ "data": [{ "id": "s1", "name": "A", "rollNo": "1" }] }"#,
        )
        .unwrap();
        assert_eq!(wrapped.into_vec().len(), 1);

        let bare: StudentListPayload =
            serde_json::from_str(r#"[{ "id": "s1", "name": "A", "rollNo": "1" }]"#).unwrap();
        assert_eq!(bare.into_vec()[0].id, "s1");
    }
}
