#![cfg(not(coverage))]

use super::*;
use crate::utils::geo::Coordinates;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::json;

fn student_json(id: &str, has_attended: bool) -> serde_json::Value {
    json!({
        "_id": id,
        "name": "Asha Kumar",
        "rollNo": "21EE001",
        "className": "III EEE",
        "hasAttended": has_attended,
        "attendedAt": if has_attended { json!("2025-01-05T05:00:00Z") } else { json!(null) }
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

fn submission() -> AttendanceSubmission {
    AttendanceSubmission {
        student_id: "s1".into(),
        event: "Career Connect 2.0".into(),
        user_location: Coordinates::new(10.6543, 77.0353),
        event_location: Coordinates::new(10.654281, 77.035257),
        radius: 200.0,
        student_info: StudentInfo {
            name: "Asha Kumar".into(),
            roll_no: "21EE001".into(),
            class_name: "III EEE".into(),
        },
    }
}

#[tokio::test]
async fn session_endpoints_return_the_user() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/check");
            then.status(200).json_body(student_json("s1", false));
        })
        .await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({ "rollNo": "21EE001", "password": "secret1" }));
            then.status(200).json_body(json!({ "user": student_json("s1", false) }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/signup").json_body(json!({
                "name": "Asha Kumar",
                "rollNo": "21EE001",
                "className": "III EEE",
                "password": "secret1"
            }));
            then.status(201).json_body(student_json("s1", false));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(200)
                .json_body(json!({ "message": "Logged out Successfully" }));
        })
        .await;

    let client = api_client(&server);
    assert_eq!(client.check_auth().await.unwrap().id, "s1");

    let user = client
        .login(&LoginRequest {
            roll_no: "21EE001".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(user.roll_no, "21EE001");
    login.assert_async().await;

    let created = client
        .signup(&SignupRequest {
            name: "Asha Kumar".into(),
            roll_no: "21EE001".into(),
            class_name: "III EEE".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.class_name, "III EEE");

    assert!(client.logout().await.is_ok());
}

#[tokio::test]
async fn check_auth_maps_401_to_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/check");
            then.status(401)
                .json_body(json!({ "message": "Unauthorized - No Token Provided" }));
        })
        .await;

    let error = api_client(&server).check_auth().await.unwrap_err();
    assert!(error.is_unauthorized());
    assert_eq!(error.error, "Unauthorized - No Token Provided");
}

#[tokio::test]
async fn login_surfaces_backend_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(400).json_body(json!({ "message": "Invalid credentials" }));
        })
        .await;

    let error = api_client(&server)
        .login(&LoginRequest {
            roll_no: "21EE001".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(error.code, "VALIDATION_ERROR");
    assert_eq!(error.error, "Invalid credentials");
}

#[tokio::test]
async fn admin_endpoints_round_trip_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/admin/login")
                .json_body(json!({ "email": "admin@college.edu", "password": "pw" }));
            then.status(200)
                .json_body(json!({ "admin": { "email": "admin@college.edu" } }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/admin/check");
            then.status(200).json_body(json!({ "email": "admin@college.edu" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/admin/logout");
            then.status(204);
        })
        .await;

    let client = api_client(&server);
    let session = client
        .admin_login(&AdminLoginRequest {
            email: "admin@college.edu".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.email, "admin@college.edu");
    assert_eq!(client.admin_check().await.unwrap(), session);
    assert!(client.admin_logout().await.is_ok());
}

#[tokio::test]
async fn submit_attendance_posts_payload_once() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/attendance")
                .json_body(serde_json::to_value(submission()).unwrap());
            then.status(201).json_body(json!({ "message": "Attendance recorded" }));
        })
        .await;

    let message = api_client(&server)
        .submit_attendance(&submission())
        .await
        .unwrap();
    assert_eq!(message, ATTENDANCE_POSTED);
    mock.assert_async().await;
}

#[tokio::test]
async fn submit_attendance_failure_uses_message_or_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/attendance");
            then.status(409)
                .json_body(json!({ "message": "Attendance already marked" }));
        })
        .await;
    let error = api_client(&server)
        .submit_attendance(&submission())
        .await
        .unwrap_err();
    assert_eq!(error.error, "Attendance already marked");

    let silent = MockServer::start_async().await;
    silent
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/attendance");
            then.status(500).body("");
        })
        .await;
    let error = api_client(&silent)
        .submit_attendance(&submission())
        .await
        .unwrap_err();
    assert_eq!(error.error, "Attendance failed");
    assert_eq!(error.code, "UNKNOWN");
}

#[tokio::test]
async fn list_students_accepts_wrapped_and_bare_payloads() {
    let wrapped = MockServer::start_async().await;
    wrapped
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/users");
            then.status(200).json_body(json!({
                "data": [student_json("s1", true), student_json("s2", false)]
            }));
        })
        .await;
    let students = api_client(&wrapped).list_students().await.unwrap();
    assert_eq!(students.len(), 2);
    assert!(students[0].has_attended);
    assert!(students[1].attended_at.is_none());

    let bare = MockServer::start_async().await;
    bare.mock_async(|when, then| {
        when.method(GET).path("/api/auth/users");
        then.status(200).json_body(json!([student_json("s3", false)]));
    })
    .await;
    let students = api_client(&bare).list_students().await.unwrap();
    assert_eq!(students[0].id, "s3");
}

#[tokio::test]
async fn update_attendance_issues_a_single_patch() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/auth/users/s1/attendance")
                .json_body(json!({ "hasAttended": true }));
            then.status(200).json_body(student_json("s1", true));
        })
        .await;

    api_client(&server)
        .update_attendance("s1", true)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn update_attendance_failure_keeps_ui_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PATCH).path("/api/auth/users/s1/attendance");
            then.status(503);
        })
        .await;

    let error = api_client(&server)
        .update_attendance("s1", false)
        .await
        .unwrap_err();
    assert_eq!(error.error, "Failed to update attendance. Please try again.");
}

#[tokio::test]
async fn unreachable_backend_is_a_request_failure() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let error = client.list_students().await.unwrap_err();
    assert_eq!(error.code, "REQUEST_FAILED");
}
