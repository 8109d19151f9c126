use crate::{
    api::{AdminLoginRequest, AdminSession, ApiClient, ApiError},
    pages::admin_login::repository::AdminLoginRepository,
};
use leptos::*;
use std::rc::Rc;

pub type AdminContext = (ReadSignal<AdminState>, WriteSignal<AdminState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub session: Option<AdminSession>,
    pub loading: bool,
}

impl AdminState {
    pub fn is_admin(&self) -> bool {
        self.session.is_some()
    }
}

fn create_admin_context() -> AdminContext {
    let (admin_state, set_admin_state) = create_signal(AdminState {
        session: None,
        loading: true,
    });

    let api_client = use_context::<ApiClient>().unwrap_or_default();
    let repo = AdminLoginRepository::new_with_client(Rc::new(api_client));
    spawn_local(async move {
        check_admin_session(&repo, set_admin_state).await;
    });

    (admin_state, set_admin_state)
}

#[component]
pub fn AdminProvider(children: Children) -> impl IntoView {
    let ctx = create_admin_context();
    provide_context::<AdminContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_admin() -> AdminContext {
    use_context::<AdminContext>().unwrap_or_else(|| create_signal(AdminState::default()))
}

pub async fn check_admin_session(
    repo: &AdminLoginRepository,
    set_admin_state: WriteSignal<AdminState>,
) {
    let session = repo.check().await;
    if let Err(error) = &session {
        log::debug!("No admin session: {}", error);
    }
    set_admin_state.set(AdminState {
        session: session.ok(),
        loading: false,
    });
}

pub async fn admin_login_request(
    request: AdminLoginRequest,
    repo: &AdminLoginRepository,
    set_admin_state: WriteSignal<AdminState>,
) -> Result<(), ApiError> {
    match repo.login(request).await {
        Ok(session) => {
            log::info!("Admin signed in: {}", session.email);
            set_admin_state.set(AdminState {
                session: Some(session),
                loading: false,
            });
            Ok(())
        }
        Err(error) => {
            log::warn!("Admin sign-in rejected: {}", error);
            Err(error)
        }
    }
}

pub async fn admin_logout(
    repo: &AdminLoginRepository,
    set_admin_state: WriteSignal<AdminState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;
    set_admin_state.set(AdminState::default());
    result
}

/// Drops the admin session when a dashboard call is rejected with 401.
pub fn clear_on_unauthorized(error: &ApiError, set_admin_state: WriteSignal<AdminState>) {
    if error.is_unauthorized() {
        log::warn!("Admin session expired: {}", error);
        set_admin_state.set(AdminState::default());
    }
}

fn admin_repository() -> AdminLoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    AdminLoginRepository::new_with_client(Rc::new(api))
}

pub fn use_admin_login_action() -> Action<AdminLoginRequest, Result<(), ApiError>> {
    let (_admin, set_admin) = use_admin();
    let repo = admin_repository();

    create_action(move |request: &AdminLoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { admin_login_request(payload, &repo, set_admin).await }
    })
}

pub fn use_admin_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_admin, set_admin) = use_admin();
    let repo = admin_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { admin_logout(&repo, set_admin).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn admin_login_and_logout_update_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/admin/login");
                then.status(200)
                    .json_body(serde_json::json!({ "email": "admin@college.edu" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/admin/logout");
                then.status(200).json_body(serde_json::json!({}));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AdminState::default());
        let repo = AdminLoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        admin_login_request(
            AdminLoginRequest {
                email: "admin@college.edu".into(),
                password: "pw".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();
        assert!(state.get().is_admin());

        admin_logout(&repo, set_state).await.unwrap();
        assert!(!state.get().is_admin());
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_admin_login_keeps_state_signed_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/admin/login");
                then.status(401)
                    .json_body(serde_json::json!({ "message": "Invalid admin credentials" }));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AdminState::default());
        let repo = AdminLoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let error = admin_login_request(
            AdminLoginRequest {
                email: "admin@college.edu".into(),
                password: "nope".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();
        assert!(error.is_unauthorized());
        assert!(!state.get().is_admin());
        assert!(!state.get().loading);
        runtime.dispose();
    }
}
