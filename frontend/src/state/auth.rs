use crate::{
    api::{ApiClient, ApiError, LoginRequest, SignupRequest, Student},
    pages::{login::repository::LoginRepository, signup::repository::SignupRepository},
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Student>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn sign_in(&mut self, user: Student) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.loading = false;
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.loading = false;
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_default();
    let repo = LoginRepository::new_with_client(Rc::new(api_client));
    spawn_local(async move {
        check_session(&repo, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Resolves the initial session. Any failure leaves the user signed out.
pub async fn check_session(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    match repo.check_auth().await {
        Ok(user) => {
            log::debug!("Session restored for {}", user.roll_no);
            set_auth_state.update(|state| state.sign_in(user));
        }
        Err(error) => {
            log::debug!("No active session: {}", error);
            set_auth_state.update(AuthState::sign_out);
        }
    }
}

/// `loading` only tracks the initial session check and is left alone here.
pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match repo.login(request).await {
        Ok(user) => {
            log::info!("Logged in as {}", user.roll_no);
            set_auth_state.update(|state| state.sign_in(user));
            Ok(())
        }
        Err(error) => {
            log::warn!("Sign-in rejected: {}", error);
            Err(error)
        }
    }
}

pub async fn signup_request(
    request: SignupRequest,
    repo: &SignupRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match repo.signup(request).await {
        Ok(user) => {
            log::info!("Account created for {}", user.roll_no);
            set_auth_state.update(|state| state.sign_in(user));
            Ok(())
        }
        Err(error) => {
            log::warn!("Sign-in rejected: {}", error);
            Err(error)
        }
    }
}

/// Clears the session even when the backend call fails.
pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;
    if let Err(error) = &result {
        log::warn!("Logout request failed: {}", error);
    }
    set_auth_state.update(AuthState::sign_out);
    result
}

/// Drops the session when a protected call reports it expired.
pub fn clear_on_unauthorized(error: &ApiError, set_auth_state: WriteSignal<AuthState>) {
    if error.is_unauthorized() {
        log::warn!("Session expired: {}", error);
        set_auth_state.update(AuthState::sign_out);
    }
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_signup_action() -> Action<SignupRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repo = SignupRepository::new_with_client(Rc::new(api));

    create_action(move |request: &SignupRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { signup_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn unauthorized_errors_clear_the_session() {
        with_runtime(|| {
            let (state, set_state) = create_signal(AuthState {
                user: Some(crate::test_support::helpers::student("s1", false)),
                is_authenticated: true,
                loading: false,
            });

            clear_on_unauthorized(&ApiError::request_failed("offline"), set_state);
            assert!(state.get().is_authenticated);

            clear_on_unauthorized(&ApiError::unauthorized("expired"), set_state);
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }
}
