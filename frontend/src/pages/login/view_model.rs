use super::utils::{LoginFormState, LOGIN_SUCCESS};
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::browser::redirect_to;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    success.set(Some(LOGIN_SUCCESS.to_string()));
                    form.clear_password();
                    redirect_to("/");
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        success,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.success.get().is_none());
            assert!(vm.form.roll_no.get().is_empty());
        });
    }

    #[test]
    fn submit_with_empty_form_sets_validation_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            let error = vm.error.get().unwrap();
            assert_eq!(error.code, "VALIDATION_ERROR");
            assert!(vm.login_action.value().get().is_none());
        });
    }
}
