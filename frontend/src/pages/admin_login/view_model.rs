use super::utils::validate_admin_credentials;
use crate::{
    api::{AdminLoginRequest, ApiError},
    state::admin::{self, use_admin},
    utils::browser::redirect_to,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminLoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub already_signed_in: Memo<bool>,
    pub login_action: Action<AdminLoginRequest, Result<(), ApiError>>,
}

impl AdminLoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        match validate_admin_credentials(&email, &password) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_admin_login_view_model() -> AdminLoginViewModel {
    let (admin_state, _) = use_admin();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = admin::use_admin_login_action();
    let already_signed_in = create_memo(move |_| admin_state.get().is_admin());

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    password.set(String::new());
                    redirect_to("/admin/dashboard");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    AdminLoginViewModel {
        email,
        password,
        error,
        already_signed_in,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_admin, ssr::with_runtime};

    #[test]
    fn submit_validates_before_dispatch() {
        with_runtime(|| {
            provide_admin(None);
            let vm = use_admin_login_view_model();
            vm.email.set("not-an-email".into());
            vm.password.set("pw".into());
            vm.submit();
            assert_eq!(
                vm.error.get().map(|e| e.error),
                Some("Please enter a valid email address".to_string())
            );
            assert!(!vm.already_signed_in.get());
        });
    }
}
