use super::utils::{SignupFormState, SIGNUP_SUCCESS};
use crate::{
    api::{ApiError, SignupRequest},
    state::auth,
    utils::browser::redirect_to,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignupViewModel {
    pub form: RwSignal<SignupFormState>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub signup_action: Action<SignupRequest, Result<(), ApiError>>,
}

impl SignupViewModel {
    pub fn submit(&self) {
        if self.signup_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(SignupFormState::to_request) {
            Ok(request) => {
                self.error.set(None);
                self.signup_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_signup_view_model() -> SignupViewModel {
    let form = create_rw_signal(SignupFormState::default());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);
    let signup_action = auth::use_signup_action();

    create_effect(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    success.set(Some(SIGNUP_SUCCESS.to_string()));
                    form.update(SignupFormState::reset);
                    redirect_to("/");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SignupViewModel {
        form,
        error,
        success,
        signup_action,
    }
}
