use super::{
    repository::AttendanceRepository,
    utils::{build_submission, BannerGeneration},
};
use crate::{
    api::{ApiClient, ApiError, AttendanceSubmission},
    config::{self, EventConfig},
    state::{
        auth::{self, use_auth, AuthState},
        verification::{use_verification, verify_location, VerificationState, VerificationStatus},
    },
    utils::geolocation::{current_position, PositionRequest},
};
use leptos::*;
use std::rc::Rc;

const SUCCESS_BANNER_MS: u32 = 4_000;

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub event: EventConfig,
    pub auth: ReadSignal<AuthState>,
    pub verification: RwSignal<VerificationState>,
    pub verify_action: Action<(), VerificationStatus>,
    pub submit_action: Action<AttendanceSubmission, Result<String, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub can_submit: Memo<bool>,
}

impl AttendanceViewModel {
    pub fn verify(&self) {
        if self.verification.get_untracked().status == VerificationStatus::Checking {
            return;
        }
        self.error.set(None);
        self.verify_action.dispatch(());
    }

    /// Validates locally and dispatches the submission. Nothing is sent
    /// unless the location is verified.
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let user = self.auth.get_untracked().user;
        let verification = self.verification.get_untracked();
        match build_submission(user.as_ref(), &verification, &self.event) {
            Ok(submission) => {
                self.error.set(None);
                self.success.set(None);
                self.submit_action.dispatch(submission);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let (auth_state, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = AttendanceRepository::new_with_client(Rc::new(api));
    let app_config = config::current();
    let event = app_config.event.clone();
    let request = PositionRequest::fresh(app_config.geolocation_timeout_ms);

    let verification = use_verification();
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let fence = event.geofence;
    let verify_action = create_action(move |_: &()| async move {
        verify_location(verification, fence, move || current_position(request)).await
    });

    let submit_action = create_action(move |submission: &AttendanceSubmission| {
        let repo = repository.clone();
        let submission = submission.clone();
        async move { repo.submit(submission).await }
    });

    let banner = store_value(BannerGeneration::default());
    let submit_pending = submit_action.pending();
    let can_submit =
        create_memo(move |_| verification.with(VerificationState::can_submit) && !submit_pending.get());

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(message) => {
                    error.set(None);
                    success.set(Some(message));
                    let mut generation = 0;
                    banner.update_value(|banner| generation = banner.advance());
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                        if banner.with_value(|banner| banner.is_current(generation)) {
                            success.set(None);
                        }
                    });
                }
                Err(err) => {
                    log::error!("Attendance submission failed: {}", err);
                    auth::clear_on_unauthorized(&err, set_auth);
                    error.set(Some(err));
                }
            }
        }
    });

    AttendanceViewModel {
        event,
        auth: auth_state,
        verification,
        verify_action,
        submit_action,
        error,
        success,
        can_submit,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_auth, helpers::student, ssr::with_runtime};
    use crate::utils::geolocation::LocationSample;

    #[test]
    fn submit_without_verification_reports_validation_error() {
        with_runtime(|| {
            provide_auth(Some(student("s1", false)));
            let vm = use_attendance_view_model();
            assert!(!vm.can_submit.get());
            vm.submit();
            let error = vm.error.get().unwrap();
            assert_eq!(error.code, "VALIDATION_ERROR");
            assert_eq!(error.error, "Please verify your location first");
            assert!(vm.submit_action.value().get().is_none());
        });
    }

    #[test]
    fn can_submit_follows_verified_state() {
        with_runtime(|| {
            provide_auth(Some(student("s1", false)));
            let vm = use_attendance_view_model();
            let fence = vm.event.geofence;
            vm.verification.update(|state| {
                state.begin();
                state.complete(LocationSample::from_parts(10.654300, 77.035300, 5.0), &fence);
            });
            assert!(vm.can_submit.get());

            vm.verification.update(|state| {
                state.begin();
            });
            assert!(!vm.can_submit.get());
        });
    }
}
