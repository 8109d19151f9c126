//! Location verification for the attendance form.
//!
//! `pending → checking → {verified, not-verified}`. Both terminal states
//! may start a new check; a check already in flight cannot be restarted.

use std::future::Future;

use leptos::*;

use crate::{
    api::ApiError,
    utils::{
        geo::{Geofence, GeofenceCheck},
        geolocation::{GeolocationError, LocationSample},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    #[default]
    Pending,
    Checking,
    Verified,
    NotVerified,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Checking => "checking",
            VerificationStatus::Verified => "verified",
            VerificationStatus::NotVerified => "not-verified",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "Not checked",
            VerificationStatus::Checking => "Checking...",
            VerificationStatus::Verified => "Verified",
            VerificationStatus::NotVerified => "Not verified",
        }
    }

    pub fn can_transition_to(&self, next: VerificationStatus) -> bool {
        use VerificationStatus::*;
        matches!(
            (self, next),
            (Pending | Verified | NotVerified, Checking) | (Checking, Verified | NotVerified)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationState {
    pub status: VerificationStatus,
    pub sample: Option<LocationSample>,
    pub check: Option<GeofenceCheck>,
    pub failure: Option<ApiError>,
}

impl VerificationState {
    /// Enters `checking`, discarding the previous attempt. Returns `false`
    /// when a check is already running.
    pub fn begin(&mut self) -> bool {
        if !self.status.can_transition_to(VerificationStatus::Checking) {
            return false;
        }
        *self = VerificationState {
            status: VerificationStatus::Checking,
            ..VerificationState::default()
        };
        true
    }

    /// Applies the geolocation outcome. Ignored unless a check is running.
    pub fn complete(
        &mut self,
        outcome: Result<LocationSample, GeolocationError>,
        fence: &Geofence,
    ) -> bool {
        if self.status != VerificationStatus::Checking {
            return false;
        }
        match outcome {
            Ok(sample) => {
                let check = fence.check(sample.coords);
                self.sample = Some(sample);
                self.check = Some(check);
                if check.within {
                    self.status = VerificationStatus::Verified;
                    self.failure = None;
                } else {
                    self.status = VerificationStatus::NotVerified;
                    self.failure = Some(ApiError::out_of_range(check.distance_m));
                }
            }
            Err(error) => {
                self.status = VerificationStatus::NotVerified;
                self.sample = None;
                self.check = None;
                self.failure = Some(error.into());
            }
        }
        true
    }

    pub fn can_submit(&self) -> bool {
        self.status == VerificationStatus::Verified && self.sample.is_some()
    }

    pub fn message(&self) -> String {
        match self.status {
            VerificationStatus::Pending => "Tap to verify your location".into(),
            VerificationStatus::Checking => "Checking location within premises...".into(),
            VerificationStatus::Verified => "You are within the event premises".into(),
            VerificationStatus::NotVerified => match self.check {
                Some(check) if !check.within => {
                    format!("You are {}m away from venue", check.distance_m.round())
                }
                _ => "Unable to access location".into(),
            },
        }
    }
}

pub fn use_verification() -> RwSignal<VerificationState> {
    create_rw_signal(VerificationState::default())
}

/// Runs one verification attempt against `fence`, reading the position
/// through `locate`. Returns the resulting status.
pub async fn verify_location<F, Fut>(
    state: RwSignal<VerificationState>,
    fence: Geofence,
    locate: F,
) -> VerificationStatus
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<LocationSample, GeolocationError>>,
{
    if !state.try_update(|s| s.begin()).unwrap_or(false) {
        log::debug!("Location check already in progress");
        return state.get_untracked().status;
    }

    let outcome = locate().await;
    if let Err(error) = &outcome {
        log::warn!("Geolocation failed: {}", error);
    }
    state.update(|s| {
        s.complete(outcome, &fence);
    });

    let snapshot = state.get_untracked();
    if let Some(check) = snapshot.check {
        log::info!(
            "Location check: {:.1}m from venue, {}",
            check.distance_m,
            snapshot.status.as_str()
        );
    }
    snapshot.status
}
