use crate::{
    api::{ApiError, AttendanceSubmission, Student, StudentInfo},
    config::EventConfig,
    state::verification::VerificationState,
};

/// Builds the attendance payload. Only a verified location can be submitted.
pub fn build_submission(
    user: Option<&Student>,
    verification: &VerificationState,
    event: &EventConfig,
) -> Result<AttendanceSubmission, ApiError> {
    let user = user.ok_or_else(|| ApiError::unauthorized("Please log in to submit attendance"))?;
    let sample = match verification.sample {
        Some(sample) if verification.can_submit() => sample,
        _ => return Err(ApiError::validation("Please verify your location first")),
    };
    Ok(AttendanceSubmission {
        student_id: user.id.clone(),
        event: event.name.clone(),
        user_location: sample.coords,
        event_location: event.geofence.center,
        radius: event.geofence.radius_m,
        student_info: StudentInfo::from(user),
    })
}

/// Text rows of the location card. Absent until a sample was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDetails {
    pub coordinates: String,
    pub distance: String,
    pub within_premises: String,
    pub accuracy: String,
}

impl LocationDetails {
    pub fn from_state(state: &VerificationState) -> Option<Self> {
        let sample = state.sample?;
        let check = state.check?;
        Some(Self {
            coordinates: sample.coords.display(),
            distance: format!("{} meters", check.distance_m.round()),
            within_premises: if check.within { "Yes ✓" } else { "No ✗" }.to_string(),
            accuracy: format!("±{}m", sample.accuracy_m.round()),
        })
    }
}

/// Tracks which success banner is on screen so only the newest one's timer
/// may dismiss it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerGeneration(u32);

impl BannerGeneration {
    pub fn advance(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, generation: u32) -> bool {
        self.0 == generation
    }
}
