#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AdminSession, Student};
    use crate::state::{
        admin::{AdminContext, AdminState},
        auth::{AuthContext, AuthState},
    };
    use chrono::{TimeZone, Utc};
    use leptos::*;

    pub fn student(id: &str, has_attended: bool) -> Student {
        Student {
            id: id.into(),
            name: format!("Student {}", id),
            roll_no: format!("21EE{}", id.trim_start_matches('s')),
            class_name: "III EEE".into(),
            has_attended,
            attended_at: has_attended.then(|| {
                Utc.with_ymd_and_hms(2025, 1, 5, 5, 30, 0)
                    .single()
                    .unwrap_or_default()
            }),
        }
    }

    pub fn named_student(id: &str, name: &str, roll_no: &str, has_attended: bool) -> Student {
        Student {
            name: name.into(),
            roll_no: roll_no.into(),
            ..student(id, has_attended)
        }
    }

    pub fn provide_auth(user: Option<Student>) -> AuthContext {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context::<AuthContext>((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_admin(email: Option<&str>) -> AdminContext {
        let (admin, set_admin) = create_signal(AdminState {
            session: email.map(|email| AdminSession {
                email: email.into(),
            }),
            loading: false,
        });
        provide_context::<AdminContext>((admin, set_admin));
        (admin, set_admin)
    }
}
