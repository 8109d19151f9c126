use super::{
    repository::AdminRosterRepository,
    utils::{filter_students, report_filename, roster_csv, EditState, StatusFilter, UPDATE_FAILED},
};
use crate::{
    api::{ApiClient, ApiError, Student},
    state::{
        admin::{self, use_admin},
        roster::{RosterCache, RosterStats},
    },
    utils::{time::today_in_app_tz, trigger_csv_download},
};
use chrono::{DateTime, Utc};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    pub roster: RwSignal<RosterCache>,
    pub reload: RwSignal<u32>,
    pub roster_resource: Resource<u32, Result<Vec<Student>, ApiError>>,
    pub query: RwSignal<String>,
    pub status_filter: RwSignal<StatusFilter>,
    pub edit: RwSignal<EditState>,
    pub filtered: Memo<Vec<Student>>,
    pub stats: Memo<RosterStats>,
    pub update_action: Action<(String, bool), Result<(String, bool), ApiError>>,
    pub load_error: RwSignal<Option<ApiError>>,
    pub update_error: RwSignal<Option<ApiError>>,
    pub export_message: RwSignal<Option<String>>,
}

impl AdminDashboardViewModel {
    pub fn refresh(&self) {
        self.load_error.set(None);
        self.reload.update(|n| *n = n.wrapping_add(1));
    }

    pub fn start_edit(&self, id: &str) {
        self.update_error.set(None);
        self.edit.update(|edit| edit.start(id));
    }

    pub fn cancel_edit(&self) {
        self.update_error.set(None);
        self.edit.update(EditState::cancel);
    }

    /// Sends one update for the selected row. Ignored while a save is in
    /// flight or before a status is chosen.
    pub fn save(&self) {
        if self.update_action.pending().get_untracked() {
            return;
        }
        if let Some(change) = self.edit.with_untracked(EditState::pending_save) {
            self.update_error.set(None);
            self.update_action.dispatch(change);
        }
    }

    pub fn export(&self) {
        let rows = self.filtered.get_untracked();
        let filename = report_filename(today_in_app_tz());
        let result = roster_csv(&rows)
            .map_err(|err| err.to_string())
            .and_then(|csv| trigger_csv_download(&filename, &csv));
        match result {
            Ok(()) => {
                log::info!("Exported {} roster rows to {}", rows.len(), filename);
                self.export_message.set(None);
            }
            Err(err) => {
                log::error!("CSV export failed: {}", err);
                self.export_message.set(Some(format!("Export failed: {}", err)));
            }
        }
    }
}

/// Folds a finished save into the roster and the row editor. On success the
/// row mirrors the change and editing ends; on failure the row stays in edit
/// mode and the returned error is the one to display.
pub fn apply_update_result(
    cache: &mut RosterCache,
    edit: &mut EditState,
    result: Result<(String, bool), ApiError>,
    now: DateTime<Utc>,
) -> Option<ApiError> {
    match result {
        Ok((id, has_attended)) => {
            if !cache.apply_attendance(&id, has_attended, now) {
                log::warn!("Updated student {} is not in the loaded roster", id);
            }
            edit.cancel();
            None
        }
        Err(err) if err.is_unauthorized() => Some(err),
        Err(err) => Some(ApiError {
            error: UPDATE_FAILED.into(),
            ..err
        }),
    }
}

pub fn use_admin_dashboard_view_model() -> AdminDashboardViewModel {
    let (_, set_admin) = use_admin();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = AdminRosterRepository::new_with_client(Rc::new(api));

    let roster = create_rw_signal(RosterCache::default());
    let reload = create_rw_signal(0u32);
    let query = create_rw_signal(String::new());
    let status_filter = create_rw_signal(StatusFilter::default());
    let edit = create_rw_signal(EditState::default());
    let load_error = create_rw_signal(None::<ApiError>);
    let update_error = create_rw_signal(None::<ApiError>);
    let export_message = create_rw_signal(None::<String>);

    let roster_resource = create_resource(move || reload.get(), {
        let repo = repository.clone();
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_students().await }
        }
    });

    let update_action = create_action(move |(id, has_attended): &(String, bool)| {
        let repo = repository.clone();
        let id = id.clone();
        let has_attended = *has_attended;
        async move {
            repo.update_attendance(id.clone(), has_attended)
                .await
                .map(|_| (id, has_attended))
        }
    });

    let filtered = create_memo(move |_| {
        let needle = query.get();
        let filter = status_filter.get();
        roster.with(|cache| filter_students(cache.records(), &needle, filter))
    });
    let stats = create_memo(move |_| roster.with(RosterCache::stats));

    create_effect(move |_| {
        if let Some(result) = roster_resource.get() {
            match result {
                Ok(students) => {
                    log::debug!("Loaded {} students", students.len());
                    load_error.set(None);
                    roster.update(|cache| {
                        cache.reconcile(students);
                    });
                }
                Err(err) => {
                    log::error!("Failed to load roster: {}", err);
                    admin::clear_on_unauthorized(&err, set_admin);
                    load_error.set(Some(err));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = update_action.value().get() {
            if let Err(err) = &result {
                log::error!("Attendance update failed: {}", err);
                admin::clear_on_unauthorized(err, set_admin);
            }
            let mut cache = roster.get_untracked();
            let mut editor = edit.get_untracked();
            let shown = apply_update_result(&mut cache, &mut editor, result, Utc::now());
            roster.set(cache);
            edit.set(editor);
            update_error.set(shown);
        }
    });

    AdminDashboardViewModel {
        roster,
        reload,
        roster_resource,
        query,
        status_filter,
        edit,
        filtered,
        stats,
        update_action,
        load_error,
        update_error,
        export_message,
    }
}
