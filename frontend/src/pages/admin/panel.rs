use super::{
    components::{roster_table::RosterTable, stats::RosterStatsCards, toolbar::RosterToolbar},
    view_model::use_admin_dashboard_view_model,
};
use crate::components::{
    error::InlineErrorMessage,
    layout::{ErrorMessage, Layout, LoadingSpinner},
};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let vm = use_admin_dashboard_view_model();
    let loading = vm.roster_resource.loading();
    let saving = vm.update_action.pending();
    let filtered = vm.filtered;
    let roster = vm.roster;
    let export_message = vm.export_message;

    let on_refresh = Callback::new(move |_: MouseEvent| vm.refresh());
    let on_export = Callback::new(move |_: MouseEvent| vm.export());
    let on_edit = Callback::new(move |id: String| vm.start_edit(&id));
    let on_save = Callback::new(move |_: ()| vm.save());
    let on_cancel = Callback::new(move |_: ()| vm.cancel_edit());

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Attendance Dashboard"</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        "Review, correct and export the attendance roster."
                    </p>
                </div>
                <RosterStatsCards stats=vm.stats />
                <RosterToolbar
                    query=vm.query
                    status_filter=vm.status_filter
                    loading=loading
                    can_export=Signal::derive(move || filtered.with(|rows| !rows.is_empty()))
                    on_refresh=on_refresh
                    on_export=on_export
                />
                {move || export_message.get().map(|message| view! { <ErrorMessage message=message /> })}
                <InlineErrorMessage error=vm.load_error.into() />
                <InlineErrorMessage error=vm.update_error.into() />
                <Show
                    when=move || !(loading.get() && roster.with(|cache| cache.is_empty()))
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <RosterTable
                        rows=filtered
                        edit=vm.edit
                        saving=saving
                        on_edit=on_edit
                        on_save=on_save
                        on_cancel=on_cancel
                    />
                </Show>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{provide_admin, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn dashboard_renders_stats_toolbar_and_empty_roster() {
        let html = render_to_string(move || {
            provide_auth(None);
            provide_admin(Some("admin@college.edu"));
            view! { <AdminDashboardPanel /> }
        });
        assert!(html.contains("Attendance Dashboard"));
        assert!(html.contains("Total Students"));
        assert!(html.contains("0.0%"));
        assert!(html.contains("Export CSV"));
        assert!(html.contains("admin@college.edu"));
    }
}
