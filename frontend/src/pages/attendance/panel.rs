use super::{
    components::{
        event_details::EventDetailsCard, location_status::LocationStatusCard,
        student_info::StudentInfoCard, submit::SubmitAttendanceButton,
    },
    view_model::use_attendance_view_model,
};
use crate::components::{error::InlineErrorMessage, layout::{Layout, SuccessMessage}};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let submit_pending = vm.submit_action.pending();

    let on_verify = Callback::new({
        let vm = vm.clone();
        move |_: MouseEvent| vm.verify()
    });
    let on_submit = Callback::new({
        let vm = vm.clone();
        move |_: MouseEvent| vm.submit()
    });
    let success = vm.success;
    let can_submit = vm.can_submit;

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">"Mark Attendance"</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        "Verify that you are at the venue, then submit your attendance."
                    </p>
                </div>
                {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
                <InlineErrorMessage error=vm.error.into() />
                <StudentInfoCard auth=vm.auth />
                <EventDetailsCard event=vm.event.clone() />
                <LocationStatusCard verification=vm.verification on_verify=on_verify />
                <div>
                    <SubmitAttendanceButton
                        can_submit=can_submit.into()
                        pending=submit_pending.into()
                        on_submit=on_submit
                    />
                </div>
            </div>
        </Layout>
    }
}
