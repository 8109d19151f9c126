use crate::components::common::{Button, ButtonVariant};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn SubmitAttendanceButton(
    can_submit: Signal<bool>,
    pending: Signal<bool>,
    on_submit: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <Button
            variant=ButtonVariant::Success
            class="w-full"
            disabled=Signal::derive(move || !can_submit.get())
            loading=pending
            on:click=move |ev| on_submit.call(ev)
        >
            {move || if pending.get() { "Submitting..." } else { "Submit Attendance" }}
        </Button>
        <Show when=move || !can_submit.get() && !pending.get()>
            <p class="mt-2 text-xs text-center text-gray-500">
                "Verify your location to enable submission"
            </p>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn disabled_until_location_is_verified() {
        let html = render_to_string(move || {
            view! {
                <SubmitAttendanceButton
                    can_submit=Signal::derive(|| false)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("disabled"));
        assert!(html.contains("Verify your location to enable submission"));
    }

    #[test]
    fn enabled_when_verified() {
        let html = render_to_string(move || {
            view! {
                <SubmitAttendanceButton
                    can_submit=Signal::derive(|| true)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Submit Attendance"));
        assert!(!html.contains("Verify your location to enable submission"));
    }
}
