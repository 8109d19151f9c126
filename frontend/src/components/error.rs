use crate::api::ApiError;
use leptos::*;

fn heading_for(code: &str) -> Option<&'static str> {
    match code {
        "UNAUTHORIZED" => Some("Please sign in again"),
        "GEOLOCATION_UNAVAILABLE" => Some("Location unavailable"),
        "OUT_OF_RANGE" => Some("Outside the event premises"),
        _ => None,
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2" role="alert">
                {move || error.get().and_then(|e| heading_for(&e.code)).map(|heading| view! {
                    <div class="text-xs font-semibold uppercase tracking-wide">{heading}</div>
                })}
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let errors = e
                        .details
                        .as_ref()
                        .and_then(|d| d.get("errors"))
                        .and_then(|v| v.as_array())
                        .cloned();
                    match errors {
                        Some(errors) if e.code == "VALIDATION_ERROR" => view! {
                            <ul class="list-disc list-inside text-sm">
                                {errors.iter().map(|err| {
                                    view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view(),
                        _ => ().into_view(),
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["Name is required", "Roll number is required"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Name is required"));
        assert!(html.contains("Roll number is required"));
    }

    #[test]
    fn inline_error_labels_location_failures() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::out_of_range(340.0)));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Outside the event premises"));
        assert!(html.contains("You are 340m away from venue"));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
