//! Browser geolocation access.

use thiserror::Error;

use super::geo::{CoordinateError, Coordinates};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationSample {
    pub coords: Coordinates,
    pub accuracy_m: f64,
}

impl LocationSample {
    pub fn from_parts(lat: f64, lng: f64, accuracy_m: f64) -> Result<Self, GeolocationError> {
        let coords = Coordinates::new(lat, lng);
        coords.validate()?;
        Ok(Self {
            coords,
            accuracy_m: if accuracy_m.is_finite() { accuracy_m } else { 0.0 },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("Geolocation not supported by your browser")]
    Unsupported,
    #[error("Location permission was denied")]
    PermissionDenied,
    #[error("Location information is unavailable")]
    PositionUnavailable,
    #[error("Timed out while reading your location")]
    Timeout,
    #[error("Received an invalid location: {0}")]
    InvalidSample(#[from] CoordinateError),
}

impl GeolocationError {
    /// Maps `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::PositionUnavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl PositionRequest {
    pub fn fresh(timeout_ms: u32) -> Self {
        Self {
            high_accuracy: true,
            timeout_ms,
            maximum_age_ms: 0,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn current_position(request: PositionRequest) -> Result<LocationSample, GeolocationError> {
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let reject_now = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &error);
        });

        let options = web_sys::PositionOptions::new();
        options.set_enable_high_accuracy(request.high_accuracy);
        options.set_timeout(request.timeout_ms);
        options.set_maximum_age(request.maximum_age_ms);

        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &options,
        ) {
            let _ = reject_now.call1(&JsValue::NULL, &err);
        }
    });

    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(position) => sample_from_js(&position),
        Err(error) => {
            let code = js_sys::Reflect::get(&error, &"code".into())
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(2.0);
            Err(GeolocationError::from_code(code as u16))
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn sample_from_js(position: &wasm_bindgen::JsValue) -> Result<LocationSample, GeolocationError> {
    let coords = js_sys::Reflect::get(position, &"coords".into())
        .map_err(|_| GeolocationError::PositionUnavailable)?;
    let field = |name: &str| {
        js_sys::Reflect::get(&coords, &name.into())
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(f64::NAN)
    };
    LocationSample::from_parts(field("latitude"), field("longitude"), field("accuracy"))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn current_position(_request: PositionRequest) -> Result<LocationSample, GeolocationError> {
    Err(GeolocationError::Unsupported)
}
