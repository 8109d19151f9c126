mod attendance;
mod auth;
pub mod client;
mod students;
pub mod types;

pub use client::*;
pub use attendance::ATTENDANCE_POSTED;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
