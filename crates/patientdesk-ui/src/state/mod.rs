//! Application state for patientdesk-ui.
//!
//! `AppState` is a facade over the core launcher plus the state only the
//! window needs (input focus, the visible notice, in-flight submission,
//! current route). Views read it; `MainView` handlers mutate it.

pub mod app_state;

pub use app_state::AppState;
