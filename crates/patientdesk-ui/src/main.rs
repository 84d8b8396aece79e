//! patientdesk-ui: patient management desk
//!
//! GPUI landing page offering Add/Search/Update/Remove actions on patient
//! records.

use std::sync::Arc;

use gpui::{
    App, AppContext, Application, Bounds, Focusable, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use patientdesk_core::events::{log_app_startup, log_config_fallback};
use patientdesk_core::{
    CredentialStore, DeskConfig, FileCredentialStore, HttpPatientApi, PatientApi, init_logging,
};

mod actions;
mod state;
mod theme;
mod views;

use views::MainView;

fn main() {
    init_logging(false);

    let mut startup_errors = Vec::new();

    let config = match DeskConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            log_config_fallback(&e);
            startup_errors.push(format!("Failed to load config, using defaults: {e}"));
            DeskConfig::default()
        }
    };

    let api: Arc<dyn PatientApi> = match HttpPatientApi::from_config(&config) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            tracing::error!(event = "ui.http_client.build_failed", error = %e);
            startup_errors.push(e.to_string());
            Arc::new(actions::UnavailableApi::new(e.to_string()))
        }
    };
    let credentials: Arc<dyn CredentialStore> =
        Arc::new(FileCredentialStore::new(config.storage.credentials_path()));

    log_app_startup(&config);

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(900.0), px(640.0)), cx);
        let result = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from("Patient Desk")),
                    ..Default::default()
                }),
                ..Default::default()
            },
            move |window, cx| {
                let view = cx.new(|cx| MainView::new(api, credentials, startup_errors, cx));
                view.read(cx).focus_handle(cx).focus(window);
                view
            },
        );

        if let Err(e) = result {
            tracing::error!(event = "ui.window.open_failed", error = %e);
            cx.quit();
        }
    });
}
