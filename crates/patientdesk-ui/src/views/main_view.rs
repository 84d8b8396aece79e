use std::sync::Arc;

use gpui::{
    Context, FocusHandle, Focusable, FontWeight, IntoElement, KeyDownEvent, Render, Window, div,
    prelude::*, px,
};

use patientdesk_core::credentials::access_token;
use patientdesk_core::{ActiveModal, CredentialStore, FormField, PatientApi, Route};

use crate::actions;
use crate::state::AppState;
use crate::theme;
use crate::views::{
    add_patient_form, launcher_tiles, modal, notice_dialog, profile_view, search_form,
};

/// Main application view that composes the header, tiles, modals and notices.
///
/// Owns application state and routes keyboard input to the open modal.
pub struct MainView {
    state: AppState,
    focus_handle: FocusHandle,
    api: Arc<dyn PatientApi>,
    credentials: Arc<dyn CredentialStore>,
}

impl MainView {
    pub fn new(
        api: Arc<dyn PatientApi>,
        credentials: Arc<dyn CredentialStore>,
        startup_errors: Vec<String>,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            state: AppState::new(startup_errors),
            focus_handle: cx.focus_handle(),
            api,
            credentials,
        }
    }

    /// Apply a state mutation and notify GPUI to re-render.
    fn mutate_state(&mut self, cx: &mut Context<Self>, f: impl FnOnce(&mut AppState)) {
        f(&mut self.state);
        cx.notify();
    }

    pub fn on_tile_click(&mut self, modal: ActiveModal, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.launcher.tile_clicked", modal = %modal);
        self.mutate_state(cx, |s| s.open_modal(modal));
    }

    pub fn on_modal_close(&mut self, cx: &mut Context<Self>) {
        tracing::info!(
            event = "ui.modal.closed",
            modal = %self.state.active_modal()
        );
        self.mutate_state(cx, |s| s.close_modal());
    }

    /// Submit the Add form.
    ///
    /// The token is read before spawning; the POST runs on the background
    /// executor and its result is applied back on the foreground.
    pub fn on_add_submit(&mut self, cx: &mut Context<Self>) {
        if self.state.is_submitting() {
            tracing::debug!(event = "ui.add_modal.submit_ignored_in_flight");
            return;
        }
        if self.state.active_modal() != ActiveModal::Add {
            tracing::error!(
                event = "ui.add_modal.invalid_state",
                "on_add_submit called when Add modal not open"
            );
            return;
        }

        let payload = self.state.registration_payload();
        let token = access_token(self.credentials.as_ref());
        let api = Arc::clone(&self.api);

        tracing::info!(event = "ui.add_modal.submitted");
        self.state.set_submitting();
        cx.notify();

        cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            let result = cx
                .background_executor()
                .spawn(async move {
                    actions::register_patient(api.as_ref(), &payload, token.as_deref())
                })
                .await;

            // Always clear the in-flight flag, even if the view was dropped
            let _ = this.update(cx, |view, _cx| {
                view.state.clear_submitting();
            });

            if let Err(e) = this.update(cx, |view, cx| {
                view.state.complete_add(result);
                cx.notify();
            }) {
                tracing::warn!(event = "ui.add_modal.view_update_failed", error = ?e);
            }
        })
        .detach();
    }

    pub fn on_search_submit(&mut self, cx: &mut Context<Self>) {
        self.state.submit_search();
        if self.state.notice().is_some() {
            tracing::info!(event = "ui.search_modal.missing_username");
        } else {
            tracing::info!(event = "ui.search_modal.navigated", route = %self.state.route());
        }
        cx.notify();
    }

    pub fn on_field_focus(&mut self, field: FormField, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.focus_field(field));
    }

    pub fn on_gender_cycle(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.cycle_gender());
    }

    pub fn on_dismiss_notice(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.dismiss_notice());
    }

    pub fn on_back(&mut self, cx: &mut Context<Self>) {
        if self.state.navigate_back() {
            tracing::info!(event = "ui.navigation.back", route = %self.state.route());
        }
        cx.notify();
    }

    fn on_dismiss_errors(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.dismiss_errors());
    }

    /// Handle keyboard input.
    ///
    /// A visible notice takes Enter/Escape only. Otherwise the open modal
    /// receives text, Backspace, Enter (submit), Escape (close) and, for
    /// the Add form, Tab (next field) and Space on the gender selector.
    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let key_str = keystroke.key.to_string();

        if self.state.notice().is_some() {
            if key_str == "enter" || key_str == "escape" {
                self.on_dismiss_notice(cx);
            }
            return;
        }

        let modal = self.state.active_modal();
        if !modal.has_form() {
            if key_str == "escape" && modal != ActiveModal::None {
                self.on_modal_close(cx);
            }
            return;
        }

        match key_str.as_str() {
            "escape" => self.on_modal_close(cx),
            "enter" => match modal {
                ActiveModal::Add => self.on_add_submit(cx),
                _ => self.on_search_submit(cx),
            },
            "backspace" => self.mutate_state(cx, |s| s.backspace()),
            "tab" if modal == ActiveModal::Add => {
                self.mutate_state(cx, |s| s.focus_next_field());
            }
            "space"
                if modal == ActiveModal::Add && self.state.add_focus() == FormField::Gender =>
            {
                self.on_gender_cycle(cx);
            }
            _ => {
                if keystroke.modifiers.control || keystroke.modifiers.platform {
                    return;
                }
                // key_char carries shift and layout; fall back to the key for
                // single printable keys.
                let text = match &keystroke.key_char {
                    Some(text) => text.clone(),
                    None if key_str == "space" => " ".to_string(),
                    None if key_str.chars().count() == 1 => key_str.clone(),
                    None => return,
                };
                self.mutate_state(cx, |s| s.type_text(&text));
            }
        }
    }

    fn render_header(&self) -> impl IntoElement {
        div()
            .px(px(theme::SPACE_4))
            .py(px(theme::SPACE_3))
            .bg(theme::header())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(theme::TEXT_XL))
                    .text_color(theme::text_white())
                    .font_weight(FontWeight::BOLD)
                    .child("Patient Desk"),
            )
            .child(
                div()
                    .text_size(px(theme::TEXT_SM))
                    .text_color(theme::placeholder())
                    .child(self.state.route().path()),
            )
    }
}

impl Focusable for MainView {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_modal = self.state.active_modal();

        let body = match self.state.route().clone() {
            Route::Home => launcher_tiles::render_launcher_tiles(cx),
            route @ Route::PatientProfile { .. } => profile_view::render_profile_view(&route, cx),
        };

        let add_modal = modal::render_modal(
            "add-modal",
            active_modal == ActiveModal::Add,
            "Add Patient",
            |cx| add_patient_form::render_add_patient_form(&self.state, cx),
            |view, cx| view.on_modal_close(cx),
            cx,
        );
        let search_modal = modal::render_modal(
            "search-modal",
            active_modal == ActiveModal::Search,
            "View Patient Profile",
            |cx| search_form::render_search_form(&self.state, cx),
            |view, cx| view.on_modal_close(cx),
            cx,
        );
        let notice = self
            .state
            .notice()
            .map(|notice| notice_dialog::render_notice_dialog(notice, cx));

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(theme::void())
            .child(self.render_header())
            // Error banner (startup config failures)
            .when(self.state.has_banner_errors(), |this| {
                this.child(
                    div()
                        .mx(px(theme::SPACE_4))
                        .mt(px(theme::SPACE_2))
                        .px(px(theme::SPACE_4))
                        .py(px(theme::SPACE_2))
                        .bg(theme::with_alpha(theme::ember(), 0.15))
                        .rounded(px(theme::RADIUS_MD))
                        .flex()
                        .justify_between()
                        .items_start()
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .gap(px(theme::SPACE_1))
                                .text_size(px(theme::TEXT_SM))
                                .text_color(theme::ember())
                                .children(
                                    self.state
                                        .banner_errors()
                                        .iter()
                                        .map(|error| div().child(format!("• {error}"))),
                                ),
                        )
                        .child(
                            div()
                                .id("dismiss-errors-btn")
                                .text_size(px(theme::TEXT_SM))
                                .text_color(theme::ember())
                                .cursor_pointer()
                                .on_click(cx.listener(|view, _, _, cx| {
                                    view.on_dismiss_errors(cx);
                                }))
                                .child("Dismiss"),
                        ),
                )
            })
            .child(
                div()
                    .flex_1()
                    .flex()
                    .justify_center()
                    .items_center()
                    .p(px(theme::SPACE_6))
                    .child(body),
            )
            .children(add_modal)
            .children(search_modal)
            .children(notice)
    }
}
