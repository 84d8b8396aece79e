//! Patient profile route.
//!
//! The profile page itself lives elsewhere; this panel confirms where the
//! Search form navigated and offers a way back.

use gpui::{AnyElement, Context, FontWeight, div, prelude::*, px};
use patientdesk_core::Route;

use crate::theme;
use crate::views::MainView;

pub fn render_profile_view(route: &Route, cx: &mut Context<MainView>) -> AnyElement {
    let username = match route {
        Route::PatientProfile { username } => username.clone(),
        Route::Home => String::new(),
    };

    div()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(theme::SPACE_4))
        .p(px(theme::SPACE_6))
        .bg(theme::surface())
        .rounded(px(theme::RADIUS_LG))
        .child(
            div()
                .text_size(px(theme::TEXT_XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::text_dark())
                .child(format!("Patient: {username}")),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::text_muted())
                .child(route.path()),
        )
        .child(
            div()
                .id("profile-back")
                .px(px(theme::SPACE_4))
                .py(px(theme::SPACE_2))
                .rounded(px(theme::RADIUS_MD))
                .bg(theme::brand())
                .hover(|style| style.bg(theme::brand_hover()))
                .text_color(theme::text_white())
                .cursor_pointer()
                .on_click(cx.listener(|view, _, _, cx| {
                    view.on_back(cx);
                }))
                .child("Back"),
        )
        .into_any_element()
}
