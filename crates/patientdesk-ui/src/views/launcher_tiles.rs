//! Action tiles on the landing screen.

use gpui::{AnyElement, Context, ElementId, FontWeight, div, prelude::*, px};
use patientdesk_core::ActiveModal;

use crate::theme;
use crate::views::MainView;

fn glyph(modal: ActiveModal) -> &'static str {
    match modal {
        ActiveModal::Add => "+",
        ActiveModal::Search => "⌕",
        ActiveModal::Update => "✎",
        ActiveModal::Remove => "−",
        ActiveModal::None => "",
    }
}

/// Render the row of launcher tiles.
pub fn render_launcher_tiles(cx: &mut Context<MainView>) -> AnyElement {
    div()
        .flex()
        .flex_wrap()
        .justify_center()
        .gap(px(theme::SPACE_6))
        .children(
            ActiveModal::TILES
                .iter()
                .map(|&modal| render_tile(modal, cx)),
        )
        .into_any_element()
}

fn render_tile(modal: ActiveModal, cx: &mut Context<MainView>) -> AnyElement {
    div()
        .id(ElementId::Name(format!("tile-{}", modal.label()).into()))
        .size(px(theme::TILE_SIZE))
        .bg(theme::brand())
        .hover(|style| style.bg(theme::brand_hover()))
        .rounded(px(theme::RADIUS_LG))
        .cursor_pointer()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap(px(theme::SPACE_2))
        .on_click(cx.listener(move |view, _, _, cx| {
            view.on_tile_click(modal, cx);
        }))
        .child(
            div()
                .text_size(px(40.0))
                .text_color(theme::text_white())
                .child(glyph(modal)),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_BASE))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme::text_white())
                .child(modal.label()),
        )
        .into_any_element()
}
