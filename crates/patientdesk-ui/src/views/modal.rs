//! Generic modal dialog.
//!
//! Renders nothing when closed. When open, draws a dimmed overlay over the
//! whole window with a titled panel, a close control and caller content.

use gpui::{AnyElement, Context, ElementId, FontWeight, div, prelude::*, px};

use crate::theme;
use crate::views::MainView;

/// Render a modal around `content` if `is_open`.
///
/// `content` is only built for an open modal. Clicking the `×` control
/// invokes `on_close`; the modal holds no state of its own.
pub fn render_modal(
    id: &'static str,
    is_open: bool,
    title: &str,
    content: impl FnOnce(&mut Context<MainView>) -> AnyElement,
    on_close: impl Fn(&mut MainView, &mut Context<MainView>) + 'static,
    cx: &mut Context<MainView>,
) -> Option<AnyElement> {
    if !is_open {
        return None;
    }

    let body = content(cx);
    let title = title.to_string();

    Some(
        div()
            .id(ElementId::Name(format!("{id}-overlay").into()))
            .absolute()
            .inset_0()
            .bg(theme::overlay())
            .flex()
            .justify_center()
            .items_center()
            .child(
                div()
                    .id(ElementId::Name(format!("{id}-panel").into()))
                    .w(px(theme::MODAL_WIDTH))
                    .bg(theme::surface())
                    .rounded(px(theme::RADIUS_LG))
                    .border_1()
                    .border_color(theme::border())
                    .flex()
                    .flex_col()
                    // Title bar
                    .child(
                        div()
                            .px(px(theme::SPACE_4))
                            .py(px(theme::SPACE_3))
                            .border_b_1()
                            .border_color(theme::border())
                            .flex()
                            .justify_between()
                            .items_center()
                            .child(
                                div()
                                    .text_size(px(theme::TEXT_LG))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(theme::text_dark())
                                    .child(title),
                            )
                            .child(
                                div()
                                    .id(ElementId::Name(format!("{id}-close").into()))
                                    .px(px(theme::SPACE_2))
                                    .text_size(px(theme::TEXT_XL))
                                    .text_color(theme::text_muted())
                                    .hover(|style| style.text_color(theme::text_dark()))
                                    .cursor_pointer()
                                    .on_click(cx.listener(move |view, _, _, cx| {
                                        on_close(view, cx);
                                    }))
                                    .child("×"),
                            ),
                    )
                    .child(div().p(px(theme::SPACE_4)).child(body)),
            )
            .into_any_element(),
    )
}
