//! Patient registration form hosted by the Add modal.
//!
//! Text inputs capture keystrokes routed by `MainView`; clicking an input
//! moves keyboard focus to it. Gender is a selector cycled by click or Space.

use gpui::{AnyElement, Context, ElementId, div, prelude::*, px};
use patientdesk_core::{FormField, GENDER_OPTIONS};

use crate::state::AppState;
use crate::theme;
use crate::views::MainView;

/// Render the Add Patient form.
pub fn render_add_patient_form(state: &AppState, cx: &mut Context<MainView>) -> AnyElement {
    let form = state.launcher().form();
    let focused = state.add_focus();
    let submitting = state.is_submitting();

    let inputs: Vec<AnyElement> = FormField::ALL
        .iter()
        .filter(|field| !field.is_selector())
        .map(|&field| render_text_input(field, form.get(field), focused == field, cx))
        .collect();

    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_3))
        .children(inputs)
        .child(render_gender_selector(
            &form.gender,
            focused == FormField::Gender,
            cx,
        ))
        .child(
            div()
                .id("add-patient-submit")
                .mt(px(theme::SPACE_2))
                .py(px(theme::SPACE_2))
                .rounded(px(theme::RADIUS_MD))
                .flex()
                .justify_center()
                .text_color(theme::text_white())
                .when(submitting, |this| this.bg(theme::text_muted()))
                .when(!submitting, |this| {
                    this.bg(theme::brand())
                        .hover(|style| style.bg(theme::brand_hover()))
                        .cursor_pointer()
                        .on_click(cx.listener(|view, _, _, cx| {
                            view.on_add_submit(cx);
                        }))
                })
                .child(if submitting {
                    "Adding..."
                } else {
                    "Add Patient"
                }),
        )
        .into_any_element()
}

fn render_text_input(
    field: FormField,
    value: &str,
    is_focused: bool,
    cx: &mut Context<MainView>,
) -> AnyElement {
    let text = if value.is_empty() {
        field.label().to_string()
    } else if is_focused {
        format!("{value}|")
    } else {
        value.to_string()
    };

    div()
        .id(ElementId::Name(format!("add-{}", field.name()).into()))
        .px(px(theme::SPACE_3))
        .py(px(theme::SPACE_2))
        .min_h(px(36.0))
        .bg(theme::input_bg())
        .rounded(px(theme::RADIUS_MD))
        .border_1()
        .border_color(if is_focused {
            theme::focus_ring()
        } else {
            theme::border()
        })
        .cursor_text()
        .on_click(cx.listener(move |view, _, _, cx| {
            view.on_field_focus(field, cx);
        }))
        .child(
            div()
                .text_size(px(theme::TEXT_BASE))
                .text_color(if value.is_empty() {
                    theme::placeholder()
                } else {
                    theme::text_dark()
                })
                .child(text),
        )
        .into_any_element()
}

fn render_gender_selector(
    gender: &str,
    is_focused: bool,
    cx: &mut Context<MainView>,
) -> AnyElement {
    let position = GENDER_OPTIONS
        .iter()
        .position(|option| *option == gender)
        .unwrap_or(0);

    div()
        .id("add-gender")
        .px(px(theme::SPACE_3))
        .py(px(theme::SPACE_2))
        .bg(theme::input_bg())
        .hover(|style| style.bg(theme::border()))
        .rounded(px(theme::RADIUS_MD))
        .border_1()
        .border_color(if is_focused {
            theme::focus_ring()
        } else {
            theme::border()
        })
        .cursor_pointer()
        .on_click(cx.listener(|view, _, _, cx| {
            view.on_gender_cycle(cx);
        }))
        .child(
            div()
                .flex()
                .justify_between()
                .items_center()
                .child(
                    div()
                        .text_color(if gender.is_empty() {
                            theme::placeholder()
                        } else {
                            theme::text_dark()
                        })
                        .child(if gender.is_empty() {
                            "Select Gender".to_string()
                        } else {
                            gender.to_string()
                        }),
                )
                .child(
                    div()
                        .text_size(px(theme::TEXT_SM))
                        .text_color(theme::text_muted())
                        .child(format!("({}/{})", position + 1, GENDER_OPTIONS.len())),
                ),
        )
        .into_any_element()
}
