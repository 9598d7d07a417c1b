use gpui::{IntoElement, ParentElement, Styled, div, prelude::FluentBuilder};
use gpui_component::{ActiveTheme, StyledExt};

/// A labelled form row: a muted caption above the control it describes.
#[derive(Default, IntoElement)]
pub struct FormField {
    label: &'static str,
    child: Option<gpui::AnyElement>,
}

impl FormField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.child = Some(child.into_any_element());
        self
    }
}

impl gpui::RenderOnce for FormField {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .child(self.label)
                    .text_sm()
                    .font_medium()
                    .text_color(cx.theme().muted_foreground),
            )
            .when(self.child.is_some(), |this| this.child(self.child.unwrap()))
    }
}
