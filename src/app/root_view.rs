//! Root View - Demo Page Composition
//!
//! Composes the page header, the greeting and counter demo cards, and the
//! benefits summary. Purely compositional: the root view passes literal
//! props down and never reads its children's state.

use gpui::{
    div, prelude::*, px, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::components::counter::Counter;
use crate::components::greeting::Greeting;
use crate::domain::benefit::Benefit;
use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// Names greeted by the demo page, in render order
pub const GREETING_NAMES: [&str; 3] = ["Alice", "Bob", "Charlie"];

/// Top-level view mounted into the application window
pub struct RootView {
    counter: Entity<Counter>,
}

impl RootView {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let counter = cx.new(|cx| Counter::new(cx));

        Self { counter }
    }

    fn render_header(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(Typography::TEXT_3XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(DemoColors::text_primary())
                    .child("Typed Component Demo"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(DemoColors::text_secondary())
                    .child("Stateless and stateful views built from plain typed structs"),
            )
    }

    fn render_section_card(
        &self,
        heading: impl Into<SharedString>,
        heading_color: Rgba,
        description: impl Into<SharedString>,
        body: impl IntoElement,
    ) -> impl IntoElement {
        div()
            .w_full()
            .p_6()
            .bg(DemoColors::card_bg())
            .border_1()
            .border_color(DemoColors::border())
            .rounded_lg()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(heading_color)
                    .child(heading.into()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(DemoColors::text_secondary())
                    .child(description.into()),
            )
            .child(body)
    }

    fn render_greetings(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(GREETING_NAMES.iter().map(|name| Greeting::new(*name)))
    }

    fn render_benefits(&self) -> impl IntoElement {
        div()
            .w_full()
            .p_6()
            .bg(DemoColors::highlight_bg())
            .rounded_lg()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(DemoColors::highlight_heading())
                    .child("Why typed components:"),
            )
            .child(
                div().flex().flex_col().gap_2().children(
                    Benefit::all().iter().map(|benefit| {
                        div()
                            .flex()
                            .gap_2()
                            .text_sm()
                            .text_color(DemoColors::highlight_text())
                            .child(div().child("•"))
                            .child(
                                div()
                                    .child(format!("{}: {}", benefit.title, benefit.detail)),
                            )
                    }),
                ),
            )
    }
}

impl Render for RootView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("root-view")
            .size_full()
            .overflow_y_scroll()
            .bg(DemoColors::background())
            .p_8()
            .flex()
            .flex_col()
            .items_center()
            .child(
                div()
                    .w_full()
                    .max_w(px(896.0))
                    .flex()
                    .flex_col()
                    .gap_8()
                    .child(self.render_header())
                    .child(self.render_section_card(
                        "Stateless component: Greeting",
                        DemoColors::accent_blue(),
                        "The name prop is required by the constructor, so a missing or \
                         mistyped name fails to compile instead of failing at render time.",
                        self.render_greetings(),
                    ))
                    .child(self.render_section_card(
                        "Stateful component: Counter",
                        DemoColors::accent_green(),
                        "The counter owns one typed state value and exposes a single \
                         increment transition.",
                        self.counter.clone(),
                    ))
                    .child(self.render_benefits()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_roster_is_fixed() {
        assert_eq!(GREETING_NAMES, ["Alice", "Bob", "Charlie"]);
    }
}
