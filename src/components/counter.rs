//! Counter Component
//!
//! A stateful counter with a single increment control. The component
//! creates and exclusively owns its state entity; the observer re-renders
//! it whenever the state commits a change, so the rendered count never
//! goes stale.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::components::primitives::button::Button;
use crate::state::counter_state::CounterState;
use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// Render the count line for the committed state
pub fn counter_text(count: u64) -> String {
    format!("Count: {count}")
}

/// A counter owning one typed state value
pub struct Counter {
    state: Entity<CounterState>,
}

impl Counter {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let state = cx.new(|_| CounterState::new());

        cx.observe(&state, |_this, _state, cx| cx.notify()).detach();

        Self { state }
    }
}

impl Render for Counter {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let count = self.state.read(cx).count();

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .text_color(DemoColors::text_primary())
                    .child(counter_text(count)),
            )
            .child(
                div().flex().child(
                    Button::primary("increment-btn", "Increment").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.state.update(cx, |state, cx| {
                                state.increment();
                                cx.notify();
                            });
                        },
                    )),
                ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_text_reflects_committed_state() {
        assert_eq!(counter_text(0), "Count: 0");
        assert_eq!(counter_text(7), "Count: 7");
    }
}
