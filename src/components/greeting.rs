//! Greeting Component
//!
//! A stateless greeting line. The `name` prop is required by the
//! constructor signature, so a missing or non-string name is a compile
//! error at the call site rather than a runtime failure during render.

use gpui::{
    div, prelude::*, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::DemoColors;

/// Render the greeting template for a name
///
/// Pure: identical input always yields identical output.
pub fn greeting_text(name: &str) -> String {
    format!("Hello, {name}!")
}

/// A stateless greeting for one name
#[derive(IntoElement)]
pub struct Greeting {
    name: SharedString,
}

impl Greeting {
    /// Create a new greeting for `name`
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self { name: name.into() }
    }
}

impl RenderOnce for Greeting {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .px_3()
            .py_2()
            .bg(DemoColors::row_bg())
            .rounded_md()
            .text_sm()
            .text_color(DemoColors::text_primary())
            .child(greeting_text(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_template() {
        assert_eq!(greeting_text("Alice"), "Hello, Alice!");
        assert_eq!(greeting_text(""), "Hello, !");
    }

    #[test]
    fn test_greeting_is_pure() {
        assert_eq!(greeting_text("Alice"), greeting_text("Alice"));
    }

    #[test]
    fn test_constructor_stores_the_name() {
        let greeting = Greeting::new("Bob");
        assert_eq!(greeting.name.as_ref(), "Bob");
    }
}
