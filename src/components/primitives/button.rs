//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::DemoColors;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Outlined button on a light background
    Outline,
    /// Ghost button (transparent)
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                DemoColors::button_primary_bg(),
                DemoColors::button_primary_text(),
                DemoColors::button_primary_hover(),
            ),
            ButtonVariant::Outline => (
                DemoColors::card_bg(),
                DemoColors::text_primary(),
                DemoColors::button_subtle_hover(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                DemoColors::button_ghost_text(),
                DemoColors::button_subtle_hover(),
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(8.0), px(4.0), px(Typography::TEXT_XS)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(Typography::TEXT_SM)),
            ButtonSize::Large => (px(24.0), px(12.0), px(Typography::TEXT_BASE)),
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .cursor_pointer()
            .opacity(opacity)
            .child(self.label);

        if self.variant == ButtonVariant::Outline {
            element = element
                .border_1()
                .border_color(DemoColors::button_outline_border());
        }

        if !self.disabled {
            element = element.hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let button = Button::new("ok-btn", "OK");
        assert_eq!(button.variant, ButtonVariant::Primary);
        assert_eq!(button.size, ButtonSize::Medium);
        assert!(!button.disabled);
    }

    #[test]
    fn test_variant_constructors() {
        assert_eq!(Button::outline("a-btn", "A").variant, ButtonVariant::Outline);
        assert_eq!(Button::ghost("b-btn", "B").variant, ButtonVariant::Ghost);
    }

    #[test]
    fn test_builder_overrides() {
        let button = Button::new("big-btn", "Big")
            .size(ButtonSize::Large)
            .disabled(true);
        assert_eq!(button.size, ButtonSize::Large);
        assert!(button.disabled);
    }
}
