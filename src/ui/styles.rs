//! Palette for the guide screens and the assistant panel.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Browse screens
// =============================================================================

/// App header ("Gebzem").
pub fn brand_style() -> Style {
    Style::default()
        .fg(Color::Indexed(33))
        .add_modifier(Modifier::BOLD)
}

/// Section titles such as "Senin İçin Seçtiklerimiz".
pub fn section_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn business_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Star rating and review count.
pub fn rating_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn muted_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Badge on promoted businesses.
pub fn promoted_badge_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn event_category_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub fn highlight_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Assistant panel
// =============================================================================

pub fn assistant_border_style() -> Style {
    Style::default().fg(Color::Indexed(33))
}

/// User turns, right aligned.
pub fn user_bubble_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Indexed(25))
}

pub fn assistant_bubble_style() -> Style {
    Style::default().fg(Color::White)
}

/// "Yazıyor..." indicator while a reply is pending.
pub fn typing_indicator_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}
