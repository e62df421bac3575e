use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for the selected row.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for other rows.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for the selected row.
///
pub fn active_block_title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style of the option a row has landed on.
///
pub fn landed_text_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.landed.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style of the option a spinning row shows.
///
pub fn spinning_text_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.spinning.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for neighbouring options and hints.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for clickable buttons.
///
pub fn button_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.button_fg.to_color())
        .bg(theme.button_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the remove button on a row border.
///
pub fn remove_button_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the footer bar.
///
pub fn footer_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.footer_fg.to_color())
        .bg(theme.footer_bg.to_color())
}
