use super::widgets::styling;
use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::HotkeyAction;
use crate::state::State;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

const FOOTER_ACTIONS: &[(HotkeyAction, &str)] = &[
    (HotkeyAction::Spin, "spin all"),
    (HotkeyAction::SpinSelected, "spin row"),
    (HotkeyAction::AddRow, "add"),
    (HotkeyAction::RemoveRow, "remove"),
    (HotkeyAction::SelectNext, "down"),
    (HotkeyAction::SelectPrev, "up"),
    (HotkeyAction::CopyIdea, "copy"),
    (HotkeyAction::ToggleLog, "log"),
    (HotkeyAction::CycleTheme, "theme"),
    (HotkeyAction::Quit, "quit"),
];

/// Render the status message and hotkey hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let style = styling::footer_style(theme);

    let mut spans = vec![];
    if let Some(status) = state.get_status() {
        spans.push(Span::styled(
            format!(" {} ", status),
            style.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("|", style));
    }
    spans.push(Span::styled(
        build_footer_text(state.get_hotkeys(), FOOTER_ACTIONS),
        style,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), size);
}
