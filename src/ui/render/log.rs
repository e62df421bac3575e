use super::widgets::styling;
use super::Frame;
use crate::state::State;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the newest captured log entries.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .get_log()
        .tail(visible)
        .into_iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry,
                styling::normal_text_style(theme),
            )))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
