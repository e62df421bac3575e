use super::widgets::{spinner, styling};
use super::Frame;
use crate::state::{Hitboxes, State};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "idea reels";

/// Render the title bar and the spin button.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State, hitboxes: &mut Hitboxes) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);
    if inner.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled(format!(" {}", TITLE), styling::banner_style(theme)),
        Span::styled(
            format!(
                "  {}/{} rows",
                state.rows().len(),
                state.catalog().max_rows()
            ),
            styling::muted_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), inner);

    let label = if state.is_spinning() {
        format!(" {} SPINNING ", spinner::frame(state.get_spinner_index()))
    } else {
        " SPIN ".to_string()
    };
    let width = (label.chars().count() as u16).min(inner.width);
    let button = Rect::new(inner.x + inner.width - width, inner.y, width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(label, styling::button_style(theme))),
        button,
    );
    hitboxes.spin = Some(button);
}
