use super::widgets::reel::Reel;
use super::widgets::{spinner, styling};
use super::Frame;
use crate::state::{Hitboxes, RowHitbox, Selector, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Border plus a three line reel.
const ROW_HEIGHT: u16 = 5;
const REMOVE_LABEL: &str = "[x]";
const PLUS_LABEL: &str = "[ + ]";

/// Render every visible row followed by the plus button.
///
pub fn rows(frame: &mut Frame, size: Rect, state: &State, hitboxes: &mut Hitboxes) {
    let count = state.rows().len();
    let can_add = state.can_add_row();

    let mut constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    if can_add {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (index, selector) in state.rows().iter().enumerate() {
        row(frame, chunks[index], state, index, selector, hitboxes);
    }

    if can_add {
        let area = chunks[count];
        let width = (PLUS_LABEL.len() as u16).min(area.width);
        let button = Rect::new(
            area.x + (area.width - width) / 2,
            area.y,
            width,
            area.height.min(1),
        );
        frame.render_widget(
            Paragraph::new(Span::styled(PLUS_LABEL, styling::button_style(state.get_theme()))),
            button,
        );
        hitboxes.plus = Some(button);
    }

    if count == 0 {
        let hint = Paragraph::new(Span::styled(
            "No rows shown. Add one to start spinning.",
            styling::muted_text_style(state.get_theme()),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[chunks.len() - 1]);
    }
}

fn row(
    frame: &mut Frame,
    area: Rect,
    state: &State,
    index: usize,
    selector: &Selector,
    hitboxes: &mut Hitboxes,
) {
    if area.height == 0 {
        return;
    }
    let theme = state.get_theme();
    let selected = index == state.selected_index();

    let mut title = vec![Span::styled(
        format!(" {} ", selector.name()),
        if selected {
            styling::active_block_title_style(theme)
        } else {
            styling::normal_text_style(theme)
        },
    )];
    if selector.is_spinning() {
        // Rows still waiting out their start delay get a dimmed glyph
        let style = if selector.is_waiting(state.now()) {
            styling::muted_text_style(theme)
        } else {
            styling::spinning_text_style(theme)
        };
        title.push(Span::styled(
            format!("{} ", spinner::frame(state.get_spinner_index())),
            style,
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title))
        .border_style(if selected {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current_style = if selector.is_spinning() {
        styling::spinning_text_style(theme)
    } else {
        styling::landed_text_style(theme)
    };
    frame.render_widget(
        Reel::new(selector, selector.transition_progress(state.now()))
            .current_style(current_style)
            .neighbour_style(styling::muted_text_style(theme)),
        inner,
    );

    let width = (REMOVE_LABEL.len() as u16).min(area.width);
    let remove = Rect::new(
        area.x + area.width.saturating_sub(width + 2),
        area.y,
        width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(REMOVE_LABEL, styling::remove_button_style(theme))),
        remove,
    );
    hitboxes.rows.push(RowHitbox {
        name: selector.name().to_string(),
        area,
        remove,
    });
}
