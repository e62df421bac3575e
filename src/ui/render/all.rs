use super::{footer, header, log, rows, Frame};
use crate::state::{Hitboxes, State};
use ratatui::layout::{Constraint, Direction, Layout};

const HEADER_HEIGHT: u16 = 3;
const LOG_HEIGHT: u16 = 8;
const FOOTER_HEIGHT: u16 = 1;

/// Render the whole screen according to state and record the clickable
/// regions of this frame.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let mut hitboxes = Hitboxes::default();
    header(frame, chunks[0], state, &mut hitboxes);
    rows(frame, chunks[1], state, &mut hitboxes);
    if state.is_log_visible() {
        log(frame, chunks[2], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);
    state.set_hitboxes(hitboxes);
}
