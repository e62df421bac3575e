//! Slot-machine reel for a single row.
//!
//! The reel shows the current option on its middle line with the neighbouring
//! options above and below. While a transition is in its first half the whole
//! strip sits one line lower, so the outgoing label is still centered and the
//! incoming one is just entering from below; in the second half the strip
//! moves up and the outgoing label leaves through the top.

use crate::state::Selector;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Placeholder for rows that have never advanced.
///
pub const UNSET: &str = "?";

/// How a reel line should be drawn.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Current,
    Neighbour,
}

/// Compute the text of every reel line, top to bottom.
///
pub fn reel_lines(selector: &Selector, progress: f64, height: u16) -> Vec<Option<(String, Emphasis)>> {
    let height = height as isize;
    let middle = height / 2;
    let mut lines = vec![None; height as usize];

    if selector.current_index().is_none() {
        if height > 0 {
            lines[middle as usize] = Some((UNSET.to_string(), Emphasis::Current));
        }
        return lines;
    }

    let shift = if progress < 0.5 { 1 } else { 0 };
    let len = selector.options().len() as isize;
    // First advance of a row: the outgoing label is the placeholder
    let leaving_unset = shift == 1 && selector.transition().map_or(false, |t| t.from.is_none());
    for (line, slot) in lines.iter_mut().enumerate() {
        let offset = line as isize - middle - shift;
        if leaving_unset && offset < 0 {
            if offset == -1 {
                *slot = Some((UNSET.to_string(), Emphasis::Neighbour));
            }
            continue;
        }
        // Avoid repeating options on reels taller than the option list
        if offset.abs() * 2 >= len.max(2) && offset != 0 {
            continue;
        }
        if let Some(text) = selector.option_at_offset(offset) {
            let emphasis = if offset == 0 {
                Emphasis::Current
            } else {
                Emphasis::Neighbour
            };
            *slot = Some((text.to_string(), emphasis));
        }
    }
    lines
}

/// Reel widget drawing one selector.
///
pub struct Reel<'a> {
    selector: &'a Selector,
    progress: f64,
    current_style: Style,
    neighbour_style: Style,
}

impl<'a> Reel<'a> {
    pub fn new(selector: &'a Selector, progress: f64) -> Self {
        Reel {
            selector,
            progress,
            current_style: Style::default(),
            neighbour_style: Style::default(),
        }
    }

    pub fn current_style(mut self, style: Style) -> Self {
        self.current_style = style;
        self
    }

    pub fn neighbour_style(mut self, style: Style) -> Self {
        self.neighbour_style = style;
        self
    }
}

impl Widget for Reel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = reel_lines(self.selector, self.progress, area.height)
            .into_iter()
            .map(|slot| match slot {
                Some((text, Emphasis::Current)) => Line::from(Span::styled(text, self.current_style)),
                Some((text, Emphasis::Neighbour)) => {
                    Line::from(Span::styled(text, self.neighbour_style))
                }
                None => Line::default(),
            })
            .collect();
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn selector(n: usize, advances: usize) -> Selector {
        let options: Vec<String> = (0..n).map(|i| format!("o{}", i)).collect();
        let mut selector = Selector::new("Genre", &options, Duration::from_millis(100));
        let now = Instant::now();
        for _ in 0..advances {
            selector.next(now);
        }
        selector
    }

    fn texts(lines: &[Option<(String, Emphasis)>]) -> Vec<Option<&str>> {
        lines
            .iter()
            .map(|l| l.as_ref().map(|(t, _)| t.as_str()))
            .collect()
    }

    #[test]
    fn unset_reel_shows_placeholder() {
        let lines = reel_lines(&selector(3, 0), 1.0, 3);
        assert_eq!(texts(&lines), vec![None, Some(UNSET), None]);
    }

    #[test]
    fn settled_reel_centers_current_option() {
        let lines = reel_lines(&selector(5, 2), 1.0, 3);
        assert_eq!(texts(&lines), vec![Some("o0"), Some("o1"), Some("o2")]);
        assert_eq!(lines[1].as_ref().unwrap().1, Emphasis::Current);
        assert_eq!(lines[0].as_ref().unwrap().1, Emphasis::Neighbour);
    }

    #[test]
    fn early_transition_keeps_outgoing_label_centered() {
        let lines = reel_lines(&selector(5, 2), 0.2, 3);
        assert_eq!(texts(&lines), vec![Some("o4"), Some("o0"), Some("o1")]);
        assert_eq!(lines[2].as_ref().unwrap().1, Emphasis::Current);
    }

    #[test]
    fn first_advance_leaves_from_placeholder() {
        let lines = reel_lines(&selector(5, 1), 0.2, 3);
        assert_eq!(texts(&lines), vec![None, Some(UNSET), Some("o0")]);
        assert_eq!(lines[2].as_ref().unwrap().1, Emphasis::Current);

        let lines = reel_lines(&selector(5, 1), 0.8, 3);
        assert_eq!(texts(&lines), vec![Some("o4"), Some("o0"), Some("o1")]);
    }

    #[test]
    fn single_option_is_not_repeated() {
        let lines = reel_lines(&selector(1, 1), 1.0, 3);
        assert_eq!(texts(&lines), vec![None, Some("o0"), None]);
    }

    #[test]
    fn renders_into_buffer() {
        let selector = selector(3, 1);
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        Reel::new(&selector, 1.0).render(area, &mut buf);
        let middle: String = (0..area.width)
            .map(|x| buf.get(x, 1).symbol().to_string())
            .collect();
        assert_eq!(middle.trim(), "o0");
    }
}
