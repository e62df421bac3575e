//! Clickable regions recorded by the renderer.
//!
//! The terminal has no widget tree to hit-test against, so every frame stores
//! the rectangles of its buttons here and mouse clicks are resolved against
//! the most recent frame.

use ratatui::layout::Rect;

/// What a click landed on.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    SpinButton,
    PlusButton,
    RemoveButton(String),
    Row(String),
}

/// Regions of the last rendered frame.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hitboxes {
    pub spin: Option<Rect>,
    pub plus: Option<Rect>,
    pub rows: Vec<RowHitbox>,
}

/// Regions belonging to one row.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHitbox {
    pub name: String,
    pub area: Rect,
    pub remove: Rect,
}

/// Whether the cell at `column`/`row` is inside `rect`.
///
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && u32::from(column) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(row) < u32::from(rect.y) + u32::from(rect.height)
}

impl Hitboxes {
    /// Resolve a click. Buttons take precedence over the row they sit on.
    ///
    pub fn target(&self, column: u16, row: u16) -> Option<ClickTarget> {
        if self.spin.map_or(false, |r| contains(r, column, row)) {
            return Some(ClickTarget::SpinButton);
        }
        if self.plus.map_or(false, |r| contains(r, column, row)) {
            return Some(ClickTarget::PlusButton);
        }
        if let Some(hit) = self.rows.iter().find(|h| contains(h.remove, column, row)) {
            return Some(ClickTarget::RemoveButton(hit.name.clone()));
        }
        self.rows
            .iter()
            .find(|h| contains(h.area, column, row))
            .map(|h| ClickTarget::Row(h.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hitboxes() -> Hitboxes {
        Hitboxes {
            spin: Some(Rect::new(30, 0, 10, 1)),
            plus: Some(Rect::new(0, 12, 5, 1)),
            rows: vec![
                RowHitbox {
                    name: "Theme".to_string(),
                    area: Rect::new(0, 2, 40, 5),
                    remove: Rect::new(36, 2, 3, 1),
                },
                RowHitbox {
                    name: "Genre".to_string(),
                    area: Rect::new(0, 7, 40, 5),
                    remove: Rect::new(36, 7, 3, 1),
                },
            ],
        }
    }

    #[test]
    fn contains_is_exclusive_at_far_edge() {
        let rect = Rect::new(2, 2, 3, 1);
        assert!(contains(rect, 2, 2));
        assert!(contains(rect, 4, 2));
        assert!(!contains(rect, 5, 2));
        assert!(!contains(rect, 2, 3));
        assert!(!contains(Rect::new(0, 0, 0, 0), 0, 0));
    }

    #[test]
    fn resolves_buttons_before_rows() {
        let hitboxes = hitboxes();
        assert_eq!(hitboxes.target(32, 0), Some(ClickTarget::SpinButton));
        assert_eq!(hitboxes.target(1, 12), Some(ClickTarget::PlusButton));
        assert_eq!(
            hitboxes.target(37, 7),
            Some(ClickTarget::RemoveButton("Genre".to_string()))
        );
        assert_eq!(
            hitboxes.target(10, 4),
            Some(ClickTarget::Row("Theme".to_string()))
        );
        assert_eq!(hitboxes.target(10, 20), None);
    }
}
