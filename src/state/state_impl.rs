use super::error::StateError;
use super::hitbox::{ClickTarget, Hitboxes};
use super::selector::Selector;
use crate::config::{Catalog, Category, Hotkeys, SpinSettings};
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use std::time::Instant;

/// Houses data representative of application state.
///
pub struct State {
    catalog: Catalog,
    spin_settings: SpinSettings,
    rows: Vec<Selector>,
    selected: usize,
    rng: StdRng,
    clock: Instant,
    spinner_index: usize,
    hitboxes: Hitboxes,
    theme: Theme,
    hotkeys: Hotkeys,
    log: LogBuffer,
    log_visible: bool,
    status: Option<String>,
}

impl State {
    /// Return a new state showing the catalog's default rows.
    ///
    pub fn new(
        catalog: Catalog,
        spin_settings: SpinSettings,
        theme: Theme,
        hotkeys: Hotkeys,
        log: LogBuffer,
        rng: StdRng,
    ) -> Self {
        let mut state = State {
            catalog,
            spin_settings,
            rows: vec![],
            selected: 0,
            rng,
            clock: Instant::now(),
            spinner_index: 0,
            hitboxes: Hitboxes::default(),
            theme,
            hotkeys,
            log,
            log_visible: false,
            status: None,
        };
        let defaults: Vec<Category> = state.catalog.default_categories().to_vec();
        for category in &defaults {
            state.push_row(category);
        }
        state
    }

    fn push_row(&mut self, category: &Category) {
        let step = self.spin_settings.sample_step(&mut self.rng);
        self.rows
            .push(Selector::new(&category.name, &category.options, step));
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Return the visible rows in display order.
    ///
    pub fn rows(&self) -> &[Selector] {
        &self.rows
    }

    /// Return the visible row with the given name.
    ///
    pub fn row(&self, name: &str) -> Option<&Selector> {
        self.rows.iter().find(|r| r.name() == name)
    }

    fn is_visible(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.name() == name)
    }

    /// Return the first category in display order that is not shown.
    ///
    pub fn next_hidden_category(&self) -> Option<&Category> {
        self.catalog
            .categories()
            .iter()
            .find(|c| !self.is_visible(&c.name))
    }

    /// Whether another row can currently be added.
    ///
    pub fn can_add_row(&self) -> bool {
        self.rows.len() < self.catalog.max_rows() && self.next_hidden_category().is_some()
    }

    /// Show the next hidden category as a new row and return its name.
    ///
    pub fn add_row(&mut self) -> Result<String, StateError> {
        if self.rows.len() >= self.catalog.max_rows() {
            return Err(StateError::RowLimitReached {
                max: self.catalog.max_rows(),
            });
        }
        let category = self
            .next_hidden_category()
            .cloned()
            .ok_or(StateError::NoHiddenCategory)?;
        self.push_row(&category);
        info!("Added row '{}'", category.name);
        Ok(category.name)
    }

    /// Remove the row with the given name and nothing else.
    ///
    pub fn remove_row(&mut self, name: &str) -> Result<(), StateError> {
        let position = self
            .rows
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| StateError::CategoryNotVisible {
                name: name.to_string(),
            })?;
        self.rows.remove(position);
        if position < self.selected || self.selected >= self.rows.len() {
            self.selected = self.selected.saturating_sub(1);
        }
        info!("Removed row '{}'", name);
        Ok(())
    }

    /// Remove the selected row and return its name.
    ///
    pub fn remove_selected_row(&mut self) -> Result<String, StateError> {
        let name = self
            .selected_row()
            .map(|r| r.name().to_string())
            .ok_or(StateError::NoRows)?;
        self.remove_row(&name)?;
        Ok(name)
    }

    /// Spin every visible row, each with its own start delay and duration.
    ///
    pub fn spin_all(&mut self, now: Instant) {
        for row in self.rows.iter_mut() {
            let delay = self.spin_settings.sample_start_delay(&mut self.rng);
            let duration = self.spin_settings.sample_duration(&mut self.rng);
            debug!(
                "Spinning '{}' after {:?} for {:?}",
                row.name(),
                delay,
                duration
            );
            row.spin(now, delay, duration);
        }
        if !self.rows.is_empty() {
            info!("Spinning {} rows", self.rows.len());
        }
    }

    /// Spin a single row.
    ///
    pub fn spin_row(&mut self, name: &str, now: Instant) -> Result<(), StateError> {
        let delay = self.spin_settings.sample_start_delay(&mut self.rng);
        let duration = self.spin_settings.sample_duration(&mut self.rng);
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.name() == name)
            .ok_or_else(|| StateError::CategoryNotVisible {
                name: name.to_string(),
            })?;
        row.spin(now, delay, duration);
        info!("Spinning '{}'", name);
        Ok(())
    }

    /// Spin the selected row.
    ///
    pub fn spin_selected(&mut self, now: Instant) -> Result<(), StateError> {
        let name = self
            .selected_row()
            .map(|r| r.name().to_string())
            .ok_or(StateError::NoRows)?;
        self.spin_row(&name, now)
    }

    /// Advance every spinning row to `now`.
    ///
    pub fn tick(&mut self, now: Instant) {
        self.clock = now;
        let mut spinning = false;
        for row in self.rows.iter_mut() {
            if row.tick(now) {
                info!(
                    "'{}' landed on '{}'",
                    row.name(),
                    row.current().unwrap_or_default()
                );
            }
            spinning |= row.is_spinning();
        }
        if spinning {
            self.advance_spinner_index();
        }
    }

    /// Return the instant of the latest tick.
    ///
    pub fn now(&self) -> Instant {
        self.clock
    }

    /// Whether any row is still spinning.
    ///
    pub fn is_spinning(&self) -> bool {
        self.rows.iter().any(|r| r.is_spinning())
    }

    /// Return each visible category with the option it currently shows.
    ///
    pub fn current_idea(&self) -> Vec<(&str, Option<&str>)> {
        self.rows.iter().map(|r| (r.name(), r.current())).collect()
    }

    /// Render the current idea as a single line.
    ///
    pub fn idea_text(&self) -> String {
        self.current_idea()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value.unwrap_or("?")))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&Selector> {
        self.rows.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1) % self.rows.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
        }
    }

    /// Select the row with the given name.
    ///
    pub fn select_row(&mut self, name: &str) -> Result<(), StateError> {
        self.selected = self
            .rows
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| StateError::CategoryNotVisible {
                name: name.to_string(),
            })?;
        Ok(())
    }

    /// Handle a left click at the given terminal cell using the layout of the
    /// last rendered frame.
    ///
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(target) = self.hitboxes.target(column, row) else {
            return;
        };
        debug!("Click at {},{} on {:?}", column, row, target);
        let result = match target {
            ClickTarget::SpinButton => {
                self.spin_all(now);
                Ok(())
            }
            ClickTarget::PlusButton => self.add_row().map(|name| {
                self.set_status(format!("Added {}", name));
            }),
            ClickTarget::RemoveButton(name) => self.remove_row(&name).map(|_| {
                self.set_status(format!("Removed {}", name));
            }),
            ClickTarget::Row(name) => self.select_row(&name),
        };
        if let Err(e) = result {
            self.report(e);
        }
    }

    /// Show an error in the footer and the log.
    ///
    pub fn report(&mut self, error: StateError) {
        warn!("{}", error);
        self.status = Some(error.to_string());
    }

    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
    }

    pub fn get_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_hitboxes(&mut self, hitboxes: Hitboxes) {
        self.hitboxes = hitboxes;
    }

    pub fn get_hitboxes(&self) -> &Hitboxes {
        &self.hitboxes
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn get_log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next built-in theme and return its name.
    ///
    pub fn cycle_theme(&mut self) -> &str {
        let themes = Theme::available_themes();
        let current = themes
            .iter()
            .position(|name| *name == self.theme.name)
            .unwrap_or(0);
        let next = &themes[(current + 1) % themes.len()];
        if let Some(theme) = Theme::from_name(next) {
            self.theme = theme;
        }
        &self.theme.name
    }

    pub fn get_hotkeys(&self) -> &Hotkeys {
        &self.hotkeys
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn advance_spinner_index(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
    }
}
