//! A single category row and its spin choreography.
//!
//! A selector cycles through its options one step at a time while a spin is
//! active. Every advance starts a short transition (the outgoing label leaves
//! upwards while the incoming one enters from below) whose progress the
//! renderer reads back.

use std::time::{Duration, Instant};

/// Shortest time between two advances.
const MIN_STEP: Duration = Duration::from_millis(1);

/// Active spin schedule of a row.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spin {
    pub starts_at: Instant,
    pub stops_at: Instant,
    next_step_at: Instant,
}

/// Label change animation triggered by an advance.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<usize>,
    pub started_at: Instant,
}

/// One visible category row.
///
#[derive(Debug, Clone)]
pub struct Selector {
    name: String,
    options: Vec<String>,
    current_index: Option<usize>,
    step: Duration,
    spin: Option<Spin>,
    transition: Option<Transition>,
}

impl Selector {
    /// Return a row that has not landed on anything yet. Steps shorter than
    /// a millisecond are raised to one.
    ///
    pub fn new(name: &str, options: &[String], step: Duration) -> Self {
        Selector {
            name: name.to_string(),
            options: options.to_vec(),
            current_index: None,
            step: step.max(MIN_STEP),
            spin: None,
            transition: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn spin_schedule(&self) -> Option<&Spin> {
        self.spin.as_ref()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Return the option currently shown, if any.
    ///
    pub fn current(&self) -> Option<&str> {
        self.current_index.map(|i| self.options[i].as_str())
    }

    /// Return the option at `offset` positions from the current one, wrapping
    /// around the list in both directions.
    ///
    pub fn option_at_offset(&self, offset: isize) -> Option<&str> {
        let index = self.current_index? as isize;
        let len = self.options.len() as isize;
        Some(self.options[(index + offset).rem_euclid(len) as usize].as_str())
    }

    /// Whether a spin is scheduled or running.
    ///
    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Whether a spin is scheduled but still waiting for its start delay.
    ///
    pub fn is_waiting(&self, now: Instant) -> bool {
        self.spin.map_or(false, |spin| now < spin.starts_at)
    }

    /// Advance to the next option, starting a transition at `at`.
    ///
    pub fn next(&mut self, at: Instant) {
        let next = match self.current_index {
            None => 0,
            Some(index) => (index + 1) % self.options.len(),
        };
        self.transition = Some(Transition {
            from: self.current_index,
            started_at: at,
        });
        self.current_index = Some(next);
    }

    /// Schedule a spin that starts after `delay` and keeps advancing for
    /// `duration`. A running spin is replaced.
    ///
    pub fn spin(&mut self, now: Instant, delay: Duration, duration: Duration) {
        let starts_at = now + delay;
        self.spin = Some(Spin {
            starts_at,
            stops_at: starts_at + duration,
            next_step_at: starts_at + self.step,
        });
    }

    /// Perform every advance due by `now`. Returns true when the spin landed
    /// during this call.
    ///
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(mut spin) = self.spin else {
            return false;
        };

        while spin.next_step_at <= now && spin.next_step_at <= spin.stops_at {
            let at = spin.next_step_at;
            self.next(at);
            spin.next_step_at = at + self.step;
        }

        if now >= spin.stops_at {
            if self.current_index.is_none() {
                self.next(spin.stops_at);
            }
            self.spin = None;
            true
        } else {
            self.spin = Some(spin);
            false
        }
    }

    /// Return how far the latest transition has progressed, from 0 to 1.
    /// Rows without a transition are fully settled.
    ///
    pub fn transition_progress(&self, now: Instant) -> f64 {
        match self.transition {
            Some(transition) => {
                let elapsed = now.saturating_duration_since(transition.started_at);
                (elapsed.as_secs_f64() / self.step.as_secs_f64()).min(1.0)
            }
            None => 1.0,
        }
    }
}
