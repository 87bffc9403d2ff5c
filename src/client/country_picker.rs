//! src/client/country_picker.rs
//!
//! Searchable country code dropdown. Time is passed in by the caller so the
//! debounce can be driven by any timer.
use crate::countries::{self, Country};
use std::time::{Duration, Instant};

/// Quiet period before a typed query is applied.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    Escape,
    ArrowUp,
    ArrowDown,
    Enter,
}

#[derive(Debug)]
pub struct CountryPicker {
    open: bool,
    query: String,
    pending_since: Option<Instant>,
    composing: bool,
    results: Vec<&'static Country>,
    highlighted: Option<usize>,
}

impl Default for CountryPicker {
    fn default() -> Self {
        Self {
            open: false,
            query: String::new(),
            pending_since: None,
            composing: false,
            results: countries::all().iter().collect(),
            highlighted: None,
        }
    }
}

impl CountryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing forgets the search.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[&'static Country] {
        &self.results
    }

    pub fn highlighted(&self) -> Option<&'static Country> {
        self.highlighted.and_then(|i| self.results.get(i).copied())
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        self.pending_since = Some(now);
    }

    pub fn composition_start(&mut self) {
        self.composing = true;
    }

    pub fn composition_end(&mut self, text: impl Into<String>, now: Instant) {
        self.composing = false;
        self.input(text, now);
    }

    /// When the pending query becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        if self.composing {
            return None;
        }
        self.pending_since.map(|since| since + FILTER_DEBOUNCE)
    }

    /// Applies the pending query once the debounce has elapsed.
    /// Returns whether the results changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(due) if now >= due => {
                self.pending_since = None;
                self.results = countries::filter(&self.query);
                self.highlighted = None;
                true
            }
            _ => false,
        }
    }

    pub fn key(&mut self, key: PickerKey) -> Option<&'static Country> {
        match key {
            PickerKey::Escape => {
                self.close();
                None
            }
            PickerKey::ArrowDown => {
                if !self.results.is_empty() {
                    let last = self.results.len() - 1;
                    self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1).min(last)));
                }
                None
            }
            PickerKey::ArrowUp => {
                self.highlighted = self.highlighted.map(|i| i.saturating_sub(1));
                None
            }
            PickerKey::Enter => {
                let chosen = self.highlighted().or_else(|| self.results.first().copied())?;
                self.close();
                Some(chosen)
            }
        }
    }

    pub fn click_outside(&mut self) {
        if self.open {
            self.close();
        }
    }

    pub fn select(&mut self, iso2: &str) -> Option<&'static Country> {
        let country = countries::find_by_iso2(iso2)?;
        self.close();
        Some(country)
    }
}
