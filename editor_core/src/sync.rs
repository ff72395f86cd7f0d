//! Dual-view synchronization.
//!
//! One canonical HTML string, two projections: the editable surface and the
//! raw source text. `mode` says which projection is authoritative; every view
//! switch and every external value goes through a single reconcile step, and
//! every accepted change leaves through the [`ChangeNotifier`].

use crate::config::SourcePolicy;
use crate::notify::ChangeNotifier;
use crate::sanitize::{contains_active_content, sanitize_html, SanitizeRules};
use crate::surface::EditableSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Editor,
    Source,
}

#[derive(Debug, Clone, Default)]
pub struct DualViewSynchronizer {
    mode: ViewMode,
    source_text: String,
    initialized: bool,
    source_policy: SourcePolicy,
    notifier: ChangeNotifier,
}

impl DualViewSynchronizer {
    pub fn new(source_policy: SourcePolicy) -> Self {
        Self {
            source_policy,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// The canonical string as last exchanged with the owner.
    pub fn canonical(&self) -> &str {
        self.notifier.last().unwrap_or_default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Loads the first value into the surface. Runs once; later values go
    /// through [`Self::on_external_value_change`].
    pub fn initialize<S: EditableSurface>(&mut self, surface: &mut S, value: &str) -> bool {
        if self.initialized {
            log::debug!("editor already initialized, ignoring initial value");
            return false;
        }
        self.initialized = true;
        surface.set_inner_html(value);
        self.source_text = value.to_string();
        self.notifier.acknowledge(value);
        true
    }

    /// Applies a value pushed by the owner. Returns true when a projection changed.
    pub fn on_external_value_change<S: EditableSurface>(
        &mut self,
        surface: &mut S,
        value: &str,
    ) -> bool {
        if !self.initialized {
            return self.initialize(surface, value);
        }
        if self.notifier.last() == Some(value) {
            // Our own notification coming back around: the surface already shows it.
            log::debug!("external value equals last notified value, skipping");
            return false;
        }
        self.notifier.acknowledge(value);
        self.source_text = value.to_string();

        match self.mode {
            ViewMode::Editor => {
                if surface.inner_html() == value {
                    return false;
                }
                surface.set_inner_html(value);
                true
            }
            // The surface is refreshed from the source text on the next switch.
            ViewMode::Source => true,
        }
    }

    /// Switches the authoritative view, returning a value to report if the
    /// switch produced one the owner hasn't seen.
    pub fn switch_view<S: EditableSurface>(
        &mut self,
        surface: &mut S,
        target: ViewMode,
    ) -> Option<String> {
        if target == self.mode {
            return None;
        }
        self.mode = target;

        match target {
            ViewMode::Source => {
                self.source_text = surface.inner_html();
                self.notifier.publish(&self.source_text)
            }
            ViewMode::Editor => {
                if self.source_text == surface.inner_html() {
                    return self.notifier.publish(&self.source_text);
                }
                let html = self.apply_source_policy(&self.source_text);
                surface.set_inner_html(&html);
                self.source_text = html;
                self.notifier.publish(&self.source_text)
            }
        }
    }

    /// Reads the surface after user input (typing, command, paste, insertion).
    pub fn on_surface_input<S: EditableSurface>(&mut self, surface: &S) -> Option<String> {
        if self.mode != ViewMode::Editor {
            log::debug!("surface input while source view is active, ignoring");
            return None;
        }
        self.source_text = surface.inner_html();
        self.notifier.publish(&self.source_text)
    }

    /// Takes the text typed into the source view.
    pub fn on_source_text_change(&mut self, text: &str) -> Option<String> {
        if self.mode != ViewMode::Source {
            log::debug!("source edit while editor view is active, ignoring");
            return None;
        }
        self.source_text = text.to_string();
        let html = self.apply_source_policy(text);
        self.notifier.publish(&html)
    }

    fn apply_source_policy(&self, text: &str) -> String {
        match self.source_policy {
            SourcePolicy::StripActiveContent if contains_active_content(text) => {
                log::debug!("removing active content from source markup");
                sanitize_html(text, &SanitizeRules::ACTIVE_CONTENT)
            }
            _ => text.to_string(),
        }
    }
}
