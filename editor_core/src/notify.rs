//! Change notification towards the owning form.

/// Remembers the last canonical string reported upward and filters repeats.
#[derive(Debug, Clone, Default)]
pub struct ChangeNotifier {
    last: Option<String>,
}

impl ChangeNotifier {
    /// Returns the string to report, or `None` when it equals the last one.
    pub fn publish(&mut self, html: &str) -> Option<String> {
        if self.last.as_deref() == Some(html) {
            return None;
        }
        self.last = Some(html.to_string());
        Some(html.to_string())
    }

    /// Records a value the owner already knows about (it handed it to us),
    /// so it is neither reported back nor treated as a fresh external change.
    pub fn acknowledge(&mut self, html: &str) {
        self.last = Some(html.to_string());
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
