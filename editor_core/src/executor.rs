//! Applies commands and fragments to an editable surface.
//!
//! Both functions are silent no-ops when the surface has no selection; the
//! caller always reads the surface back afterwards and lets the notifier
//! decide whether anything changed.

use crate::command::Command;
use crate::sanitize::Fragment;
use crate::surface::EditableSurface;

/// Runs a platform-backed command on the current selection.
///
/// Returns false for dialog-driven commands (link, image), which only come
/// back here as a fragment through [`insert_fragment`].
pub fn execute<S: EditableSurface>(surface: &mut S, command: &Command) -> bool {
    let Some(platform) = command.platform() else {
        log::debug!("`{command}` needs a dialog, not executing directly");
        return false;
    };
    surface.focus();
    let applied = surface.exec(&platform);
    if !applied {
        log::debug!("`{command}` had no effect");
    }
    applied
}

/// Toolbar toggle state, queried fresh every time.
pub fn is_active<S: EditableSurface>(surface: &S, command: &Command) -> bool {
    if !command.is_toggle() {
        return false;
    }
    command
        .platform()
        .is_some_and(|platform| surface.query_state(&platform))
}

pub fn insert_fragment<S: EditableSurface>(surface: &mut S, fragment: &Fragment) {
    surface.focus();
    match fragment {
        Fragment::Html(html) => surface.insert_html(html),
        Fragment::Text(text) => surface.insert_text(text),
    }
}
