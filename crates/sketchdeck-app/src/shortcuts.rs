//! Keyboard shortcut registry and documentation.

use crate::ui::UiAction;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    /// Console command the shortcut stands for.
    pub command: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        command: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            command,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// The action this shortcut triggers.
    pub fn action(&self) -> Option<UiAction> {
        UiAction::parse(self.command).ok().flatten()
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("A", true, false, "select all", "Select all shapes"),
            Shortcut::new("Z", true, false, "undo", "Undo"),
            Shortcut::new("Z", true, true, "redo", "Redo"),
            Shortcut::new("Y", true, false, "redo", "Redo"),
            Shortcut::new("G", true, false, "group", "Group selected shapes"),
            Shortcut::new("G", true, true, "ungroup", "Ungroup selected shapes"),
            Shortcut::new("C", true, false, "copy", "Copy shapes"),
            Shortcut::new("X", true, false, "cut", "Cut shapes"),
            Shortcut::new("V", true, false, "paste", "Paste shapes"),
            Shortcut::new("Delete", false, false, "delete", "Delete selected shapes"),
            Shortcut::new("Backspace", false, false, "delete", "Delete selected shapes"),
            Shortcut::new("Escape", false, false, "select none", "Clear selection"),
        ]
    }

    /// Look up the action bound to a key chord.
    pub fn lookup(key: &str, ctrl: bool, shift: bool) -> Option<UiAction> {
        Self::all()
            .into_iter()
            .find(|s| s.key.eq_ignore_ascii_case(key) && s.ctrl == ctrl && s.shift == shift)
            .and_then(|s| s.action())
    }

    /// Console commands and shortcuts, formatted for `help`.
    pub fn help_text() -> String {
        let mut text = String::from("=== Commands ===\n");
        for (usage, description) in COMMANDS {
            text.push_str(&format!("  {:32} {}\n", usage, description));
        }
        text.push_str("\n=== Keyboard Shortcuts ===\n");
        for shortcut in Self::all() {
            text.push_str(&format!("  {:20} {}\n", shortcut.format(), shortcut.description));
        }
        text
    }
}

const COMMANDS: &[(&str, &str)] = &[
    ("rect|ellipse|triangle x0 y0 x1 y1", "Draw a shape"),
    ("drag x0 y0 x1 y1", "Drag using the current mouse mode"),
    ("select all|none|x y", "Change the selection"),
    ("move dx dy", "Move selected shapes"),
    ("group | ungroup", "Group or ungroup"),
    ("copy | cut | paste | delete", "Clipboard and delete"),
    ("undo | redo", "Step through history"),
    ("tool shape|primary|secondary|shading|mode [value]", "Change a tool setting"),
    ("list", "Show shapes"),
    ("help", "Show this text"),
    ("quit", "Exit"),
];
