//! Active tool settings and the dialog seam used to change them.
//!
//! The settings decide what a drag on the canvas produces. They are changed
//! through a [`DialogPresenter`], which the UI layer implements; the core only
//! describes the choice with a [`DialogSpec`] and applies the answer.

use crate::shapes::{ShadingType, ShapeColor, ShapeStyle};
use serde::{Deserialize, Serialize};

/// Kind of leaf shape produced by a draw gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeType {
    #[default]
    Rectangle,
    Ellipse,
    Triangle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 3] = [ShapeType::Rectangle, ShapeType::Ellipse, ShapeType::Triangle];

    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Triangle => "Triangle",
        }
    }
}

/// What a mouse drag does on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseMode {
    #[default]
    Draw,
    Select,
    Move,
}

impl MouseMode {
    pub const ALL: [MouseMode; 3] = [MouseMode::Draw, MouseMode::Select, MouseMode::Move];

    pub fn name(self) -> &'static str {
        match self {
            MouseMode::Draw => "Draw",
            MouseMode::Select => "Select",
            MouseMode::Move => "Move",
        }
    }
}

/// Which tool field a dialog edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolDialog {
    ShapeType,
    PrimaryColor,
    SecondaryColor,
    Shading,
    MouseMode,
}

/// One answer to a tool dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolChoice {
    ShapeType(ShapeType),
    PrimaryColor(ShapeColor),
    SecondaryColor(ShapeColor),
    Shading(ShadingType),
    MouseMode(MouseMode),
}

impl ToolChoice {
    /// Display label of the chosen value.
    pub fn label(&self) -> &'static str {
        match self {
            ToolChoice::ShapeType(t) => t.name(),
            ToolChoice::PrimaryColor(c) | ToolChoice::SecondaryColor(c) => c.name(),
            ToolChoice::Shading(s) => s.name(),
            ToolChoice::MouseMode(m) => m.name(),
        }
    }
}

/// Everything a presenter needs to show a tool dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogSpec {
    pub kind: ToolDialog,
    pub title: &'static str,
    pub message: &'static str,
    /// Offered values, in display order.
    pub options: Vec<ToolChoice>,
    /// Value currently active.
    pub current: ToolChoice,
}

/// UI-side presenter for tool dialogs.
///
/// Returns `None` when the user cancels.
pub trait DialogPresenter {
    fn present(&mut self, dialog: &DialogSpec) -> Option<ToolChoice>;
}

/// The active tool fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub shape_type: ShapeType,
    pub primary_color: ShapeColor,
    pub secondary_color: ShapeColor,
    pub shading: ShadingType,
    pub mouse_mode: MouseMode,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            shape_type: ShapeType::Rectangle,
            primary_color: ShapeColor::Blue,
            secondary_color: ShapeColor::Green,
            shading: ShadingType::Filled,
            mouse_mode: MouseMode::Draw,
        }
    }
}

impl ToolSettings {
    /// Style applied to newly drawn shapes.
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::new(self.primary_color, self.secondary_color, self.shading)
    }

    /// Apply a dialog answer to the matching field.
    pub fn apply(&mut self, choice: ToolChoice) {
        match choice {
            ToolChoice::ShapeType(t) => self.shape_type = t,
            ToolChoice::PrimaryColor(c) => self.primary_color = c,
            ToolChoice::SecondaryColor(c) => self.secondary_color = c,
            ToolChoice::Shading(s) => self.shading = s,
            ToolChoice::MouseMode(m) => self.mouse_mode = m,
        }
    }

    /// Build the dialog for one tool field, pre-selecting the current value.
    pub fn dialog(&self, kind: ToolDialog) -> DialogSpec {
        match kind {
            ToolDialog::ShapeType => DialogSpec {
                kind,
                title: "Shape",
                message: "Select a shape from the menu below:",
                options: ShapeType::ALL.into_iter().map(ToolChoice::ShapeType).collect(),
                current: ToolChoice::ShapeType(self.shape_type),
            },
            ToolDialog::PrimaryColor => DialogSpec {
                kind,
                title: "Primary Color",
                message: "Select a primary color from the menu below:",
                options: ShapeColor::ALL.into_iter().map(ToolChoice::PrimaryColor).collect(),
                current: ToolChoice::PrimaryColor(self.primary_color),
            },
            ToolDialog::SecondaryColor => DialogSpec {
                kind,
                title: "Secondary Color",
                message: "Select a secondary color from the menu below:",
                options: ShapeColor::ALL.into_iter().map(ToolChoice::SecondaryColor).collect(),
                current: ToolChoice::SecondaryColor(self.secondary_color),
            },
            ToolDialog::Shading => DialogSpec {
                kind,
                title: "Shading Type",
                message: "Select a shading type from the menu below:",
                options: ShadingType::ALL.into_iter().map(ToolChoice::Shading).collect(),
                current: ToolChoice::Shading(self.shading),
            },
            ToolDialog::MouseMode => DialogSpec {
                kind,
                title: "Start and End Point Mode",
                message: "Select a mouse mode from the menu below:",
                options: MouseMode::ALL.into_iter().map(ToolChoice::MouseMode).collect(),
                current: ToolChoice::MouseMode(self.mouse_mode),
            },
        }
    }

    /// Show the dialog for `kind` and apply the answer.
    ///
    /// Answers that do not belong to the dialog are ignored. Returns whether a
    /// setting changed.
    pub fn choose(&mut self, kind: ToolDialog, presenter: &mut dyn DialogPresenter) -> bool {
        let dialog = self.dialog(kind);
        let Some(choice) = presenter.present(&dialog) else {
            log::debug!("{} dialog cancelled", dialog.title);
            return false;
        };
        if !dialog.options.contains(&choice) {
            log::warn!("Ignoring {:?} answer to the {} dialog", choice, dialog.title);
            return false;
        }
        let before = *self;
        self.apply(choice);
        log::info!("{}: {}", dialog.title, choice.label());
        before != *self
    }
}
