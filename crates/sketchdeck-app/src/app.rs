//! Application shell: reads actions and drives the editor.

use crate::console::{ConsolePresenter, InlinePresenter, LogPainter};
use crate::shortcuts::ShortcutRegistry;
use crate::ui::UiAction;
use sketchdeck_core::{ClipboardStore, DragOutcome, Editor, EditorConfig, Shape};
use sketchdeck_render::SceneRenderer;
use std::io::{self, BufRead, Write};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The SketchDeck console application.
pub struct App {
    editor: Editor,
}

impl App {
    /// Create the app with a clipboard store and a painting listener.
    pub fn new(config: EditorConfig, clipboard: Box<dyn ClipboardStore>) -> Self {
        let mut editor = Editor::with_clipboard(config, clipboard);
        editor.subscribe(Box::new(SceneRenderer::new(LogPainter::new())));
        Self { editor }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Read actions line by line until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "SketchDeck. Type `help` for commands.")?;
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            match UiAction::parse(&line) {
                Ok(Some(action)) => {
                    if self.handle(action, &mut input, &mut output)? == Flow::Quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(output, "{}", e)?,
            }
        }
        log::info!("Exiting SketchDeck");
        Ok(())
    }

    /// Apply one action. Dialogs without an inline answer read from `input`.
    pub fn handle<R: BufRead, W: Write>(
        &mut self,
        action: UiAction,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        match action {
            UiAction::Draw(kind, start, end) => {
                let id = self.editor.draw_shape(kind, start, end);
                writeln!(output, "Drew {} {}", kind.name(), short_id(id))?;
            }
            UiAction::Drag(start, end) => match self.editor.drag(start, end) {
                DragOutcome::Drawn(id) => writeln!(output, "Drew {}", short_id(id))?,
                DragOutcome::Selected(ids) => writeln!(output, "{} selected", ids.len())?,
                DragOutcome::Moved => writeln!(output, "Moved selection")?,
                DragOutcome::Nothing => writeln!(output, "Nothing to move")?,
            },
            UiAction::SelectAll => {
                self.editor.select_all();
                writeln!(output, "{} selected", self.editor.state().selected().len())?;
            }
            UiAction::ClearSelection => {
                self.editor.clear_selection();
                writeln!(output, "Selection cleared")?;
            }
            UiAction::SelectAt(point) => match self.editor.select_at(point) {
                Some(id) => writeln!(output, "Selected {}", short_id(id))?,
                None => writeln!(output, "Nothing there")?,
            },
            UiAction::Move(delta) => {
                if self.editor.move_selected(delta) {
                    writeln!(output, "Moved selection")?;
                } else {
                    writeln!(output, "Nothing to move")?;
                }
            }
            UiAction::Group => {
                if self.editor.group() {
                    writeln!(output, "Grouped")?;
                } else {
                    writeln!(output, "Select at least two shapes to group")?;
                }
            }
            UiAction::Ungroup => {
                let count = self.editor.ungroup();
                writeln!(output, "{} groups ungrouped", count)?;
            }
            UiAction::Copy => match self.editor.copy() {
                Ok(n) => writeln!(output, "Copied {} shapes", n)?,
                Err(e) => writeln!(output, "Copy failed: {}", e)?,
            },
            UiAction::Cut => match self.editor.cut() {
                Ok(n) => writeln!(output, "Cut {} shapes", n)?,
                Err(e) => writeln!(output, "Cut failed: {}", e)?,
            },
            UiAction::Paste => match self.editor.paste() {
                Ok(n) => writeln!(output, "Pasted {} shapes", n)?,
                Err(e) => writeln!(output, "Paste failed: {}", e)?,
            },
            UiAction::Delete => {
                if !self.editor.delete() {
                    writeln!(output, "Nothing selected")?;
                }
            }
            UiAction::Undo => {
                if !self.editor.undo() {
                    writeln!(output, "Nothing to undo")?;
                }
            }
            UiAction::Redo => {
                if !self.editor.redo() {
                    writeln!(output, "Nothing to redo")?;
                }
            }
            UiAction::ChooseTool(dialog, answer) => {
                let changed = match answer {
                    Some(answer) => self
                        .editor
                        .choose_tool(dialog, &mut InlinePresenter(&answer)),
                    None => self
                        .editor
                        .choose_tool(dialog, &mut ConsolePresenter::new(input, output)),
                };
                if !changed {
                    writeln!(output, "Tool unchanged")?;
                }
            }
            UiAction::List => self.list(output)?,
            UiAction::Help => write!(output, "{}", ShortcutRegistry::help_text())?,
            UiAction::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Print the shapes, top-level first, with group children indented.
    fn list<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let state = self.editor.state();
        if state.is_empty() {
            writeln!(output, "(empty canvas)")?;
        }
        for shape in state.shapes().iter() {
            write_shape(output, shape, 0, state.is_selected(shape.id()))?;
        }
        let tools = state.tools();
        writeln!(
            output,
            "tool: {} {} / {} {} [{}]",
            tools.shape_type.name(),
            tools.primary_color.name(),
            tools.secondary_color.name(),
            tools.shading.name(),
            tools.mouse_mode.name()
        )?;
        let history = self.editor.history();
        writeln!(
            output,
            "undo: {} / redo: {}",
            history.undo_description().unwrap_or("-"),
            history.redo_description().unwrap_or("-")
        )
    }
}

fn write_shape<W: Write>(output: &mut W, shape: &Shape, depth: usize, selected: bool) -> io::Result<()> {
    let b = shape.bounds();
    writeln!(
        output,
        "{}{} {} {} ({:.1}, {:.1}) - ({:.1}, {:.1})",
        "  ".repeat(depth),
        if selected { '*' } else { '-' },
        shape.kind_name(),
        short_id(shape.id()),
        b.x0,
        b.y0,
        b.x1,
        b.y1
    )?;
    if let Shape::Group(group) = shape {
        for child in group.children() {
            write_shape(output, child, depth + 1, false)?;
        }
    }
    Ok(())
}

fn short_id(id: sketchdeck_core::ShapeId) -> String {
    id.simple().to_string()[..8].to_string()
}
