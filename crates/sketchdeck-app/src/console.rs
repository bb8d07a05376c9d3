//! Console collaborators: a logging painter and a text dialog presenter.

use kurbo::{BezPath, Shape as _, Stroke};
use peniko::Color;
use sketchdeck_core::{DialogPresenter, DialogSpec, ToolChoice};
use sketchdeck_render::Painter;
use std::io::{BufRead, Write};

/// Painter that logs every draw call at trace level.
#[derive(Debug, Default)]
pub struct LogPainter {
    calls: usize,
}

impl LogPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls issued so far, clears included.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

fn rgba(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

impl Painter for LogPainter {
    fn clear(&mut self, background: Color) {
        self.calls += 1;
        log::trace!("clear {:?}", rgba(background));
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.calls += 1;
        log::trace!("fill {:?} {:?}", path.bounding_box(), rgba(color));
    }

    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.calls += 1;
        let style = if stroke.dash_pattern.is_empty() { "solid" } else { "dashed" };
        log::trace!(
            "stroke {} {:?} width {} {:?}",
            style,
            path.bounding_box(),
            stroke.width,
            rgba(color)
        );
    }
}

/// Match a typed answer against a dialog's options.
///
/// Accepts a 1-based option number or an option label, ignoring case and spaces.
pub fn pick(dialog: &DialogSpec, answer: &str) -> Option<ToolChoice> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| dialog.options.get(i)).copied();
    }
    let wanted = normalize(answer);
    dialog
        .options
        .iter()
        .find(|option| normalize(option.label()) == wanted)
        .copied()
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Answers a dialog with text given up front.
pub struct InlinePresenter<'a>(pub &'a str);

impl DialogPresenter for InlinePresenter<'_> {
    fn present(&mut self, dialog: &DialogSpec) -> Option<ToolChoice> {
        pick(dialog, self.0)
    }
}

/// Prints a dialog and reads the answer from the console.
pub struct ConsolePresenter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> ConsolePresenter<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, dialog: &DialogSpec) -> std::io::Result<String> {
        writeln!(self.output, "{}", dialog.title)?;
        writeln!(self.output, "{}", dialog.message)?;
        for (i, option) in dialog.options.iter().enumerate() {
            let marker = if *option == dialog.current { '*' } else { ' ' };
            writeln!(self.output, " {}{:>2}. {}", marker, i + 1, option.label())?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

impl<R: BufRead, W: Write> DialogPresenter for ConsolePresenter<'_, R, W> {
    fn present(&mut self, dialog: &DialogSpec) -> Option<ToolChoice> {
        let line = match self.prompt(dialog) {
            Ok(line) => line,
            Err(e) => {
                log::error!("Dialog failed: {}", e);
                return None;
            }
        };
        if line.trim().is_empty() {
            return None;
        }
        let choice = pick(dialog, &line);
        if choice.is_none() {
            log::warn!("No option matches {:?}", line.trim());
        }
        choice
    }
}
