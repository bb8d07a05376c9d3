//! User actions and their text form.

use kurbo::{Point, Vec2};
use sketchdeck_core::ToolDialog;
use sketchdeck_core::tools::ShapeType;
use thiserror::Error;

/// Errors from reading an action line.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Expected {expected} arguments for {command}, got {got}")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Not a number: {0}")]
    InvalidNumber(String),
    #[error("Unknown {what}: {value}")]
    InvalidChoice { what: &'static str, value: String },
}

/// Actions that can be triggered from the console or a shortcut.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Draw a shape of the given type between two corners.
    Draw(ShapeType, Point, Point),
    /// Drag from one point to another using the current mouse mode.
    Drag(Point, Point),
    SelectAll,
    ClearSelection,
    /// Select the topmost shape at a point.
    SelectAt(Point),
    /// Move selected shapes.
    Move(Vec2),
    Group,
    Ungroup,
    Copy,
    Cut,
    Paste,
    Delete,
    Undo,
    Redo,
    /// Open a tool dialog, optionally answering it up front.
    ChooseTool(ToolDialog, Option<String>),
    /// Print the shapes on the canvas.
    List,
    /// Print available commands and shortcuts.
    Help,
    Quit,
}

impl UiAction {
    /// Parse one console line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let action = match command.to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => draw(ShapeType::Rectangle, "rect", &args)?,
            "ellipse" => draw(ShapeType::Ellipse, "ellipse", &args)?,
            "triangle" => draw(ShapeType::Triangle, "triangle", &args)?,
            "drag" => {
                let [x0, y0, x1, y1] = numbers::<4>("drag", &args)?;
                UiAction::Drag(Point::new(x0, y0), Point::new(x1, y1))
            }
            "select" => match args.as_slice() {
                ["all"] => UiAction::SelectAll,
                ["none"] => UiAction::ClearSelection,
                _ => {
                    let [x, y] = numbers::<2>("select", &args)?;
                    UiAction::SelectAt(Point::new(x, y))
                }
            },
            "move" => {
                let [dx, dy] = numbers::<2>("move", &args)?;
                UiAction::Move(Vec2::new(dx, dy))
            }
            "group" => UiAction::Group,
            "ungroup" => UiAction::Ungroup,
            "copy" => UiAction::Copy,
            "cut" => UiAction::Cut,
            "paste" => UiAction::Paste,
            "delete" | "del" => UiAction::Delete,
            "undo" => UiAction::Undo,
            "redo" => UiAction::Redo,
            "tool" => {
                let Some((&which, rest)) = args.split_first() else {
                    return Err(ParseError::ArgumentCount {
                        command: "tool",
                        expected: 1,
                        got: 0,
                    });
                };
                let dialog = match which.to_ascii_lowercase().as_str() {
                    "shape" => ToolDialog::ShapeType,
                    "primary" => ToolDialog::PrimaryColor,
                    "secondary" => ToolDialog::SecondaryColor,
                    "shading" => ToolDialog::Shading,
                    "mode" => ToolDialog::MouseMode,
                    other => {
                        return Err(ParseError::InvalidChoice {
                            what: "tool",
                            value: other.to_string(),
                        });
                    }
                };
                let answer = (!rest.is_empty()).then(|| rest.join(" "));
                UiAction::ChooseTool(dialog, answer)
            }
            "list" | "ls" => UiAction::List,
            "help" | "?" => UiAction::Help,
            "quit" | "exit" => UiAction::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(action))
    }
}

fn draw(kind: ShapeType, command: &'static str, args: &[&str]) -> Result<UiAction, ParseError> {
    let [x0, y0, x1, y1] = numbers::<4>(command, args)?;
    Ok(UiAction::Draw(kind, Point::new(x0, y0), Point::new(x1, y1)))
}

fn numbers<const N: usize>(command: &'static str, args: &[&str]) -> Result<[f64; N], ParseError> {
    if args.len() != N {
        return Err(ParseError::ArgumentCount {
            command,
            expected: N,
            got: args.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| ParseError::InvalidNumber((*arg).to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draw() {
        assert_eq!(
            UiAction::parse("ellipse 0 0 10 20.5").unwrap(),
            Some(UiAction::Draw(
                ShapeType::Ellipse,
                Point::new(0.0, 0.0),
                Point::new(10.0, 20.5)
            ))
        );
    }

    #[test]
    fn test_parse_select_forms() {
        assert_eq!(UiAction::parse("select all").unwrap(), Some(UiAction::SelectAll));
        assert_eq!(UiAction::parse("select none").unwrap(), Some(UiAction::ClearSelection));
        assert_eq!(
            UiAction::parse("select 3 4").unwrap(),
            Some(UiAction::SelectAt(Point::new(3.0, 4.0)))
        );
    }

    #[test]
    fn test_parse_tool() {
        assert_eq!(
            UiAction::parse("tool primary dark gray").unwrap(),
            Some(UiAction::ChooseTool(
                ToolDialog::PrimaryColor,
                Some("dark gray".to_string())
            ))
        );
        assert_eq!(
            UiAction::parse("TOOL mode").unwrap(),
            Some(UiAction::ChooseTool(ToolDialog::MouseMode, None))
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(UiAction::parse("   ").unwrap(), None);
        assert_eq!(UiAction::parse("# setup").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            UiAction::parse("fly"),
            Err(ParseError::UnknownCommand("fly".to_string()))
        );
        assert_eq!(
            UiAction::parse("move 1"),
            Err(ParseError::ArgumentCount {
                command: "move",
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            UiAction::parse("rect 0 0 x 1"),
            Err(ParseError::InvalidNumber("x".to_string()))
        );
        assert!(matches!(
            UiAction::parse("tool brush"),
            Err(ParseError::InvalidChoice { .. })
        ));
    }
}
