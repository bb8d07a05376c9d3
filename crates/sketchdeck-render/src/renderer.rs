//! Scene painting on top of an abstract drawing surface.

use kurbo::{BezPath, Rect, Shape as _, Stroke};
use peniko::Color;
use sketchdeck_core::shapes::{ShadingType, Shape, ShapeStyle};
use sketchdeck_core::{ApplicationState, RedrawListener};

/// A drawing surface.
///
/// Implementations can target a GPU scene, an image buffer or a log.
pub trait Painter {
    /// Erase the surface.
    fn clear(&mut self, background: Color);

    /// Fill a closed path.
    fn fill(&mut self, path: &BezPath, color: Color);

    /// Stroke a path. Dashed strokes carry their pattern in `stroke`.
    fn stroke(&mut self, path: &BezPath, stroke: &Stroke, color: Color);
}

/// How a leaf shape is painted, chosen by its shading mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStrategy {
    /// Interior in the primary color.
    Filled,
    /// Border in the primary color.
    Outline,
    /// Interior in the primary color, border in the secondary color.
    FilledOutline,
}

impl DrawStrategy {
    pub fn for_shading(shading: ShadingType) -> Self {
        match shading {
            ShadingType::Filled => DrawStrategy::Filled,
            ShadingType::Outline => DrawStrategy::Outline,
            ShadingType::FilledOutline => DrawStrategy::FilledOutline,
        }
    }

    /// Paint `path` with `style`.
    pub fn draw<P: Painter + ?Sized>(self, painter: &mut P, path: &BezPath, style: &ShapeStyle) {
        let stroke = Stroke::new(style.stroke_width);
        match self {
            DrawStrategy::Filled => {
                painter.fill(path, style.primary.to_color());
            }
            DrawStrategy::Outline => {
                painter.stroke(path, &stroke, style.primary.to_color());
            }
            DrawStrategy::FilledOutline => {
                painter.fill(path, style.primary.to_color());
                painter.stroke(path, &stroke, style.secondary.to_color());
            }
        }
    }
}

/// Colors and sizes for a scene.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub background_color: Color,
    pub selection_color: Color,
    /// Gap between a selected shape and its dashed outline.
    pub selection_padding: f64,
    pub selection_dash: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgba8(255, 255, 255, 255),
            selection_color: Color::from_rgba8(0, 0, 0, 255),
            selection_padding: 4.0,
            selection_dash: 4.0,
        }
    }
}

/// Repaints the whole scene on every state change.
pub struct SceneRenderer<P: Painter> {
    painter: P,
    options: RenderOptions,
    frames: u64,
}

impl<P: Painter> SceneRenderer<P> {
    pub fn new(painter: P) -> Self {
        Self::with_options(painter, RenderOptions::default())
    }

    pub fn with_options(painter: P, options: RenderOptions) -> Self {
        Self {
            painter,
            options,
            frames: 0,
        }
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    /// Number of frames painted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Clear the surface and paint every shape bottom to top.
    pub fn render(&mut self, state: &ApplicationState) {
        self.painter.clear(self.options.background_color);
        for shape in state.shapes().iter() {
            let selected = state.is_selected(shape.id());
            self.render_shape(shape, selected);
        }
        self.frames += 1;
        log::trace!("Painted frame {} ({} shapes)", self.frames, state.len());
    }

    /// Paint one shape. Children of a selected group are outlined individually.
    fn render_shape(&mut self, shape: &Shape, selected: bool) {
        match shape {
            Shape::Group(group) => {
                for child in group.children() {
                    self.render_shape(child, selected);
                }
            }
            Shape::Rectangle(_) | Shape::Ellipse(_) | Shape::Triangle(_) => {
                if let Some(style) = shape.style() {
                    DrawStrategy::for_shading(style.shading).draw(
                        &mut self.painter,
                        &shape.to_path(),
                        style,
                    );
                }
                if selected {
                    self.render_selection(shape.bounds());
                }
            }
        }
    }

    /// Dashed outline around a selected shape.
    fn render_selection(&mut self, bounds: Rect) {
        let padding = self.options.selection_padding;
        let dash = self.options.selection_dash;
        let outline = bounds.inflate(padding, padding).to_path(0.1);
        let stroke = Stroke::new(1.0).with_dashes(0.0, [dash, dash]);
        self.painter
            .stroke(&outline, &stroke, self.options.selection_color);
    }
}

impl<P: Painter> RedrawListener for SceneRenderer<P> {
    fn redraw(&mut self, state: &ApplicationState) {
        self.render(state);
    }
}
