//! SketchDeck Render Library
//!
//! Paints an [`ApplicationState`](sketchdeck_core::ApplicationState) through
//! an abstract [`Painter`]. [`SceneRenderer`] is a redraw listener, so
//! subscribing it to the state keeps the surface current.

mod renderer;

pub use renderer::{DrawStrategy, Painter, RenderOptions, SceneRenderer};
