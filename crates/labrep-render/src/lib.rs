//! Report layout and rasterization.
//!
//! A [`ReportRenderer`] pairs one [`ReportTemplate`] with a loaded
//! [`Typeface`]. Templates turn a [`labrep_model::Report`] into a [`Layout`]
//! of positioned text and rules; the canvas paints that layout onto an
//! [`image::RgbImage`]. Writing the image to disk is left to the caller.

pub mod canvas;
pub mod error;
pub mod font;
mod glyphs;
pub mod layout;
pub mod renderer;
pub mod templates;
pub mod text;

pub use error::{RenderError, Result};
pub use font::{FontPolicy, FontProfile, OutlineFont, Typeface};
pub use layout::{DrawOp, Layout, ReportTemplate, template_for};
pub use renderer::ReportRenderer;
pub use templates::{SingleColumnTemplate, TwoColumnTemplate};
pub use text::{TextEngine, TextMeasure};
