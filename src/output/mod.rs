//! Output renderers (SVG, terminal) and CSV tables.

pub mod csv;
mod svg;
mod terminal;

pub use svg::SvgRenderer;
pub use terminal::TerminalRenderer;
