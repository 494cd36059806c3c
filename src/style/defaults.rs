use crate::color::{self, Color};

pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const AXIS_LABEL_FONT_SIZE: f32 = 18.0;
pub const AXIS_TICKS_FONT_SIZE: f32 = 14.0;

/// Legend font size is the axis label font size divided by this
pub const LEGEND_SCALE: f32 = 1.5;

pub const LINE_WIDTH: f32 = 2.5;
pub const MARKER_SIZE: f32 = 14.0;
/// Marker edge width relative to the marker size
pub const MARKER_EDGE_RATIO: f32 = 5.0 / 14.0;
pub const MARKER_FACE: Color = color::WHITE;

pub const SERIES_COLOR: Color = color::BLACK;

pub const DPI: f32 = 100.0;

pub const LEGEND_COLS: u32 = 1;
