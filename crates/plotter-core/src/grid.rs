//! Grid configuration and pointer-to-grid coordinate mapping.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Default cell size in pixels.
pub const DEFAULT_CELL_SIZE: f64 = 24.0;
/// Default number of grid columns.
pub const DEFAULT_COLUMNS: u32 = 16;
/// Default number of grid rows.
pub const DEFAULT_ROWS: u32 = 16;
/// Default horizontal margin, in cells.
pub const DEFAULT_H_MARGIN: f64 = (DEFAULT_COLUMNS / 4) as f64;
/// Default vertical margin, in cells.
pub const DEFAULT_V_MARGIN: f64 = (DEFAULT_ROWS / 4) as f64;

/// Lower bound of the fractional band that snaps to a half cell.
const HALF_SNAP_LOW: f64 = 0.25;
/// Upper bound of the fractional band that snaps to a half cell.
const HALF_SNAP_HIGH: f64 = 0.75;

/// A position in grid-cell units (not pixels).
pub type GridCoordinate = Point;

/// Grid axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Grid geometry for one interaction session.
///
/// The drawable canvas is `columns x rows` cells. The input surface extends
/// it by `h_margin` cells on the left and right and `v_margin` cells on the
/// top and bottom, so pointer input is still tracked just outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of drawable columns (> 0).
    pub columns: u32,
    /// Number of drawable rows (> 0).
    pub rows: u32,
    /// Size of one cell in pixels (> 0).
    pub cell_size: f64,
    /// Horizontal margin in cells (>= 0).
    pub h_margin: f64,
    /// Vertical margin in cells (>= 0).
    pub v_margin: f64,
    /// Snap pointer positions to whole and half cells.
    pub snap_to_grid: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            h_margin: DEFAULT_H_MARGIN,
            v_margin: DEFAULT_V_MARGIN,
            snap_to_grid: false,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the given grid size and default margins.
    pub fn new(columns: u32, rows: u32, cell_size: f64) -> Self {
        Self {
            columns,
            rows,
            cell_size,
            ..Self::default()
        }
    }

    /// Set the horizontal and vertical margins.
    pub fn with_margins(mut self, h_margin: f64, v_margin: f64) -> Self {
        self.h_margin = h_margin;
        self.v_margin = v_margin;
        self
    }

    /// Enable or disable snapping.
    pub fn with_snap(mut self, snap_to_grid: bool) -> Self {
        self.snap_to_grid = snap_to_grid;
        self
    }

    /// Number of drawable cells along an axis.
    pub fn cells(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.columns as f64,
            Axis::Y => self.rows as f64,
        }
    }

    /// Margin along an axis, in cells.
    pub fn margin(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.h_margin,
            Axis::Y => self.v_margin,
        }
    }

    /// Size of the input surface along an axis, margins included, in cells.
    pub fn extent(&self, axis: Axis) -> f64 {
        self.cells(axis) + 2.0 * self.margin(axis)
    }

    /// Check the invariants the mapper relies on.
    pub fn is_valid(&self) -> bool {
        self.columns > 0
            && self.rows > 0
            && self.cell_size.is_finite()
            && self.cell_size > 0.0
            && self.h_margin.is_finite()
            && self.h_margin >= 0.0
            && self.v_margin.is_finite()
            && self.v_margin >= 0.0
    }
}

/// Round a grid unit to the nearest whole or half cell.
///
/// Fractions below 0.25 floor, fractions in `[0.25, 0.75]` land on the half
/// cell, and fractions above 0.75 round up.
pub fn snap_unit(unit: f64) -> f64 {
    let whole = unit.floor();
    let fraction = unit - whole;
    if fraction > HALF_SNAP_HIGH {
        whole + 1.0
    } else if fraction >= HALF_SNAP_LOW {
        whole + 0.5
    } else {
        whole
    }
}

/// Map a pixel offset within the input surface to a grid coordinate component.
///
/// Offsets outside the margin-inclusive surface clamp to its edges, so the
/// result always lies in `[-margin, cells + margin]`. The mapping is total:
/// NaN clamps to the low edge.
pub fn map_to_grid(axis: Axis, pixel_offset: f64, config: &GridConfig) -> f64 {
    debug_assert!(config.cell_size > 0.0, "cell size must be positive");

    let extent = config.extent(axis);
    let unit = pixel_offset / config.cell_size;

    let unit = if unit >= extent {
        extent
    } else if unit <= 0.0 || unit.is_nan() {
        0.0
    } else if config.snap_to_grid {
        snap_unit(unit)
    } else {
        unit
    };

    unit - config.margin(axis)
}

/// Map a pixel position within the input surface to a grid coordinate.
pub fn map_point(pixel: Point, config: &GridConfig) -> GridCoordinate {
    Point::new(
        map_to_grid(Axis::X, pixel.x, config),
        map_to_grid(Axis::Y, pixel.y, config),
    )
}

/// Pixel geometry of the input surface and its drawable canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    /// Total surface width in pixels, margins included.
    pub view_width: f64,
    /// Total surface height in pixels, margins included.
    pub view_height: f64,
    /// Left edge of the drawable canvas in pixels.
    pub canvas_x: f64,
    /// Top edge of the drawable canvas in pixels.
    pub canvas_y: f64,
    /// Drawable canvas width in pixels.
    pub canvas_width: f64,
    /// Drawable canvas height in pixels.
    pub canvas_height: f64,
    columns: u32,
    rows: u32,
    h_margin: f64,
    v_margin: f64,
}

impl SurfaceLayout {
    /// Compute the layout for a configuration.
    pub fn from_config(config: &GridConfig) -> Self {
        let cell = config.cell_size;
        Self {
            view_width: config.extent(Axis::X) * cell,
            view_height: config.extent(Axis::Y) * cell,
            canvas_x: config.h_margin * cell,
            canvas_y: config.v_margin * cell,
            canvas_width: config.cells(Axis::X) * cell,
            canvas_height: config.cells(Axis::Y) * cell,
            columns: config.columns,
            rows: config.rows,
            h_margin: config.h_margin,
            v_margin: config.v_margin,
        }
    }

    /// Total surface size in pixels.
    pub fn view_size(&self) -> Size {
        Size::new(self.view_width, self.view_height)
    }

    /// Drawable canvas rectangle in surface pixels.
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(
            self.canvas_x,
            self.canvas_y,
            self.canvas_x + self.canvas_width,
            self.canvas_y + self.canvas_height,
        )
    }

    /// SVG viewBox of the output canvas, in grid units.
    pub fn output_view_box(&self) -> String {
        format!("0 0 {} {}", self.columns, self.rows)
    }

    /// SVG viewBox of the input canvas, in grid units, margins included.
    pub fn input_view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            -self.h_margin,
            -self.v_margin,
            self.columns as f64 + self.h_margin * 2.0,
            self.rows as f64 + self.v_margin * 2.0,
        )
    }
}
