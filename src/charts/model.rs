use iced::{Color, Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub label: String,
    pub value: f32,
}

impl BarPoint {
    pub fn new(label: impl Into<String>, value: f32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: String,
    pub color: Color,
    pub values: Vec<BarPoint>,
}

/// Direction the bars grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartConfig {
    pub padding: f32,
    /// Room reserved beside the category axis for bar labels
    pub label_gutter: f32,
    pub grid_lines: usize,
    pub orientation: Orientation,
    pub show_legend: bool,
    /// Print each bar's value at its tip
    pub show_values: bool,
    pub x_axis_title: Option<String>,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            label_gutter: 0.0,
            grid_lines: 4,
            orientation: Orientation::Vertical,
            show_legend: true,
            show_values: false,
            x_axis_title: None,
        }
    }
}

pub const LEGEND_HEIGHT: f32 = 18.0;
pub const AXIS_TITLE_HEIGHT: f32 = 18.0;
pub const VALUE_LABEL_ROOM: f32 = 48.0;

/// The rectangle bars are drawn in, after padding, legend, gutters and titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    /// `None` when the canvas is too small to hold anything.
    pub fn new(size: Size, config: &BarChartConfig) -> Option<Self> {
        let padding = config.padding;
        let mut area = Self {
            left: padding,
            top: padding,
            right: size.width - padding,
            bottom: size.height - padding,
        };

        if config.show_legend {
            area.top += LEGEND_HEIGHT;
        }
        if config.x_axis_title.is_some() {
            area.bottom -= AXIS_TITLE_HEIGHT;
        }
        match config.orientation {
            Orientation::Vertical => area.bottom -= config.label_gutter,
            Orientation::Horizontal => {
                area.left += config.label_gutter;
                if config.show_values {
                    area.right -= VALUE_LABEL_ROOM;
                }
            }
        }

        (area.width() > 1.0 && area.height() > 1.0).then_some(area)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Length of the axis bars grow along.
    pub fn value_extent(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.height(),
            Orientation::Horizontal => self.width(),
        }
    }

    /// Start and size of the slot for bar `index` along the category axis.
    pub fn band(&self, index: usize, count: usize, orientation: Orientation) -> (f32, f32) {
        let count = count.max(1) as f32;
        match orientation {
            Orientation::Vertical => {
                let extent = self.width() / count;
                (self.left + index as f32 * extent, extent)
            }
            Orientation::Horizontal => {
                let extent = self.height() / count;
                (self.top + index as f32 * extent, extent)
            }
        }
    }

    /// Which bar slot `position` falls in, if any.
    pub fn bar_at(&self, position: Point, count: usize, orientation: Orientation) -> Option<usize> {
        if count == 0
            || position.x < self.left
            || position.x > self.right
            || position.y < self.top
            || position.y > self.bottom
        {
            return None;
        }

        let (offset, extent) = match orientation {
            Orientation::Vertical => (position.x - self.left, self.width() / count as f32),
            Orientation::Horizontal => (position.y - self.top, self.height() / count as f32),
        };
        let index = (offset / extent).floor() as usize;
        Some(index.min(count - 1))
    }
}
