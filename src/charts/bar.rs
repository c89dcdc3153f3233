use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::model::{BarChartConfig, BarSeries, Orientation, PlotArea};
use crate::format::format_count;

pub struct BarChart {
    cache: Cache,
    series: BarSeries,
    config: BarChartConfig,
}

impl BarChart {
    pub fn new(series: BarSeries) -> Self {
        Self {
            cache: Cache::new(),
            series,
            config: BarChartConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BarChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn series(&self) -> &BarSeries {
        &self.series
    }

    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    /// Largest value, never below 1 so empty or all-zero series still scale.
    pub fn max_value(&self) -> f32 {
        self.series
            .values
            .iter()
            .map(|point| point.value)
            .fold(0.0_f32, f32::max)
            .max(1.0)
    }

    /// Drops the cached geometry so the renderer can free it.
    pub fn destroy(&self) {
        self.cache.clear();
    }

    fn draw_axes(&self, frame: &mut Frame, area: &PlotArea, color: Color) {
        let stroke = Stroke::default().with_width(1.0).with_color(color);
        frame.stroke(
            &Path::line(
                Point::new(area.left, area.bottom),
                Point::new(area.right, area.bottom),
            ),
            stroke,
        );
        frame.stroke(
            &Path::line(
                Point::new(area.left, area.bottom),
                Point::new(area.left, area.top),
            ),
            stroke,
        );
    }

    fn draw_grid(&self, frame: &mut Frame, area: &PlotArea, line: Color, label: Color) {
        if self.config.grid_lines == 0 {
            return;
        }

        let max_value = self.max_value();
        let orientation = self.config.orientation;
        let extent = area.value_extent(orientation);
        let stroke = Stroke::default().with_width(1.0).with_color(line);

        for step in 1..=self.config.grid_lines {
            let fraction = step as f32 / self.config.grid_lines as f32;
            let tick = format_count((max_value * fraction).round() as u64);

            match orientation {
                Orientation::Vertical => {
                    let y = area.bottom - fraction * extent;
                    frame.stroke(
                        &Path::line(Point::new(area.left, y), Point::new(area.right, y)),
                        stroke,
                    );
                    frame.fill_text(Text {
                        content: tick,
                        position: Point::new(area.left - 6.0, y),
                        color: label,
                        size: 10.0.into(),
                        align_x: Horizontal::Right.into(),
                        align_y: Vertical::Center.into(),
                        ..Text::default()
                    });
                }
                Orientation::Horizontal => {
                    let x = area.left + fraction * extent;
                    frame.stroke(
                        &Path::line(Point::new(x, area.top), Point::new(x, area.bottom)),
                        stroke,
                    );
                    frame.fill_text(Text {
                        content: tick,
                        position: Point::new(x, area.bottom + 4.0),
                        color: label,
                        size: 10.0.into(),
                        align_x: Horizontal::Center.into(),
                        ..Text::default()
                    });
                }
            }
        }
    }

    fn draw_bars(&self, frame: &mut Frame, area: &PlotArea, text_color: Color) {
        let values = &self.series.values;
        let count = values.len();
        let max_value = self.max_value();
        let orientation = self.config.orientation;
        let extent = area.value_extent(orientation);

        // Vertical labels thin out once bars get narrower than ~40px.
        let label_every = match orientation {
            Orientation::Vertical => ((count as f32 * 40.0) / area.width()).ceil().max(1.0) as usize,
            Orientation::Horizontal => 1,
        };

        for (index, point) in values.iter().enumerate() {
            let (start, band) = area.band(index, count, orientation);
            let length = (point.value.max(0.0) / max_value) * extent;
            let center = start + band / 2.0;

            match orientation {
                Orientation::Vertical => {
                    let rect = Path::rectangle(
                        Point::new(start + band * 0.1, area.bottom - length),
                        Size::new(band * 0.8, length),
                    );
                    frame.fill(&rect, self.series.color);

                    if index % label_every == 0 {
                        frame.fill_text(Text {
                            content: point.label.clone(),
                            position: Point::new(center, area.bottom + 6.0),
                            color: text_color,
                            size: 11.0.into(),
                            align_x: Horizontal::Center.into(),
                            ..Text::default()
                        });
                    }
                    if self.config.show_values {
                        frame.fill_text(Text {
                            content: format_count(point.value.round() as u64),
                            position: Point::new(center, area.bottom - length - 4.0),
                            color: text_color,
                            size: 10.0.into(),
                            align_x: Horizontal::Center.into(),
                            align_y: Vertical::Bottom.into(),
                            ..Text::default()
                        });
                    }
                }
                Orientation::Horizontal => {
                    let rect = Path::rectangle(
                        Point::new(area.left, start + band * 0.1),
                        Size::new(length, band * 0.8),
                    );
                    frame.fill(&rect, self.series.color);

                    frame.fill_text(Text {
                        content: point.label.clone(),
                        position: Point::new(area.left - 6.0, center),
                        color: text_color,
                        size: 11.0.into(),
                        align_x: Horizontal::Right.into(),
                        align_y: Vertical::Center.into(),
                        ..Text::default()
                    });
                    if self.config.show_values {
                        frame.fill_text(Text {
                            content: format_count(point.value.round() as u64),
                            position: Point::new(area.left + length + 4.0, center),
                            color: text_color,
                            size: 10.0.into(),
                            align_y: Vertical::Center.into(),
                            ..Text::default()
                        });
                    }
                }
            }
        }
    }

    fn draw_titles(&self, frame: &mut Frame, area: &PlotArea, text_color: Color) {
        let size = frame.size();

        if self.config.show_legend {
            let swatch = Path::rectangle(
                Point::new(area.left, self.config.padding),
                Size::new(12.0, 12.0),
            );
            frame.fill(&swatch, self.series.color);
            frame.fill_text(Text {
                content: self.series.name.clone(),
                position: Point::new(area.left + 18.0, self.config.padding + 6.0),
                color: text_color,
                size: 12.0.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
        }

        if let Some(title) = &self.config.x_axis_title {
            frame.fill_text(Text {
                content: title.clone(),
                position: Point::new(
                    (area.left + area.right) / 2.0,
                    size.height - self.config.padding / 2.0,
                ),
                color: text_color,
                size: 12.0.into(),
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
        }
    }
}

impl canvas::Program<crate::message::Message> for BarChart {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<crate::message::Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();
        if self.series.values.is_empty() {
            return geometries;
        }

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = theme.extended_palette();
            let Some(area) = PlotArea::new(frame.size(), &self.config) else {
                return;
            };

            let mut grid = palette.background.weak.color;
            grid.a = 0.35;

            self.draw_grid(frame, &area, grid, palette.background.strong.color);
            self.draw_axes(frame, &area, palette.background.weak.color);
            self.draw_bars(frame, &area, palette.background.base.text);
            self.draw_titles(frame, &area, palette.background.base.text);
        });
        geometries.push(geometry);

        let Some(cursor_pos) = cursor.position_in(bounds) else {
            return geometries;
        };
        let Some(area) = PlotArea::new(bounds.size(), &self.config) else {
            return geometries;
        };

        let count = self.series.values.len();
        if let Some(index) = area.bar_at(cursor_pos, count, self.config.orientation) {
            let palette = theme.extended_palette();
            let point = &self.series.values[index];
            let label = format!(
                "{}: {}",
                point.label,
                format_count(point.value.round() as u64)
            );

            let mut overlay = Frame::new(renderer, bounds.size());
            overlay.fill_text(Text {
                content: label,
                position: Point::new(cursor_pos.x + 8.0, cursor_pos.y - 8.0),
                color: palette.background.base.text,
                size: 12.0.into(),
                ..Text::default()
            });
            geometries.push(overlay.into_geometry());
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
