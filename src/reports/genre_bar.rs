use iced::Color;

use crate::api::GenreStat;
use crate::charts::{BarChart, BarChartConfig, BarPoint, BarSeries, Orientation};

pub struct GenreBarReport;

impl GenreBarReport {
    pub fn title() -> &'static str {
        "Top Genres"
    }

    pub fn subtitle() -> &'static str {
        "Most frequent genres across the catalogue"
    }

    pub fn chart(genres: &[GenreStat]) -> BarChart {
        let values = genres
            .iter()
            .map(|stat| BarPoint::new(stat.genre.clone(), stat.count as f32))
            .collect();

        BarChart::new(BarSeries {
            name: "Book Count by Genre".to_string(),
            color: Color::from_rgba(0.0, 0.48, 1.0, 0.7),
            values,
        })
        .with_config(BarChartConfig {
            padding: 24.0,
            label_gutter: 110.0,
            grid_lines: 4,
            orientation: Orientation::Horizontal,
            show_legend: false,
            show_values: true,
            x_axis_title: None,
        })
    }
}
