use iced::Color;

use crate::api::RatingDistribution;
use crate::charts::{BarChart, BarChartConfig, BarPoint, BarSeries, Orientation};
use crate::format::format_rating;

pub struct RatingDistributionReport;

impl RatingDistributionReport {
    pub fn title() -> &'static str {
        "Rating Distribution"
    }

    pub fn subtitle() -> &'static str {
        "Number of books at each average rating"
    }

    pub fn chart(distribution: &RatingDistribution) -> BarChart {
        let values = distribution
            .buckets()
            .map(|(rating, count)| BarPoint::new(format_rating(rating), count as f32))
            .collect();

        BarChart::new(BarSeries {
            name: "Number of Books".to_string(),
            color: Color::from_rgba(0.16, 0.65, 0.27, 0.7),
            values,
        })
        .with_config(BarChartConfig {
            padding: 32.0,
            label_gutter: 16.0,
            grid_lines: 4,
            orientation: Orientation::Vertical,
            show_legend: true,
            show_values: false,
            x_axis_title: Some("Average Rating".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_become_vertical_bars() {
        let distribution = RatingDistribution {
            ratings: vec![3.5, 4.0, 4.25],
            counts: vec![12, 48, 20],
        };
        let chart = RatingDistributionReport::chart(&distribution);

        let labels: Vec<_> = chart.series().values.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["3.5", "4", "4.25"]);
        assert_eq!(chart.series().values[1].value, 48.0);
        assert_eq!(chart.config().orientation, Orientation::Vertical);
        assert_eq!(chart.config().x_axis_title.as_deref(), Some("Average Rating"));
    }
}
