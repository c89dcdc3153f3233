pub mod genre_bar;
pub mod rating_distribution;
