//! Mock air quality data for dashboard demos: location readings, an hourly
//! trend and AQI severity classification, served as JSON.

pub mod api_routes;
pub mod app;
pub mod aqi;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;

pub use aqi::{AqiBand, AqiStatus, aqi_color, aqi_color_class_name, aqi_status};
pub use generator::{generate_all_data, generate_all_data_with_thread_rng};
pub use models::{AnalyticsPayload, LocationReading, PollutantSummary, TimeSeriesPoint};
