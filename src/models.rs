use crate::aqi::AqiStatus;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const LOCATION_BASE_AQI_RANGE: RangeInclusive<i32> = 20..=400;
pub const LOCATION_AQI_LIMITS: RangeInclusive<i32> = 0..=500;
pub const LOCATION_TEMPERATURE_RANGE: RangeInclusive<i32> = 15..=45;
pub const LOCATION_HUMIDITY_RANGE: RangeInclusive<i32> = 20..=80;
pub const LOCATION_PM25_RANGE: RangeInclusive<i32> = 5..=300;
pub const LOCATION_PM10_RANGE: RangeInclusive<i32> = 10..=500;
pub const LOCATION_O3_RANGE: RangeInclusive<i32> = 10..=300;
pub const LOCATION_NO2_RANGE: RangeInclusive<i32> = 20..=200;

pub const TREND_AQI_RANGE: RangeInclusive<i32> = 30..=350;
pub const TREND_TEMPERATURE_RANGE: RangeInclusive<i32> = 15..=45;
pub const TREND_HUMIDITY_RANGE: RangeInclusive<i32> = 20..=80;
pub const TREND_PM25_RANGE: RangeInclusive<i32> = 5..=250;
pub const TREND_PM10_RANGE: RangeInclusive<i32> = 15..=450;
pub const TREND_O3_RANGE: RangeInclusive<i32> = 10..=250;
pub const TREND_NO2_RANGE: RangeInclusive<i32> = 20..=180;

pub const TREND_POINTS: usize = 24;

/// A single mocked reading for one monitoring location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LocationReading {
    pub id: String,
    pub name: String,
    pub aqi: i32,
    pub temperature: i32,
    pub humidity: i32,
    pub pm25: i32,
    pub pm10: i32,
    pub o3: i32,
    pub no2: i32,
    pub status: AqiStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesPoint {
    pub time: String,
    pub aqi: i32,
    pub temperature: i32,
    pub humidity: i32,
    pub pm25: i32,
    pub pm10: i32,
    pub o3: i32,
    pub no2: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PollutantSummary {
    pub name: String,
    pub pm25: i32,
    pub pm10: i32,
    pub o3: i32,
    pub no2: i32,
}

impl From<&LocationReading> for PollutantSummary {
    fn from(location: &LocationReading) -> Self {
        PollutantSummary {
            name: location.name.clone(),
            pm25: location.pm25,
            pm10: location.pm10,
            o3: location.o3,
            no2: location.no2,
        }
    }
}

/// The full payload the dashboard fetches in one request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPayload {
    pub locations: Vec<LocationReading>,
    pub aqi_trend: Vec<TimeSeriesPoint>,
    pub pollutant_data: Vec<PollutantSummary>,
}
