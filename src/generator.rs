use crate::aqi::aqi_status;
use crate::config::{LocationDefinition, default_locations};
use crate::models::*;
use chrono::{DateTime, Duration, Local, TimeZone};
use rand::Rng;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Hour label shown on the trend chart, e.g. `02:05 PM`.
pub const TREND_TIME_FORMAT: &str = "%I:%M %p";

/// Uniform draw from `[min, max]`. Panics if `min > max`.
pub fn random_in_range<R>(rng: &mut R, min: i32, max: i32) -> i32
where
    R: Rng + ?Sized,
{
    rng.random_range(min..=max)
}

fn draw<R>(rng: &mut R, range: RangeInclusive<i32>) -> i32
where
    R: Rng + ?Sized,
{
    random_in_range(rng, *range.start(), *range.end())
}

pub fn generate_location_data<R>(
    rng: &mut R,
    name: &str,
    id: &str,
    aqi_bias: i32,
) -> LocationReading
where
    R: Rng + ?Sized,
{
    let base_aqi = draw(rng, LOCATION_BASE_AQI_RANGE);
    let aqi = base_aqi
        .saturating_add(aqi_bias)
        .clamp(*LOCATION_AQI_LIMITS.start(), *LOCATION_AQI_LIMITS.end());
    log::trace!("Location {id}: base aqi {base_aqi}, bias {aqi_bias}, aqi {aqi}");

    LocationReading {
        id: id.to_string(),
        name: name.to_string(),
        aqi,
        temperature: draw(rng, LOCATION_TEMPERATURE_RANGE),
        humidity: draw(rng, LOCATION_HUMIDITY_RANGE),
        pm25: draw(rng, LOCATION_PM25_RANGE),
        pm10: draw(rng, LOCATION_PM10_RANGE),
        o3: draw(rng, LOCATION_O3_RANGE),
        no2: draw(rng, LOCATION_NO2_RANGE),
        status: aqi_status(aqi as f64),
    }
}

/// Hourly points for the 24 hours ending at `now`, oldest first. Every field
/// of every point is an independent draw.
pub fn generate_time_series<R, Tz>(rng: &mut R, now: DateTime<Tz>) -> Vec<TimeSeriesPoint>
where
    R: Rng + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    (0..TREND_POINTS as i64)
        .rev()
        .map(|hours_ago| {
            let time = now.clone() - Duration::hours(hours_ago);
            TimeSeriesPoint {
                time: time.format(TREND_TIME_FORMAT).to_string(),
                aqi: draw(rng, TREND_AQI_RANGE),
                temperature: draw(rng, TREND_TEMPERATURE_RANGE),
                humidity: draw(rng, TREND_HUMIDITY_RANGE),
                pm25: draw(rng, TREND_PM25_RANGE),
                pm10: draw(rng, TREND_PM10_RANGE),
                o3: draw(rng, TREND_O3_RANGE),
                no2: draw(rng, TREND_NO2_RANGE),
            }
        })
        .collect()
}

pub fn generate_all_data_for<R, Tz>(
    rng: &mut R,
    now: DateTime<Tz>,
    location_definitions: &[LocationDefinition],
) -> AnalyticsPayload
where
    R: Rng + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let locations: Vec<LocationReading> = location_definitions
        .iter()
        .map(|definition| {
            generate_location_data(rng, &definition.name, &definition.id, definition.aqi_bias)
        })
        .collect();

    let aqi_trend = generate_time_series(rng, now);

    let pollutant_data = locations.iter().map(PollutantSummary::from).collect();

    log::debug!(
        "Generated {} locations and {} trend points",
        locations.len(),
        aqi_trend.len()
    );
    AnalyticsPayload {
        locations,
        aqi_trend,
        pollutant_data,
    }
}

/// Payload for the four default locations, timestamped with the local clock.
pub fn generate_all_data<R>(rng: &mut R) -> AnalyticsPayload
where
    R: Rng + ?Sized,
{
    generate_all_data_for(rng, Local::now(), &default_locations())
}

pub fn generate_all_data_with_thread_rng() -> AnalyticsPayload {
    let mut rng = rand::rng();
    generate_all_data(&mut rng)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aqi::AqiStatus;
    use chrono::{Timelike, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 14, 30, 0).unwrap()
    }

    fn in_range(value: i32, range: RangeInclusive<i32>) -> bool {
        range.contains(&value)
    }

    #[test]
    fn test_random_in_range_stays_in_bounds_and_covers_ends() {
        let mut rng = seeded();
        let samples: Vec<i32> = (0..2000).map(|_| random_in_range(&mut rng, 3, 9)).collect();
        assert!(samples.iter().all(|value| (3..=9).contains(value)));
        assert!(samples.contains(&3));
        assert!(samples.contains(&9));
    }

    #[test]
    fn test_random_in_range_single_value() {
        let mut rng = seeded();
        for _ in 0..10 {
            assert_eq!(random_in_range(&mut rng, 7, 7), 7);
        }
    }

    #[test]
    #[should_panic]
    fn test_random_in_range_rejects_inverted_bounds() {
        let mut rng = seeded();
        random_in_range(&mut rng, 10, 1);
    }

    #[test]
    fn test_location_fields_in_range() {
        let mut rng = seeded();
        for _ in 0..500 {
            let location = generate_location_data(&mut rng, "Dwarka", "dwarka", 50);
            assert_eq!(location.id, "dwarka");
            assert_eq!(location.name, "Dwarka");
            assert!(in_range(location.aqi, 70..=450));
            assert!(in_range(location.temperature, LOCATION_TEMPERATURE_RANGE));
            assert!(in_range(location.humidity, LOCATION_HUMIDITY_RANGE));
            assert!(in_range(location.pm25, LOCATION_PM25_RANGE));
            assert!(in_range(location.pm10, LOCATION_PM10_RANGE));
            assert!(in_range(location.o3, LOCATION_O3_RANGE));
            assert!(in_range(location.no2, LOCATION_NO2_RANGE));
            assert_eq!(location.status, aqi_status(location.aqi as f64));
        }
    }

    #[test]
    fn test_location_aqi_is_clamped() {
        let mut rng = seeded();
        for _ in 0..50 {
            let low = generate_location_data(&mut rng, "Low", "low", -1000);
            assert_eq!(low.aqi, 0);
            assert_eq!(low.status, AqiStatus::Good);

            let high = generate_location_data(&mut rng, "High", "high", 1000);
            assert_eq!(high.aqi, 500);
            assert_eq!(high.status, AqiStatus::Severe);
        }
    }

    #[test]
    fn test_time_series_shape() {
        let mut rng = seeded();
        let series = generate_time_series(&mut rng, fixed_now());
        assert_eq!(series.len(), TREND_POINTS);
        assert_eq!(series.first().unwrap().time, "03:30 PM");
        assert_eq!(series.last().unwrap().time, "02:30 PM");

        let labels: HashSet<_> = series.iter().map(|point| point.time.clone()).collect();
        assert_eq!(labels.len(), TREND_POINTS);
        for point in &series {
            assert_eq!(point.time.len(), 8, "unexpected label {}", point.time);
            assert_eq!(&point.time[2..3], ":");
            assert!(point.time.ends_with(" AM") || point.time.ends_with(" PM"));
            assert!(in_range(point.aqi, TREND_AQI_RANGE));
            assert!(in_range(point.temperature, TREND_TEMPERATURE_RANGE));
            assert!(in_range(point.humidity, TREND_HUMIDITY_RANGE));
            assert!(in_range(point.pm25, TREND_PM25_RANGE));
            assert!(in_range(point.pm10, TREND_PM10_RANGE));
            assert!(in_range(point.o3, TREND_O3_RANGE));
            assert!(in_range(point.no2, TREND_NO2_RANGE));
        }
    }

    #[test]
    fn test_time_series_hours_are_consecutive() {
        let mut rng = seeded();
        let now = fixed_now();
        let series = generate_time_series(&mut rng, now);
        for (index, point) in series.iter().enumerate() {
            let expected = now - Duration::hours((TREND_POINTS - 1 - index) as i64);
            assert_eq!(point.time, expected.format(TREND_TIME_FORMAT).to_string());
            assert_eq!(expected.minute(), 30);
        }
    }

    #[test]
    fn test_all_data_shape() {
        let mut rng = seeded();
        let payload = generate_all_data(&mut rng);
        let ids: Vec<_> = payload.locations.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["cp", "ig", "dwarka", "gurgaon"]);
        let names: Vec<_> = payload.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Connaught Place", "India Gate", "Dwarka", "Gurgaon"]);
        assert_eq!(payload.aqi_trend.len(), TREND_POINTS);
        assert_eq!(payload.pollutant_data.len(), payload.locations.len());
    }

    #[test]
    fn test_all_data_invariants() {
        let mut rng = seeded();
        for _ in 0..100 {
            let payload = generate_all_data_for(&mut rng, fixed_now(), &default_locations());
            for (location, summary) in payload.locations.iter().zip(&payload.pollutant_data) {
                assert!(in_range(location.aqi, LOCATION_AQI_LIMITS));
                assert_eq!(location.status, aqi_status(location.aqi as f64));
                assert_eq!(summary, &PollutantSummary::from(location));
            }
        }
    }

    #[test]
    fn test_same_seed_gives_same_payload() {
        let first = generate_all_data_for(&mut seeded(), fixed_now(), &default_locations());
        let second = generate_all_data_for(&mut seeded(), fixed_now(), &default_locations());
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_give_different_values() {
        let first = generate_all_data_for(
            &mut StdRng::seed_from_u64(1),
            fixed_now(),
            &default_locations(),
        );
        let second = generate_all_data_for(
            &mut StdRng::seed_from_u64(2),
            fixed_now(),
            &default_locations(),
        );
        assert_eq!(first.locations.len(), second.locations.len());
        assert_eq!(first.aqi_trend.len(), second.aqi_trend.len());
        assert_ne!(first, second);
    }

    #[test]
    fn test_thread_rng_payload_shape() {
        let payload = generate_all_data_with_thread_rng();
        assert_eq!(payload.locations.len(), 4);
        assert_eq!(payload.aqi_trend.len(), TREND_POINTS);
    }

    #[test]
    fn test_custom_locations_keep_order() {
        let definitions = vec![
            LocationDefinition {
                name: "Noida".to_string(),
                id: "noida".to_string(),
                aqi_bias: 10,
            },
            LocationDefinition {
                name: "Rohini".to_string(),
                id: "rohini".to_string(),
                aqi_bias: -10,
            },
        ];
        let payload = generate_all_data_for(&mut seeded(), fixed_now(), &definitions);
        let ids: Vec<_> = payload.locations.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["noida", "rohini"]);
        let names: Vec<_> = payload.pollutant_data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Noida", "Rohini"]);
    }
}
