use crate::aqi::{AqiBand, aqi_band};
use crate::config::LocationDefinition;
use crate::error::ApiError;
use crate::generator::{generate_all_data_for, generate_location_data, generate_time_series};
use crate::models::{AnalyticsPayload, LocationReading, TimeSeriesPoint};
use axum::{
    Router,
    extract::{Json, Path, State},
    routing::get,
};
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::Mutex;

// Anything that goes in here must be a handle or pointer that can be cloned.
#[derive(Clone)]
pub struct AppState {
    pub locations: Arc<Vec<LocationDefinition>>,
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// With a seed every server start replays the same sequence of payloads.
    pub fn new(locations: Vec<LocationDefinition>, seed: Option<u64>) -> AppState {
        let rng = match seed {
            Some(seed) => {
                log::info!("Seeding generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        AppState {
            locations: Arc::new(locations),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/analytics", get(get_analytics))
        .route("/locations", get(get_locations))
        .route("/trend", get(get_trend))
        .route("/aqi/{value}", get(get_aqi_band))
        .with_state(state)
}

async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsPayload> {
    let mut rng = state.rng.lock().await;
    Json(generate_all_data_for(&mut *rng, Local::now(), &state.locations))
}

async fn get_locations(State(state): State<AppState>) -> Json<Vec<LocationReading>> {
    let mut rng = state.rng.lock().await;
    let locations = state
        .locations
        .iter()
        .map(|definition| {
            generate_location_data(
                &mut *rng,
                &definition.name,
                &definition.id,
                definition.aqi_bias,
            )
        })
        .collect();
    Json(locations)
}

async fn get_trend(State(state): State<AppState>) -> Json<Vec<TimeSeriesPoint>> {
    let mut rng = state.rng.lock().await;
    Json(generate_time_series(&mut *rng, Local::now()))
}

async fn get_aqi_band(Path(value): Path<f64>) -> Result<Json<AqiBand>, ApiError> {
    if !value.is_finite() {
        return Err(ApiError::InvalidAqi(value));
    }
    log::trace!("Classifying aqi {}", value);
    Ok(Json(aqi_band(value)))
}
