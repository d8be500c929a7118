use serde::{Deserialize, Serialize};

/// Severity band of an AQI value, ordered from best to worst.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiStatus {
    Good,
    Satisfactory,
    #[serde(rename = "Moderately Polluted")]
    ModeratelyPolluted,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

pub const ALL_STATUSES: [AqiStatus; 6] = [
    AqiStatus::Good,
    AqiStatus::Satisfactory,
    AqiStatus::ModeratelyPolluted,
    AqiStatus::Poor,
    AqiStatus::VeryPoor,
    AqiStatus::Severe,
];

impl AqiStatus {
    /// Classify an AQI value. The upper bound of each band is inclusive and
    /// anything above 400 (or NaN) is `Severe`.
    pub fn from_aqi(aqi: f64) -> AqiStatus {
        if aqi <= 50.0 {
            AqiStatus::Good
        } else if aqi <= 100.0 {
            AqiStatus::Satisfactory
        } else if aqi <= 200.0 {
            AqiStatus::ModeratelyPolluted
        } else if aqi <= 300.0 {
            AqiStatus::Poor
        } else if aqi <= 400.0 {
            AqiStatus::VeryPoor
        } else {
            AqiStatus::Severe
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiStatus::Good => "Good",
            AqiStatus::Satisfactory => "Satisfactory",
            AqiStatus::ModeratelyPolluted => "Moderately Polluted",
            AqiStatus::Poor => "Poor",
            AqiStatus::VeryPoor => "Very Poor",
            AqiStatus::Severe => "Severe",
        }
    }

    /// Hex display color used by the dashboard.
    pub fn color(self) -> &'static str {
        match self {
            AqiStatus::Good => "#00E400",
            AqiStatus::Satisfactory => "#FFFF00",
            AqiStatus::ModeratelyPolluted => "#FF7E00",
            AqiStatus::Poor => "#FF0000",
            AqiStatus::VeryPoor => "#99004C",
            AqiStatus::Severe => "#7E0023",
        }
    }

    /// CSS class the dashboard styles the band with.
    pub fn class_name(self) -> &'static str {
        match self {
            AqiStatus::Good => "aqi-good",
            AqiStatus::Satisfactory => "aqi-satisfactory",
            AqiStatus::ModeratelyPolluted => "aqi-moderate",
            AqiStatus::Poor => "aqi-poor",
            AqiStatus::VeryPoor => "aqi-very-poor",
            AqiStatus::Severe => "aqi-severe",
        }
    }
}

impl std::fmt::Display for AqiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the dashboard needs to render a single AQI value.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AqiBand {
    pub aqi: f64,
    pub status: AqiStatus,
    pub label: &'static str,
    pub color: &'static str,
    pub class_name: &'static str,
}

pub fn aqi_band(aqi: f64) -> AqiBand {
    let status = AqiStatus::from_aqi(aqi);
    AqiBand {
        aqi,
        status,
        label: status.label(),
        color: status.color(),
        class_name: status.class_name(),
    }
}

pub fn aqi_status(aqi: f64) -> AqiStatus {
    AqiStatus::from_aqi(aqi)
}

pub fn aqi_color(aqi: f64) -> &'static str {
    AqiStatus::from_aqi(aqi).color()
}

pub fn aqi_color_class_name(aqi: f64) -> &'static str {
    AqiStatus::from_aqi(aqi).class_name()
}
