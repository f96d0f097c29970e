use super::forecast;
use serde::{Deserialize, Serialize};

/// Current swell reading for a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    /// Height in meters
    #[serde(rename = "hauteur", alias = "height")]
    pub height: f64,
    /// Direction the swell comes from, in degrees
    pub direction: f64,
    pub direction_label: String,
    /// Period in seconds
    #[serde(rename = "periode", alias = "period")]
    pub period: f64,
}

/// Current wind reading for a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Speed in knots
    #[serde(rename = "vitesse", alias = "speed")]
    pub speed: f64,
    /// Direction in degrees
    pub direction: f64,
    pub direction_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TideEvent {
    #[serde(rename = "heure", alias = "time")]
    pub time: String,
    /// Water height in meters, when the backend provides it
    #[serde(rename = "hauteur", alias = "height", default)]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tide {
    #[serde(rename = "basse", alias = "low")]
    pub low: TideEvent,
    #[serde(rename = "haute", alias = "high")]
    pub high: TideEvent,
}

/// Wave, wind and tide snapshot for one spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    #[serde(rename = "vague", alias = "wave")]
    pub wave: Wave,
    #[serde(rename = "vent", alias = "wind")]
    pub wind: Wind,
    #[serde(rename = "maree", alias = "tide")]
    pub tide: Tide,
    /// Overall quality score, when the backend provides it
    #[serde(rename = "note", alias = "rating", default)]
    pub rating: Option<f64>,
    /// Measurement time as sent by the backend
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Text for each conditions display slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionsDisplay {
    pub wave_height: String,
    pub wave_direction: String,
    pub wave_period: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub low_tide: String,
    pub high_tide: String,
}

impl Conditions {
    /// Formats every scalar with its unit suffix.
    pub fn display(&self) -> ConditionsDisplay {
        ConditionsDisplay {
            wave_height: format!("{} m", self.wave.height),
            wave_direction: format_direction(&self.wave.direction_label, self.wave.direction),
            wave_period: format!("{} s", self.wave.period),
            wind_speed: format!("{} kt", self.wind.speed),
            wind_direction: format_direction(&self.wind.direction_label, self.wind.direction),
            low_tide: self.tide.low.time.clone(),
            high_tide: self.tide.high.time.clone(),
        }
    }

    /// Overall rating as stars, rounded to the nearest point.
    pub fn stars(&self) -> Option<String> {
        self.rating
            .filter(|r| r.is_finite())
            .map(|r| forecast::stars(r.round() as i32))
    }
}

fn format_direction(label: &str, degrees: f64) -> String {
    format!("{label} ({degrees}°)")
}
