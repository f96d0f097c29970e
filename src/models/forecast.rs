use crate::config::Config;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of predicted surf quality for a spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    #[serde(rename = "libelle", alias = "label")]
    pub label: String,
    /// Quality score; rendered as stars
    #[serde(
        rename = "note",
        alias = "rating",
        deserialize_with = "deserialize_rating"
    )]
    pub rating: i32,
    #[serde(rename = "hauteur_vague", alias = "wave_height")]
    pub wave_height: f64,
    #[serde(rename = "periode_vague", alias = "wave_period")]
    pub wave_period: f64,
    #[serde(rename = "vitesse_vent", alias = "wind_speed")]
    pub wind_speed: f64,
    #[serde(rename = "direction_vent", alias = "wind_direction")]
    pub wind_direction: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Accepts any JSON number and rounds it to the nearest whole rating.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: f64 = Deserialize::deserialize(deserializer)?;

    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "Invalid rating '{}'",
            value
        )));
    }

    // `as` saturates at the i32 bounds
    Ok(value.round() as i32)
}

/// Number of stars for a rating, clamped to `0..=Config::MAX_RATING`.
pub fn star_count(rating: i32) -> usize {
    rating.clamp(0, Config::MAX_RATING as i32) as usize
}

pub fn stars(rating: i32) -> String {
    Config::STAR_GLYPH.repeat(star_count(rating))
}

impl ForecastEntry {
    pub fn star_count(&self) -> usize {
        star_count(self.rating)
    }

    pub fn stars(&self) -> String {
        stars(self.rating)
    }

    /// "1.5m - 12s"
    pub fn swell_line(&self) -> String {
        format!("{}m - {}s", self.wave_height, self.wave_period)
    }

    /// "15kt NE"
    pub fn wind_line(&self) -> String {
        format!("{}kt {}", self.wind_speed, self.wind_direction)
    }
}
