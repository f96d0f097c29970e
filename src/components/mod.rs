pub mod conditions_panel;
pub mod forecast_list;
pub mod spot_selector;
pub mod status;

pub use conditions_panel::ConditionsPanel;
pub use forecast_list::ForecastList;
pub use spot_selector::SpotSelector;
pub use status::Status;

/// Element ids a host page or stylesheet can rely on.
pub mod slot {
    pub const SPOT_SELECTOR: &str = "selecteur-spot";
    pub const WAVE_HEIGHT: &str = "hauteur-vague";
    pub const WAVE_DIRECTION: &str = "direction-vague";
    pub const WAVE_PERIOD: &str = "periode-vague";
    pub const WIND_SPEED: &str = "force-vent";
    pub const WIND_DIRECTION: &str = "direction-vent";
    pub const LOW_TIDE: &str = "maree-basse";
    pub const HIGH_TIDE: &str = "maree-haute";
    pub const FORECAST: &str = "previsions";
}
