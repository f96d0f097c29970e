use std::rc::Rc;
use yew::prelude::*;

use super::slot;
use crate::models::conditions::ConditionsDisplay;
use crate::models::report::SpotReport;

const PLACEHOLDER: &str = "--";

#[derive(Properties, PartialEq)]
pub struct ConditionsPanelProps {
    pub report: Option<Rc<SpotReport>>,
}

/// Current wave, wind and tide readings. Slots keep their ids even before data arrives.
#[function_component(ConditionsPanel)]
pub fn conditions_panel(props: &ConditionsPanelProps) -> Html {
    let conditions = props.report.as_ref().map(|r| &r.conditions);
    let display = conditions.map_or_else(placeholder, |c| c.display());

    let tide_height = |height: Option<f64>| match height {
        Some(h) => html! { <span class="tide-height">{format!(" {h} m")}</span> },
        None => html! {},
    };

    html! {
        <div class="conditions-panel">
            <div class="conditions-grid">
                <div class="conditions-item">
                    <h3>{"Waves"}</h3>
                    <p class="conditions-value" id={slot::WAVE_HEIGHT}>
                        {&display.wave_height}
                    </p>
                    <p id={slot::WAVE_DIRECTION}>{&display.wave_direction}</p>
                    <p id={slot::WAVE_PERIOD}>{&display.wave_period}</p>
                </div>
                <div class="conditions-item">
                    <h3>{"Wind"}</h3>
                    <p class="conditions-value" id={slot::WIND_SPEED}>
                        {&display.wind_speed}
                    </p>
                    <p id={slot::WIND_DIRECTION}>{&display.wind_direction}</p>
                </div>
                <div class="conditions-item">
                    <h3>{"Tides"}</h3>
                    <p>
                        {"Low: "}
                        <span id={slot::LOW_TIDE}>{&display.low_tide}</span>
                        {tide_height(conditions.and_then(|c| c.tide.low.height))}
                    </p>
                    <p>
                        {"High: "}
                        <span id={slot::HIGH_TIDE}>{&display.high_tide}</span>
                        {tide_height(conditions.and_then(|c| c.tide.high.height))}
                    </p>
                </div>
            </div>
            if let Some(stars) = conditions.and_then(|c| c.stars()) {
                <p class="conditions-rating" title="Overall rating">{stars}</p>
            }
            if let Some(updated) = conditions.and_then(|c| c.timestamp.as_deref()) {
                <p class="conditions-updated">{"Measured at "}{updated}</p>
            }
        </div>
    }
}

fn placeholder() -> ConditionsDisplay {
    ConditionsDisplay {
        wave_height: PLACEHOLDER.to_string(),
        wave_direction: PLACEHOLDER.to_string(),
        wave_period: PLACEHOLDER.to_string(),
        wind_speed: PLACEHOLDER.to_string(),
        wind_direction: PLACEHOLDER.to_string(),
        low_tide: PLACEHOLDER.to_string(),
        high_tide: PLACEHOLDER.to_string(),
    }
}
