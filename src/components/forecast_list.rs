use std::rc::Rc;
use yew::prelude::*;

use super::slot;
use crate::config::Config;
use crate::models::forecast::ForecastEntry;
use crate::models::report::SpotReport;

#[derive(Properties, PartialEq)]
pub struct ForecastListProps {
    pub report: Option<Rc<SpotReport>>,
}

/// Daily forecast blocks, in the order the API sent them.
#[function_component(ForecastList)]
pub fn forecast_list(props: &ForecastListProps) -> Html {
    let entries: &[ForecastEntry] = props
        .report
        .as_ref()
        .map(|report| report.forecast.as_slice())
        .unwrap_or_default();

    html! {
        <div id={slot::FORECAST} class="forecast-list">
            { entries.iter().map(forecast_day).collect::<Html>() }
        </div>
    }
}

fn forecast_day(entry: &ForecastEntry) -> Html {
    html! {
        <div class="jour">
            <div class="titre-jour">{&entry.label}</div>
            if let Some(date) = entry.date {
                <div class="date-jour">{date.format("%d/%m").to_string()}</div>
            }
            <div class="contenu">
                <span class="stars" title={format!("{}/{}", entry.star_count(), Config::MAX_RATING)}>
                    {entry.stars()}
                </span>
                <br />
                {entry.swell_line()}
                <br />
                {entry.wind_line()}
            </div>
        </div>
    }
}
