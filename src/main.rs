use my_surf::components::{ConditionsPanel, ForecastList, SpotSelector, Status};
use my_surf::config::Config;
use my_surf::hooks::use_spot_report::use_spot_report;
use my_surf::hooks::use_spots::{SpotsState, use_spots};
use my_surf::models::error::AppError;
use my_surf::models::spot::SpotId;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let spots = use_spots();
    let selected = use_state(|| None::<SpotId>);
    let report = use_spot_report(*selected);

    // Show the first spot as soon as the list arrives
    {
        let selected = selected.clone();
        use_effect_with((*spots).clone(), move |spots| {
            if selected.is_none()
                && let Some(first) = spots.first_spot()
            {
                selected.set(Some(first));
            }
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: SpotId| selected.set(Some(id)))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"MySurf"}</h1>
                {
                    match &*spots {
                        SpotsState::Loading => html! {
                            <p class="spots-loading">{"Loading spots..."}</p>
                        },
                        SpotsState::Loaded(list) => html! {
                            <SpotSelector
                                spots={list.clone()}
                                selected={*selected}
                                on_select={on_select}
                            />
                        },
                        SpotsState::Error(msg) => html! {
                            <div class="status error">
                                <p>{"❌ Spots unavailable: "}{msg}</p>
                            </div>
                        },
                    }
                }
            </header>

            <main class="app-main">
                <Status
                    status={report.status().clone()}
                    has_previous={report.report().is_some()}
                />

                <section class="conditions-section">
                    <h2>{"Current conditions"}</h2>
                    <ConditionsPanel report={report.report().cloned()} />
                </section>

                <section class="forecast-section">
                    <h2>{"Forecast"}</h2>
                    <ForecastList report={report.report().cloned()} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

/// Looks up the element the app is mounted into.
fn mount_root() -> Result<web_sys::Element, AppError> {
    gloo::utils::document()
        .get_element_by_id(Config::ROOT_ELEMENT_ID)
        .ok_or_else(|| AppError::DomMissing(format!("#{}", Config::ROOT_ELEMENT_ID)))
}

fn main() {
    gloo::console::log!("MySurf - starting");

    match mount_root() {
        Ok(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(e) => {
            gloo::console::error!(&format!("{e}, mounting on <body>"));
            yew::Renderer::<App>::new().render();
        }
    }
}
