use crate::hooks::use_spot_report::LoadStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub status: LoadStatus,
    /// Whether older data is still on screen
    #[prop_or(false)]
    pub has_previous: bool,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.status {
        LoadStatus::Idle | LoadStatus::Ready => html! {},
        LoadStatus::Loading(_) => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading conditions..."}</p>
            </div>
        },
        LoadStatus::Failed(msg) => html! {
            <div class="status error" role="alert">
                <p>{"❌ Could not load this spot: "}{msg}</p>
                if props.has_previous {
                    <p class="status-hint">{"Showing the last conditions that loaded."}</p>
                }
            </div>
        },
    }
}
