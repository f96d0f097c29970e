use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::slot;
use crate::models::spot::{Spot, SpotId, parse_spot_id};

#[derive(Properties, PartialEq)]
pub struct SpotSelectorProps {
    pub spots: Rc<Vec<Spot>>,
    pub selected: Option<SpotId>,
    pub on_select: Callback<SpotId>,
}

/// Spot selector dropdown component
#[function_component(SpotSelector)]
pub fn spot_selector(props: &SpotSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_select.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let value = target.value();
            match parse_spot_id(&value) {
                Some(id) => {
                    gloo::console::log!(&format!("Spot selected: {id}"));
                    callback.emit(id);
                }
                None => gloo::console::warn!(&format!("Ignoring invalid spot value: {value}")),
            }
        })
    };

    html! {
        <select
            id={slot::SPOT_SELECTOR}
            class="spot-selector"
            onchange={on_change}
            aria-label="Select surf spot"
            title="Select surf spot"
        >
            {
                props.spots.iter().map(|spot| {
                    let selected = Some(spot.id) == props.selected;
                    html! {
                        <option key={spot.id} value={spot.option_value()} {selected}>
                            {&spot.name}
                        </option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
