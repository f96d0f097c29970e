use std::rc::Rc;
use yew::prelude::*;

use crate::models::spot::{Spot, SpotId};
use crate::services::api::fetch_spots;
use wasm_bindgen_futures::spawn_local;

const SPOTS_UNAVAILABLE: &str = "Unable to load surf spots. Check that the API is running.";

#[derive(Clone, PartialEq, Debug)]
pub enum SpotsState {
    Loading,
    Loaded(Rc<Vec<Spot>>),
    Error(String),
}

impl SpotsState {
    /// Returns the spots if they are loaded
    pub fn data(&self) -> Option<&Rc<Vec<Spot>>> {
        match self {
            SpotsState::Loaded(spots) => Some(spots),
            _ => None,
        }
    }

    /// Spot to show before the user picks one
    pub fn first_spot(&self) -> Option<SpotId> {
        self.data().and_then(|spots| spots.first()).map(|spot| spot.id)
    }
}

/// Loads the spot list once, on mount. A failure alerts the user and stops there.
#[hook]
pub fn use_spots() -> UseStateHandle<SpotsState> {
    let state = use_state(|| SpotsState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                gloo::console::log!("Loading spots...");

                match fetch_spots().await {
                    Ok(spots) => {
                        gloo::console::log!(&format!("{} spots loaded", spots.len()));
                        state.set(SpotsState::Loaded(Rc::new(spots)));
                    }
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to load spots: {e}"));
                        gloo::dialogs::alert(SPOTS_UNAVAILABLE);
                        state.set(SpotsState::Error(e.to_string()));
                    }
                }
            });

            || ()
        });
    }

    state
}
