use crate::config::Config;
use crate::models::error::AppError;
use crate::models::report::{LoadSequencer, LoadTicket, SpotReport};
use crate::models::spot::SpotId;
use crate::services::api::fetch_spot_report;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading(SpotId),
    Ready,
    Failed(String),
}

/// What is on screen for the selected spot, plus the request it is waiting on.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ReportState {
    latest: Option<LoadTicket>,
    report: Option<Rc<SpotReport>>,
    status: LoadStatus,
}

impl ReportState {
    /// Last report that loaded completely, if any
    pub fn report(&self) -> Option<&Rc<SpotReport>> {
        self.report.as_ref()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading(_))
    }

    /// Ticket of the most recent request
    pub fn latest(&self) -> Option<LoadTicket> {
        self.latest
    }
}

pub enum ReportAction {
    Requested(LoadTicket),
    Completed(LoadTicket, Result<SpotReport, AppError>),
}

impl Reducible for ReportState {
    type Action = ReportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ReportAction::Requested(ticket) => {
                if self.latest.is_some_and(|latest| !ticket.supersedes(&latest)) {
                    return self;
                }

                Rc::new(Self {
                    latest: Some(ticket),
                    report: self.report.clone(),
                    status: LoadStatus::Loading(ticket.spot_id()),
                })
            }
            ReportAction::Completed(ticket, result) => {
                // Superseded responses never reach the screen
                if self.latest != Some(ticket) {
                    return self;
                }

                match result {
                    Ok(report) => Rc::new(Self {
                        latest: self.latest,
                        report: Some(Rc::new(report)),
                        status: LoadStatus::Ready,
                    }),
                    Err(e) => Rc::new(Self {
                        latest: self.latest,
                        report: self.report.clone(),
                        status: LoadStatus::Failed(e.to_string()),
                    }),
                }
            }
        }
    }
}

/// Loads conditions and forecast whenever `spot` changes, keeping only the
/// newest request's result.
#[hook]
pub fn use_spot_report(spot: Option<SpotId>) -> UseReducerHandle<ReportState> {
    let state = use_reducer(ReportState::default);
    let sequencer = use_memo((), |_| LoadSequencer::new());
    let trigger = use_state(|| 0u32); // Refresh trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((spot, trigger_value), move |(spot, _)| {
            let aborted = Rc::new(Cell::new(false));

            if let Some(spot_id) = *spot {
                let ticket = sequencer.issue(spot_id);
                state.dispatch(ReportAction::Requested(ticket));

                let aborted_check = aborted.clone();

                spawn_local(async move {
                    gloo::console::log!(&format!("Loading conditions for spot {spot_id}..."));

                    let result = fetch_spot_report(spot_id).await;

                    if !sequencer.is_latest(&ticket) {
                        gloo::console::log!(&format!(
                            "Discarding stale response for spot {spot_id}"
                        ));
                        return;
                    }

                    if let Err(e) = &result {
                        gloo::console::error!(&format!(
                            "Failed to load conditions for spot {spot_id}: {e}"
                        ));
                    }
                    state.dispatch(ReportAction::Completed(ticket, result));

                    // Schedule next refresh if enabled
                    if Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                        TimeoutFuture::new(Config::REFRESH_INTERVAL_MS).await;
                        if !aborted_check.get() {
                            trigger.set(*trigger + 1);
                        }
                    }
                });
            }

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
