use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::forecast::Forecast;
use crate::services::api::{Area, fetch_forecast_for_area};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<Forecast>),
    Error(String),
}

impl DataState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the forecast if it is loaded
    pub fn forecast(&self) -> Option<&Rc<Forecast>> {
        match self {
            DataState::Loaded(forecast) => Some(forecast),
            _ => None,
        }
    }
}

/// Tracks which fetch is the latest one issued for the panel. Each fetch
/// takes a token from [`begin`](Self::begin) and must check
/// [`is_current`](Self::is_current) before writing its result into state;
/// a fetch superseded by a newer area selection discards its result.
#[derive(Debug, Default)]
pub struct FetchGeneration(Cell<u64>);

impl FetchGeneration {
    /// Starts a new fetch, superseding all earlier ones, and returns its token.
    pub fn begin(&self) -> u64 {
        let token = self.0.get() + 1;
        self.0.set(token);
        token
    }

    /// True while no newer fetch has been started.
    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[hook]
pub fn use_forecast(area: Area) -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);
    let generation = use_memo((), |_| FetchGeneration::default());

    {
        let state = state.clone();
        let generation = generation.clone();

        use_effect_with(area, move |area| {
            let area = *area;
            let token = generation.begin();

            // Drop the previous document before the new fetch resolves so
            // stale cards never render against the new selection.
            state.set(DataState::Loading);

            spawn_local(async move {
                let result = fetch_forecast_for_area(area).await;

                // Superseded by a newer selection: the result must not
                // touch panel state.
                if !generation.is_current(token) {
                    return;
                }

                match result {
                    Ok(forecast) => state.set(DataState::Loaded(Rc::new(forecast))),
                    Err(e) => state.set(DataState::Error(e.to_string())),
                }
            });

            || () // Cleanup
        });
    }

    state
}
