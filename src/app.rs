use yew::prelude::*;

use crate::components::{AreaTabs, ErrorDisplay, Loading, TemperatureChart, WeatherCard};
use crate::hooks::use_forecast::{DataState, use_forecast};
use crate::services::api::Area;

const DAY_LABELS: [&str; 3] = ["今日", "明日", "明後日"];

#[function_component(App)]
pub fn app() -> Html {
    let area = use_state(Area::default);
    let detail_expanded = use_state(|| false);
    let state = use_forecast(*area);

    let on_select = {
        let area = area.clone();
        let detail_expanded = detail_expanded.clone();
        Callback::from(move |selected: Area| {
            // A new selection always collapses the detail chart, so stale
            // temperatures never show against the new area's loading state.
            detail_expanded.set(false);
            area.set(selected);
        })
    };

    let on_toggle = {
        let detail_expanded = detail_expanded.clone();
        Callback::from(move |()| detail_expanded.set(!*detail_expanded))
    };

    // A failed fetch replaces the whole panel; the error view is terminal.
    if let DataState::Error(message) = &*state {
        return html! {
            <div class="weather-container">
                <ErrorDisplay message={message.clone()} />
                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        };
    }

    let body = match &*state {
        DataState::Loading => html! { <Loading /> },
        DataState::Loaded(forecast) => html! {
            <div class="card-container">
                {
                    forecast.daily_summaries().into_iter().enumerate().map(|(index, text)| {
                        let is_today = index == 0;
                        html! {
                            <>
                                <WeatherCard
                                    key={index}
                                    day_label={DAY_LABELS.get(index).copied().unwrap_or_default()}
                                    text={text}
                                    clickable={is_today}
                                    expanded={*detail_expanded}
                                    on_toggle={on_toggle.clone()}
                                />
                                if is_today && *detail_expanded {
                                    <TemperatureChart forecast={forecast.clone()} />
                                }
                            </>
                        }
                    }).collect::<Html>()
                }
            </div>
        },
        // Handled by the early return above
        DataState::Error(_) => Html::default(),
    };

    html! {
        <div class="weather-container">
            <header class="weather-header-container">
                <AreaTabs selected={*area} on_select={on_select} />
                <h2 class="weather-title-main">{format!("{}の天気", area.name())}</h2>
            </header>

            { body }

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
