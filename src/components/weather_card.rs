use yew::prelude::*;

use crate::models::classify::{weather_class, weather_icon};

#[derive(Properties, PartialEq)]
pub struct WeatherCardProps {
    /// Day badge text (今日 / 明日 / 明後日)
    pub day_label: AttrValue,
    /// Raw weather text from the forecast document
    pub text: AttrValue,
    /// Only today's card toggles the temperature detail
    #[prop_or(false)]
    pub clickable: bool,
    #[prop_or(false)]
    pub expanded: bool,
    #[prop_or_default]
    pub on_toggle: Callback<()>,
}

#[function_component(WeatherCard)]
pub fn weather_card(props: &WeatherCardProps) -> Html {
    let text = props.text.to_string();
    let card_class = classes!(
        "weather-card",
        weather_class(&text),
        props.clickable.then_some("clickable"),
    );

    let onclick = {
        let clickable = props.clickable;
        let callback = props.on_toggle.clone();
        Callback::from(move |_| {
            if clickable {
                callback.emit(());
            }
        })
    };

    html! {
        <div class={card_class} {onclick}>
            <div class="day-badge">{&props.day_label}</div>
            <div class="weather-icon">{weather_icon(&text)}</div>
            <p class="weather-text">{&props.text}</p>
            if props.clickable {
                <span class="tap-hint">
                    { if props.expanded { "閉じる" } else { "気温" } }
                </span>
            }
        </div>
    }
}
