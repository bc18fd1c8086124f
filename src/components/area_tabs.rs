use yew::prelude::*;

use crate::services::api::Area;

#[derive(Properties, PartialEq)]
pub struct AreaTabsProps {
    pub selected: Area,
    pub on_select: Callback<Area>,
}

/// Area tab strip, one button per registry entry in display order.
#[function_component(AreaTabs)]
pub fn area_tabs(props: &AreaTabsProps) -> Html {
    html! {
        <div class="area-tabs">
            {
                Area::all().iter().map(|area| {
                    let area = *area;
                    let class = if area == props.selected {
                        "area-tab-button active"
                    } else {
                        "area-tab-button"
                    };
                    let onclick = {
                        let callback = props.on_select.clone();
                        Callback::from(move |_| callback.emit(area))
                    };
                    html! {
                        <button key={area.code()} {class} {onclick}>
                            {area.name()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
