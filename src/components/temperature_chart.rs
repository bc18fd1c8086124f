use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::forecast::{Forecast, TemperaturePoint};

const CHART_ID: &str = "temperature-chart";

#[derive(Properties, PartialEq)]
pub struct TemperatureChartProps {
    pub forecast: Rc<Forecast>,
}

/// Expandable hourly temperature chart shown under today's card.
#[function_component(TemperatureChart)]
pub fn temperature_chart(props: &TemperatureChartProps) -> Html {
    let container_ref = use_node_ref();
    let points = use_memo(props.forecast.clone(), |forecast| {
        forecast.hourly_temperatures()
    });

    {
        let container_ref = container_ref.clone();
        let points = points.clone();

        use_effect_with((points, container_ref), |(points, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                render_chart(&container, points);

                let points = points.clone();
                EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                    render_chart(&container, &points);
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="detail-chart-container">
            <h3 class="detail-chart-title">{"今日の気温推移"}</h3>
            if points.is_empty() {
                <p class="no-data">{"現在、時間ごとの気温データがありません"}</p>
            } else {
                <div class="chart-area" ref={container_ref}>
                    <div id={CHART_ID} />
                </div>
            }
        </div>
    }
}

fn render_chart(container: &HtmlElement, points: &[TemperaturePoint]) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || points.is_empty() {
        return;
    }

    let chart = build_chart(points);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(points: &[TemperaturePoint]) -> CharmingChart {
    let x_data: Vec<String> = points.iter().map(|p| p.hour_label.clone()).collect();
    let y_data: Vec<f64> = points.iter().map(|p| f64::from(p.temperature)).collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("気温")
                .left("center")
                .text_style(TextStyle::new().font_size(14).color("#1f2937")),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("10%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data)
                .axis_label(AxisLabel::new().color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("℃")
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Line::new().data(y_data))
}
