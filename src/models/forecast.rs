use crate::config::Config;
use chrono::{DateTime, Timelike};
use serde::Deserialize;

/// One forecast group as published by the JMA bosai endpoint. The document
/// root is an array of these; the first group carries the short-range series
/// the panel displays, the second the weekly outlook (unused here).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForecastGroup {
    #[serde(rename = "timeSeries", default)]
    pub time_series: Vec<TimeSeriesBlock>,
}

/// A group of measurements sharing one timestamp alignment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimeSeriesBlock {
    #[serde(rename = "timeDefines", default)]
    pub time_defines: Vec<String>,
    #[serde(default)]
    pub areas: Vec<AreaSeries>,
}

/// Per-area measurement arrays. Which of these are present depends on the
/// block: the coarse block carries `weathers`, the temperature block `temps`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AreaSeries {
    #[serde(default)]
    pub weathers: Option<Vec<String>>,
    #[serde(default)]
    pub temps: Option<Vec<String>>,
}

/// One point of the hourly temperature chart, derived on every render and
/// never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct TemperaturePoint {
    pub hour_label: String,
    pub temperature: i32,
}

/// The parsed forecast response for one area.
#[derive(Clone, Debug, PartialEq)]
pub struct Forecast {
    groups: Vec<ForecastGroup>,
}

impl Forecast {
    pub fn new(groups: Vec<ForecastGroup>) -> Self {
        Self { groups }
    }

    /// Weather text for today, tomorrow and the day after, in that order.
    /// Returns fewer entries when the document carries fewer; an empty vec
    /// when the coarse series is absent entirely.
    pub fn daily_summaries(&self) -> Vec<String> {
        self.groups
            .first()
            .and_then(|group| group.time_series.first())
            .and_then(|block| block.areas.first())
            .and_then(|area| area.weathers.as_ref())
            .map(|weathers| {
                weathers
                    .iter()
                    .take(Config::FORECAST_DAYS)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Today's hourly temperature series, capped to
    /// [`Config::MAX_CHART_POINTS`] points in timestamp order.
    ///
    /// The temperature block sits at a fixed position among the first
    /// group's time-series blocks. Any structural gap (missing block,
    /// missing arrays, mismatched lengths) yields an empty vec so the chart
    /// degrades to a no-data message instead of failing the panel.
    /// Entries whose temperature does not parse as an integer are dropped.
    pub fn hourly_temperatures(&self) -> Vec<TemperaturePoint> {
        let Some(block) = self
            .groups
            .first()
            .and_then(|group| group.time_series.get(Config::TEMPERATURE_SERIES_INDEX))
        else {
            return Vec::new();
        };

        let Some(temps) = block.areas.first().and_then(|area| area.temps.as_ref()) else {
            return Vec::new();
        };

        if temps.len() != block.time_defines.len() {
            return Vec::new();
        }

        block
            .time_defines
            .iter()
            .zip(temps)
            .filter_map(|(time, temp)| {
                // JMA timestamps carry a +09:00 offset; the hour label uses
                // that local hour.
                let hour = DateTime::parse_from_rfc3339(time).ok()?.hour();
                let temperature = temp.trim().parse::<i32>().ok()?;
                Some(TemperaturePoint {
                    hour_label: format!("{hour}時"),
                    temperature,
                })
            })
            .take(Config::MAX_CHART_POINTS)
            .collect()
    }
}
