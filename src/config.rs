/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Number of forecast days rendered as cards (today, tomorrow, day after)
    pub const FORECAST_DAYS: usize = 3;

    /// Position of the hourly temperature block within a forecast group's
    /// time-series list, as published by the JMA schema
    pub const TEMPERATURE_SERIES_INDEX: usize = 2;

    /// Maximum number of points plotted on the temperature chart
    pub const MAX_CHART_POINTS: usize = 8;
}
