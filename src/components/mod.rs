pub mod area_tabs;
pub mod status;
pub mod temperature_chart;
pub mod weather_card;

pub use area_tabs::AreaTabs;
pub use status::{ErrorDisplay, Loading};
pub use temperature_chart::TemperatureChart;
pub use weather_card::WeatherCard;
