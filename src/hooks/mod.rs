pub mod use_forecast;
