//! Substring-based classification of JMA weather text into an icon and a
//! card style class. Forecast text is free-form ("晴れ時々くもり",
//! "雨のち晴"), so this matches markers rather than parsing exhaustively.
//! The check order is load-bearing: snow wins over rain, so combined
//! snow-and-rain text always shows the snow icon.

fn has_cloud(text: &str) -> bool {
    text.contains('曇') || text.contains("くもり")
}

/// Emoji icon for a weather description. Total over arbitrary strings;
/// unrecognized text falls back to a sparkle.
pub fn weather_icon(text: &str) -> &'static str {
    if text.contains('雪') {
        return "❄️";
    }
    if text.contains('雨') {
        if text.contains('晴') {
            return "🌦️";
        }
        if has_cloud(text) {
            return "🌧️";
        }
        return "☔";
    }
    if text.contains('晴') && has_cloud(text) {
        return "🌤️";
    }
    if text.contains('晴') {
        return "☀️";
    }
    if has_cloud(text) {
        return "☁️";
    }
    "✨"
}

/// CSS class for a weather card. Cloud is the default.
pub fn weather_class(text: &str) -> &'static str {
    if text.contains('雪') {
        "status-snow"
    } else if text.contains('雨') {
        "status-rain"
    } else if text.contains('晴') {
        "status-sun"
    } else {
        "status-cloud"
    }
}
