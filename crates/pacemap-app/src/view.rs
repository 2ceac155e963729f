//! Text for workouts and weather.

use pacemap_weather::WeatherReport;
use pacemap_workouts::{Metrics, Workout};

/// One decimal place, as shown for pace and speed
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

pub fn marker_popup_content(workout: &Workout) -> String {
    format!("{}{}", workout.kind().emoji(), workout.description())
}

/// Plain-text line for terminal output
pub fn workout_summary(workout: &Workout) -> String {
    let detail = match workout.metrics() {
        Metrics::Running { cadence, pace } => {
            format!("{} min/km, {} spm", one_decimal(*pace), cadence)
        }
        Metrics::Cycling {
            elevation_gain,
            speed,
        } => format!("{} km/h, {} m", one_decimal(*speed), elevation_gain),
    };
    format!(
        "[{}] {} {} - {} km, {} min, {}",
        workout.id(),
        workout.kind().emoji(),
        workout.description(),
        workout.distance(),
        workout.duration(),
        detail
    )
}

/// Weather line: condition, day high and night low
pub fn weather_summary(report: &WeatherReport) -> String {
    format!(
        "weather: {} ({}) day {} / night {}",
        report.condition.description(),
        report.icon_path(),
        report.day_temperature(),
        report.night_temperature()
    )
}

/// Inline weather-area text for a failed fetch
pub fn weather_error_text(error: &impl std::fmt::Display) -> String {
    format!("⚠{}", error)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use chrono::{TimeZone, Utc};
    use pacemap_weather::{Location, TemperatureRange, WeatherCondition, WeatherError};
    use pacemap_workouts::Coordinates;

    fn created() -> chrono::DateTime<Utc> {
        Utc.timestamp_millis_opt(1_713_090_600_123).unwrap()
    }

    #[test]
    fn popup_content_has_emoji_prefix() {
        let w = Workout::running(created(), Coordinates::new(1.0, 2.0), 30.0, 5.0, 150);
        assert_eq!(marker_popup_content(&w), format!("🏃‍♂️{}", w.description()));
    }

    #[test]
    fn summary_line() {
        let w = Workout::running(created(), Coordinates::new(1.0, 2.0), 30.0, 5.0, 150);
        let line = workout_summary(&w);
        assert!(line.starts_with("[3090600123]"));
        assert!(line.ends_with("5 km, 30 min, 6.0 min/km, 150 spm"));
    }

    #[test]
    fn weather_lines() {
        let report = WeatherReport {
            code: "ts".to_string(),
            condition: WeatherCondition::Thunderstorm,
            temperature: TemperatureRange { max: 21.0, min: 0.0 },
            location: Location {
                latitude: 0.0,
                longitude: 0.0,
            },
            fetched_at: Utc::now(),
        };
        assert_eq!(
            weather_summary(&report),
            "weather: Thunderstorm (imgs/icon-ts.png) day +21 / night 0"
        );
        assert_eq!(weather_error_text(&WeatherError::Timeout), "⚠Timed out!");
    }
}
