//! Presentation boundary: what the controller asks the host UI to draw.
//!
//! The host owns the map widget, the workout list and the weather area. It
//! only ever receives plain values; it never touches the store.

use std::io::Write;

use pacemap_weather::WeatherReport;
use pacemap_workouts::{Coordinates, Workout};

use crate::view;

/// Popup options for a workout marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

/// A map marker with an always-open popup
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub workout_id: String,
    pub position: Coordinates,
    pub popup: PopupOptions,
    pub content: String,
}

impl MarkerSpec {
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            workout_id: workout.id().to_string(),
            position: workout.coords(),
            popup: PopupOptions {
                max_width: 250,
                min_width: 100,
                auto_close: false,
                close_on_click: false,
                class_name: format!("{}-popup", workout.kind()),
            },
            content: view::marker_popup_content(workout),
        }
    }
}

/// Host-side rendering surface.
pub trait Presenter {
    /// Add one entry to the workout list.
    fn render_workout(&mut self, workout: &Workout);

    /// Remove every entry from the workout list.
    fn clear_workouts(&mut self);

    /// Center the map.
    fn set_view(&mut self, center: Coordinates, zoom: u8);

    fn add_marker(&mut self, marker: &MarkerSpec);

    /// Remove every marker layer. The map has no single-marker removal.
    fn clear_markers(&mut self);

    /// Show the form and focus the distance input.
    fn show_form(&mut self);

    /// Hide the form and clear its inputs.
    fn hide_form(&mut self);

    /// Swap the cadence and elevation rows.
    fn set_elevation_visible(&mut self, visible: bool);

    fn set_delete_all_visible(&mut self, visible: bool);

    /// Blocking, user-facing warning.
    fn alert(&mut self, message: &str);

    fn show_weather(&mut self, report: &WeatherReport);

    /// Inline text in the weather area.
    fn show_weather_error(&mut self, message: &str);
}

/// Line-oriented presenter for terminals.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Console output failed: {}", e);
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_workout(&mut self, workout: &Workout) {
        let text = view::workout_summary(workout);
        self.line(&text);
    }

    fn clear_workouts(&mut self) {
        self.line("--- workouts ---");
    }

    fn set_view(&mut self, center: Coordinates, zoom: u8) {
        self.line(&format!("map: {}, {} (zoom {})", center.lat, center.lng, zoom));
    }

    fn add_marker(&mut self, marker: &MarkerSpec) {
        self.line(&format!(
            "marker: {} at {}, {}",
            marker.content, marker.position.lat, marker.position.lng
        ));
    }

    fn clear_markers(&mut self) {}

    fn show_form(&mut self) {}

    fn hide_form(&mut self) {}

    fn set_elevation_visible(&mut self, _visible: bool) {}

    fn set_delete_all_visible(&mut self, _visible: bool) {}

    fn alert(&mut self, message: &str) {
        self.line(&format!("! {}", message));
    }

    fn show_weather(&mut self, report: &WeatherReport) {
        let text = view::weather_summary(report);
        self.line(&text);
    }

    fn show_weather_error(&mut self, message: &str) {
        self.line(&format!("weather: {}", message));
    }
}
