//! Application controller.
//!
//! Owns the explicit [`AppState`] and turns user events into store mutations.
//! Every mutation is followed by a full save and a re-render. Weather results
//! arrive as messages and only ever touch the weather display.

use pacemap_core::{AppError, ValidationError};
use pacemap_weather::{Location, LocationError, WeatherReport};
use pacemap_workouts::{Coordinates, Workout, WorkoutPersistence, WorkoutStore};

use crate::error_mapping::IntoAppError;
use crate::form::{self, FormFields, FormState};
use crate::presentation::{MarkerSpec, Presenter};
use crate::services::weather_service::WeatherServiceMessage;
use crate::view;

/// What the weather area currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherDisplay {
    /// No position, so no fetch was started
    #[default]
    Unavailable,
    Loading,
    Ready(WeatherReport),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct AppState {
    pub store: WorkoutStore,
    pub form: FormState,
    /// Set once the position is known and the map is centered
    pub map_ready: bool,
    pub elevation_visible: bool,
    pub weather: WeatherDisplay,
}

pub struct Controller<P: Presenter> {
    state: AppState,
    persistence: WorkoutPersistence,
    presenter: P,
    zoom_level: u8,
}

/// Load saved workouts, render the list and return the controller.
pub fn initialize<P: Presenter>(
    persistence: WorkoutPersistence,
    presenter: P,
    zoom_level: u8,
) -> Controller<P> {
    let store = persistence.load_store();
    tracing::info!("Starting with {} saved workouts", store.len());

    let mut controller = Controller {
        state: AppState {
            store,
            ..AppState::default()
        },
        persistence,
        presenter,
        zoom_level,
    };

    controller.render_list();
    let has_workouts = !controller.state.store.is_empty();
    controller.presenter.set_delete_all_visible(has_workouts);
    controller
}

impl<P: Presenter> Controller<P> {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Apply the geolocation result.
    ///
    /// On success the map is centered, every stored workout gets a marker and
    /// the location is returned so the caller can start the weather fetch.
    /// On failure the user is alerted and neither map nor weather start.
    pub fn on_location(&mut self, result: Result<Location, LocationError>) -> Option<Location> {
        match result {
            Ok(location) => {
                let center = Coordinates::new(location.latitude, location.longitude);
                self.presenter.set_view(center, self.zoom_level);
                self.state.map_ready = true;
                self.render_markers();
                self.state.weather = WeatherDisplay::Loading;
                Some(location)
            }
            Err(e) => {
                tracing::warn!("Position unavailable: {}", e);
                self.report(&e.into_app_error());
                None
            }
        }
    }

    /// A point was picked on the map: show the form for it.
    pub fn on_map_click(&mut self, coords: Coordinates) {
        self.state.form = self.state.form.on_location_pick(coords);
        self.presenter.show_form();
    }

    /// The workout type select changed.
    pub fn on_kind_changed(&mut self) {
        self.state.elevation_visible = !self.state.elevation_visible;
        self.presenter
            .set_elevation_visible(self.state.elevation_visible);
    }

    /// Validate the form and record a new workout.
    ///
    /// Invalid input alerts the user and leaves the form as it was. Returns
    /// the new workout's id.
    pub fn submit(&mut self, fields: &FormFields) -> Result<String, AppError> {
        let Some(coords) = self.state.form.pending() else {
            tracing::debug!("Submit ignored: no location picked");
            return Err(ValidationError::NoPendingLocation.into_app_error());
        };

        let input = match form::validate(fields) {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!("Rejected workout input: {}", e);
                let err = e.into_app_error();
                self.report(&err);
                return Err(err);
            }
        };

        let workout = Workout::new(coords, input.duration, input.distance, input.kind);
        let id = workout.id().to_string();
        tracing::info!("Recorded {}", workout.description());

        self.presenter.render_workout(&workout);
        if self.state.map_ready {
            self.presenter.add_marker(&MarkerSpec::for_workout(&workout));
        }
        self.state.store.append(workout);

        self.state.form = self.state.form.on_submitted();
        self.presenter.hide_form();
        self.persist();

        if self.state.store.len() == 1 {
            self.presenter.set_delete_all_visible(true);
        }
        Ok(id)
    }

    /// Delete one workout. Unknown ids change nothing.
    pub fn delete_one(&mut self, id: &str) -> bool {
        if self.state.store.remove_by_id(id).is_none() {
            tracing::debug!("Delete ignored: no workout {}", id);
            return false;
        }

        self.render_list();
        self.render_markers();
        self.persist();

        if self.state.store.is_empty() {
            self.presenter.set_delete_all_visible(false);
        }
        true
    }

    pub fn delete_all(&mut self) {
        self.state.store.clear();
        self.render_list();
        self.render_markers();
        self.persist();
        self.presenter.set_delete_all_visible(false);
    }

    /// Pan the map to a workout from the list.
    pub fn select_workout(&mut self, id: &str) -> bool {
        if !self.state.map_ready {
            return false;
        }
        let Some(workout) = self.state.store.find_by_id(id) else {
            return false;
        };
        let center = workout.coords();
        self.presenter.set_view(center, self.zoom_level);
        true
    }

    /// Forget all saved data and start from an empty list.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.persistence
            .reset()
            .map_err(IntoAppError::into_app_error)?;
        self.state.store.clear();
        self.state.form = FormState::Hidden;
        self.presenter.hide_form();
        self.render_list();
        self.render_markers();
        self.presenter.set_delete_all_visible(false);
        Ok(())
    }

    /// Apply a finished weather fetch to the weather area.
    pub fn on_weather(&mut self, message: WeatherServiceMessage) {
        match message {
            WeatherServiceMessage::FetchDone(Ok(report)) => {
                self.presenter.show_weather(&report);
                self.state.weather = WeatherDisplay::Ready(report);
            }
            WeatherServiceMessage::FetchDone(Err(e)) => {
                let text = view::weather_error_text(&e);
                tracing::error!("Weather unavailable: {}", e.into_app_error());
                self.presenter.show_weather_error(&text);
                self.state.weather = WeatherDisplay::Failed(text);
            }
        }
    }

    /// Blocking errors become an alert; the rest only reach the log.
    fn report(&mut self, err: &AppError) {
        if err.is_blocking() {
            self.presenter.alert(err.user_message());
        } else {
            tracing::warn!("{}", err);
        }
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.state.store) {
            tracing::error!("Failed to save workouts: {}", e.into_app_error());
        }
    }

    fn render_list(&mut self) {
        self.presenter.clear_workouts();
        for workout in self.state.store.iter() {
            self.presenter.render_workout(workout);
        }
    }

    fn render_markers(&mut self) {
        if !self.state.map_ready {
            return;
        }
        self.presenter.clear_markers();
        for workout in self.state.store.iter() {
            self.presenter.add_marker(&MarkerSpec::for_workout(workout));
        }
    }
}
