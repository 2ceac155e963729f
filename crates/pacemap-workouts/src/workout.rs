//! Workout record: one logged activity with its derived metric and label.
//!
//! A record is built once and never mutated. The derived metric (pace or
//! speed) and the description are computed at construction time only.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of trailing timestamp digits kept in a workout id
const ID_DIGITS: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    UnknownKind(String),
}

/// Supported activity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Running,
    Cycling,
}

impl ActivityType {
    /// Lowercase identifier, as used in storage and CSS class names
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "running",
            ActivityType::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Cycling => "Cycling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ActivityType::Running => "🏃‍♂️",
            ActivityType::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(ActivityType::Running),
            "cycling" => Ok(ActivityType::Cycling),
            other => Err(WorkoutError::UnknownKind(other.to_string())),
        }
    }
}

/// A `(lat, lng)` pair, stored as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// Kind-specific construction argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KindInput {
    Running { cadence: u32 },
    Cycling { elevation_gain: f64 },
}

/// Kind-specific fields including the derived metric.
///
/// Flattened into the record when serialized, with `type` as discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Metrics {
    Running {
        cadence: u32,
        /// min/km
        pace: f64,
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// km/h
        speed: f64,
    },
}

impl Metrics {
    pub fn kind(&self) -> ActivityType {
        match self {
            Metrics::Running { .. } => ActivityType::Running,
            Metrics::Cycling { .. } => ActivityType::Cycling,
        }
    }

    /// Running pace in min/km
    pub fn pace_for(distance: f64, duration: f64) -> f64 {
        duration / distance
    }

    /// Cycling speed in km/h
    pub fn speed_for(distance: f64, duration: f64) -> f64 {
        distance / (duration / 60.0)
    }
}

/// Id derived from the creation time: the last ten digits of its Unix millis.
pub fn workout_id(created_at: DateTime<Utc>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(ID_DIGITS);
    millis[start..].to_string()
}

/// Human-readable label, e.g. "Running on April 14".
pub fn describe(kind: ActivityType, date: NaiveDate) -> String {
    format!(
        "{} on {} {}",
        kind.label(),
        MONTHS[date.month0() as usize],
        date.day()
    )
}

/// One logged activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    date: DateTime<Utc>,
    id: String,
    coords: Coordinates,
    /// km
    distance: f64,
    /// min
    duration: f64,
    #[serde(flatten)]
    metrics: Metrics,
    description: String,
}

impl Workout {
    /// Build a record stamped with the current time.
    pub fn new(coords: Coordinates, duration: f64, distance: f64, input: KindInput) -> Self {
        Self::new_at(Utc::now(), coords, duration, distance, input)
    }

    pub fn new_at(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        duration: f64,
        distance: f64,
        input: KindInput,
    ) -> Self {
        match input {
            KindInput::Running { cadence } => {
                Self::running(created_at, coords, duration, distance, cadence)
            }
            KindInput::Cycling { elevation_gain } => {
                Self::cycling(created_at, coords, duration, distance, elevation_gain)
            }
        }
    }

    pub fn running(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        duration: f64,
        distance: f64,
        cadence: u32,
    ) -> Self {
        let metrics = Metrics::Running {
            cadence,
            pace: Metrics::pace_for(distance, duration),
        };
        Self::assemble(created_at, coords, duration, distance, metrics)
    }

    pub fn cycling(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        duration: f64,
        distance: f64,
        elevation_gain: f64,
    ) -> Self {
        let metrics = Metrics::Cycling {
            elevation_gain,
            speed: Metrics::speed_for(distance, duration),
        };
        Self::assemble(created_at, coords, duration, distance, metrics)
    }

    fn assemble(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        duration: f64,
        distance: f64,
        metrics: Metrics,
    ) -> Self {
        let local_date = created_at.with_timezone(&Local).date_naive();
        Self {
            date: created_at,
            id: workout_id(created_at),
            coords,
            distance,
            duration,
            description: describe(metrics.kind(), local_date),
            metrics,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn kind(&self) -> ActivityType {
        self.metrics.kind()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Pace (min/km) for running, speed (km/h) for cycling
    pub fn derived_metric(&self) -> f64 {
        match self.metrics {
            Metrics::Running { pace, .. } => pace,
            Metrics::Cycling { speed, .. } => speed,
        }
    }

    pub fn pace(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Running { pace, .. } => Some(pace),
            Metrics::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Running { .. } => None,
            Metrics::Cycling { speed, .. } => Some(speed),
        }
    }

    pub fn cadence(&self) -> Option<u32> {
        match self.metrics {
            Metrics::Running { cadence, .. } => Some(cadence),
            Metrics::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Running { .. } => None,
            Metrics::Cycling { elevation_gain, .. } => Some(elevation_gain),
        }
    }
}
