//! Workout form: visibility state machine, raw input and validation.

use pacemap_core::ValidationError;
use pacemap_workouts::{ActivityType, Coordinates, KindInput};

/// Form visibility. While awaiting input, the last map click is kept as the
/// location of the next submitted workout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    AwaitingInput {
        pending: Coordinates,
    },
}

impl FormState {
    /// State after the user picks a point on the map. A later pick replaces
    /// an earlier one.
    pub fn on_location_pick(self, coords: Coordinates) -> Self {
        FormState::AwaitingInput { pending: coords }
    }

    /// State after a successful submission.
    pub fn on_submitted(self) -> Self {
        FormState::Hidden
    }

    pub fn pending(&self) -> Option<Coordinates> {
        match self {
            FormState::Hidden => None,
            FormState::AwaitingInput { pending } => Some(*pending),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, FormState::AwaitingInput { .. })
    }
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            kind: ActivityType::Running.as_str().to_string(),
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

impl FormFields {
    pub fn running(distance: &str, duration: &str, cadence: &str) -> Self {
        Self {
            kind: ActivityType::Running.as_str().to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation: String::new(),
        }
    }

    pub fn cycling(distance: &str, duration: &str, elevation: &str) -> Self {
        Self {
            kind: ActivityType::Cycling.as_str().to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: String::new(),
            elevation: elevation.to_string(),
        }
    }
}

/// Validated submission, ready to become a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInput {
    pub distance: f64,
    pub duration: f64,
    pub kind: KindInput,
}

/// Number-input semantics: blank is 0, anything unparsable is NaN.
pub fn parse_numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Check the fields for the selected kind.
///
/// Running: distance, duration and cadence finite and positive, cadence whole.
/// Cycling: distance, duration and elevation finite; distance and duration
/// positive. Elevation may be negative.
pub fn validate(fields: &FormFields) -> Result<ValidInput, ValidationError> {
    let kind: ActivityType = fields
        .kind
        .parse()
        .map_err(|_| ValidationError::UnknownKind(fields.kind.clone()))?;

    let distance = parse_numeric(&fields.distance);
    let duration = parse_numeric(&fields.duration);

    let invalid = || {
        ValidationError::InvalidNumber(format!(
            "{} distance={:?} duration={:?} cadence={:?} elevation={:?}",
            kind, fields.distance, fields.duration, fields.cadence, fields.elevation
        ))
    };

    let kind = match kind {
        ActivityType::Running => {
            let cadence = parse_numeric(&fields.cadence);
            if !all_finite(&[distance, duration, cadence])
                || !all_positive(&[distance, duration, cadence])
                || cadence.fract() != 0.0
                || cadence > f64::from(u32::MAX)
            {
                return Err(invalid());
            }
            KindInput::Running {
                cadence: cadence as u32,
            }
        }
        ActivityType::Cycling => {
            let elevation_gain = parse_numeric(&fields.elevation);
            if !all_finite(&[distance, duration, elevation_gain])
                || !all_positive(&[distance, duration])
            {
                return Err(invalid());
            }
            KindInput::Cycling { elevation_gain }
        }
    };

    Ok(ValidInput {
        distance,
        duration,
        kind,
    })
}
