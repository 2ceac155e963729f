//! In-session, ordered collection of workouts.
//!
//! Insertion order is display order. The store never saves itself; callers
//! persist and re-render after every mutation.

use crate::workout::Workout;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a workout at the end.
    ///
    /// Id uniqueness is the caller's responsibility; a clash is only logged.
    pub fn append(&mut self, workout: Workout) {
        if self.find_by_id(workout.id()).is_some() {
            tracing::warn!("Appending workout with duplicate id {}", workout.id());
        }
        tracing::debug!("Appending workout {}", workout.id());
        self.workouts.push(workout);
    }

    /// Remove the workout with the given id. Absent ids are a no-op.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Workout> {
        let index = self.workouts.iter().position(|w| w.id() == id)?;
        tracing::debug!("Removing workout {}", id);
        Some(self.workouts.remove(index))
    }

    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} workouts", self.workouts.len());
        self.workouts.clear();
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Ordered view of all workouts
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Workout> {
        self.workouts.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.workouts.iter().map(Workout::id).collect()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

impl From<Vec<Workout>> for WorkoutStore {
    fn from(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }
}

impl<'a> IntoIterator for &'a WorkoutStore {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
