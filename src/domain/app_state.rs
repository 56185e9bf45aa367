use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use super::{
    distribution::{parse_count, AttendeeDistribution, HomeCategory},
    error::EstimateError,
    evaluation::{compare_destinations, CostComparison, TripRequest},
    location::{CostTable, LocationId, REMOTE_CATEGORY},
    roster::RosterTally,
};

pub const MIN_ATTENDEES: u32 = 1;
pub const MAX_ATTENDEES: u32 = 100;
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 14;

/// Wizard pages, in the order the user walks through them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    Location,
    Attendees,
    Breakdown,
    Duration,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Location,
        WizardStep::Attendees,
        WizardStep::Breakdown,
        WizardStep::Duration,
        WizardStep::Results,
    ];

    pub fn number(&self) -> usize {
        match self {
            WizardStep::Location => 1,
            WizardStep::Attendees => 2,
            WizardStep::Breakdown => 3,
            WizardStep::Duration => 4,
            WizardStep::Results => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Location => "Where?",
            WizardStep::Attendees => "How many?",
            WizardStep::Breakdown => "From where?",
            WizardStep::Duration => "How long?",
            WizardStep::Results => "Estimate",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.number()).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.number()
            .checked_sub(2)
            .and_then(|idx| WizardStep::ALL.get(idx).copied())
    }
}

/// Live status of the breakdown against the declared headcount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakdownStatus {
    Incomplete,
    Matched,
    Over,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("Please choose a location.")]
    MissingLocation,
    #[error("Please fill in all required fields.")]
    MissingField,
    #[error("Please distribute all {target} attendees. Current total: {current}")]
    BreakdownMismatch { target: u32, current: u64 },
    #[error("Please specify where your attendees are coming from.")]
    EmptyBreakdown,
    #[error("The roster lists {count} people; estimates support up to {max}.")]
    TooManyAttendees { count: u32, max: u32 },
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// Raw form input as typed, kept as text until a step is validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardForm {
    pub location: Option<LocationId>,
    pub attendees: String,
    pub days: String,
    /// Keyed by category key (`new-york`, `remote`, ...).
    pub breakdown: HashMap<String, String>,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub cost_table: CostTable,
    pub step: WizardStep,
    pub form: WizardForm,
    /// Summary of the last roster import, if the breakdown came from one.
    pub roster: Option<RosterTally>,
    pub comparison: Option<CostComparison>,
}

impl AppState {
    pub fn new(cost_table: CostTable) -> Self {
        Self {
            cost_table,
            ..Self::default()
        }
    }

    /// Category keys in display order: every table location, then remote.
    pub fn category_keys(&self) -> Vec<String> {
        self.cost_table
            .ids()
            .map(|id| id.to_string())
            .chain(std::iter::once(REMOTE_CATEGORY.to_string()))
            .collect()
    }

    pub fn select_location(&mut self, id: LocationId) {
        self.form.location = Some(id);
    }

    pub fn set_attendees_input(&mut self, raw: impl Into<String>) {
        self.form.attendees = clamp_input(raw.into(), MIN_ATTENDEES, MAX_ATTENDEES);
    }

    pub fn set_days_input(&mut self, raw: impl Into<String>) {
        self.form.days = clamp_input(raw.into(), MIN_DAYS, MAX_DAYS);
    }

    pub fn set_breakdown_input(&mut self, category: &str, raw: impl Into<String>) {
        self.form.breakdown.insert(category.to_string(), raw.into());
    }

    pub fn breakdown_input(&self, category: &str) -> String {
        self.form.breakdown.get(category).cloned().unwrap_or_default()
    }

    pub fn target_attendees(&self) -> u32 {
        self.form.attendees.trim().parse().unwrap_or(0)
    }

    /// Sum of the breakdown fields, ignoring anything unparsable.
    pub fn breakdown_total(&self) -> u64 {
        self.form
            .breakdown
            .iter()
            .filter_map(|(category, raw)| parse_count(category, raw).ok())
            .map(u64::from)
            .sum()
    }

    pub fn breakdown_status(&self) -> BreakdownStatus {
        let total = self.breakdown_total();
        let target = u64::from(self.target_attendees());
        if total == target && total > 0 {
            BreakdownStatus::Matched
        } else if total > target {
            BreakdownStatus::Over
        } else {
            BreakdownStatus::Incomplete
        }
    }

    pub fn distribution(&self) -> Result<AttendeeDistribution, EstimateError> {
        let mut distribution = AttendeeDistribution::new();
        for key in self.category_keys() {
            let count = parse_count(&key, &self.breakdown_input(&key))?;
            distribution.set(HomeCategory::parse(&key), count);
        }
        Ok(distribution)
    }

    pub fn validate_step(&self, step: WizardStep) -> Result<(), WizardError> {
        match step {
            WizardStep::Location => {
                let id = self.form.location.as_ref().ok_or(WizardError::MissingLocation)?;
                self.cost_table.get(id.as_str())?;
            }
            WizardStep::Attendees => {
                parse_in_range(&self.form.attendees, MIN_ATTENDEES, MAX_ATTENDEES)?;
            }
            WizardStep::Breakdown => {
                self.distribution()?;
                let target = self.target_attendees();
                let current = self.breakdown_total();
                if current != u64::from(target) {
                    return Err(WizardError::BreakdownMismatch { target, current });
                }
                if current == 0 {
                    return Err(WizardError::EmptyBreakdown);
                }
            }
            WizardStep::Duration => {
                parse_in_range(&self.form.days, MIN_DAYS, MAX_DAYS)?;
            }
            WizardStep::Results => {}
        }
        Ok(())
    }

    /// Validates the current step and advances. Leaving the last input step
    /// runs the comparison.
    pub fn next_step(&mut self) -> Result<WizardStep, WizardError> {
        self.validate_step(self.step)?;
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };

        if next == WizardStep::Results {
            let request = self.to_request()?;
            self.comparison = Some(compare_destinations(&self.cost_table, &request)?);
        }

        debug!("wizard step {:?} -> {:?}", self.step, next);
        self.step = next;
        Ok(next)
    }

    /// Re-runs the estimate for another destination, keeping every other
    /// answer. Used by "switch to cheapest" on the results page.
    pub fn switch_destination(&mut self, id: LocationId) -> Result<(), WizardError> {
        let previous = self.form.location.replace(id);
        let request = match self.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.form.location = previous;
                return Err(err);
            }
        };
        self.comparison = Some(compare_destinations(&self.cost_table, &request)?);
        self.step = WizardStep::Results;
        Ok(())
    }

    pub fn previous_step(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn start_over(&mut self) {
        let table = std::mem::take(&mut self.cost_table);
        *self = Self::new(table);
    }

    /// Snapshot of the validated answers, ready for the engine.
    pub fn to_request(&self) -> Result<TripRequest, WizardError> {
        for step in [
            WizardStep::Location,
            WizardStep::Attendees,
            WizardStep::Breakdown,
            WizardStep::Duration,
        ] {
            self.validate_step(step)?;
        }

        Ok(TripRequest {
            distribution: self.distribution()?,
            total_attendees: parse_in_range(&self.form.attendees, MIN_ATTENDEES, MAX_ATTENDEES)?,
            days: parse_in_range(&self.form.days, MIN_DAYS, MAX_DAYS)?,
            destination: self.form.location.clone().ok_or(WizardError::MissingLocation)?,
        })
    }

    /// Prefills headcount and breakdown from an imported roster.
    pub fn apply_roster(&mut self, tally: RosterTally) -> Result<(), WizardError> {
        if tally.total_attendees > MAX_ATTENDEES {
            return Err(WizardError::TooManyAttendees {
                count: tally.total_attendees,
                max: MAX_ATTENDEES,
            });
        }
        self.form.attendees = tally.total_attendees.to_string();
        self.form.breakdown = self
            .category_keys()
            .into_iter()
            .map(|key| {
                let count = match HomeCategory::parse(&key) {
                    HomeCategory::Office(id) => tally.distribution.count_for(&id),
                    HomeCategory::Remote => tally.distribution.remote(),
                };
                (key, count.to_string())
            })
            .collect();
        self.roster = Some(tally);
        Ok(())
    }
}

/// Clamps numeric text into `[min, max]`, leaving blank or non-numeric text
/// untouched so the field can be cleared while typing.
fn clamp_input(raw: String, min: u32, max: u32) -> String {
    match raw.trim().parse::<i64>() {
        Ok(value) if value < i64::from(min) => min.to_string(),
        Ok(value) if value > i64::from(max) => max.to_string(),
        _ => raw,
    }
}

fn parse_in_range(raw: &str, min: u32, max: u32) -> Result<u32, WizardError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or(WizardError::MissingField)
}
