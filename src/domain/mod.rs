//! Destination cost model, the comparison engine and the wizard session.

pub mod app_state;
pub mod distribution;
pub mod error;
pub mod evaluation;
pub mod location;
pub mod report;
pub mod roster;

pub use app_state::{AppState, BreakdownStatus, WizardError, WizardForm, WizardStep};
pub use distribution::{AttendeeDistribution, HomeCategory};
pub use error::{DistributionProblem, EstimateError};
pub use evaluation::{
    compare_destinations, evaluate_all_destinations, evaluate_destination, find_cheapest,
    CostComparison, DestinationCostBreakdown, TripRequest,
};
pub use location::{CostTable, CostTableError, LocationId, LocationProfile, REMOTE_CATEGORY};
pub use roster::{tally_roster, RosterEntry, RosterTally};
