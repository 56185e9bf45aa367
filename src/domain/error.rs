use thiserror::Error;

/// Failures raised while evaluating a trip against the cost table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("unknown location `{0}`")]
    UnknownLocation(String),
    #[error("attendee count must be positive (got {0})")]
    InvalidAttendeeCount(u32),
    #[error("trip duration must be at least one day (got {0})")]
    InvalidDuration(u32),
    #[error("invalid attendee distribution: {0}")]
    InvalidDistribution(#[from] DistributionProblem),
    #[error("no destinations to compare")]
    EmptyInput,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DistributionProblem {
    #[error("breakdown sums to {actual} but {expected} attendees were declared")]
    SumMismatch { expected: u32, actual: u64 },
    #[error("`{0}` is not a recognized home location")]
    UnrecognizedCategory(String),
    #[error("count for `{category}` cannot be negative ({value})")]
    NegativeCount { category: String, value: i64 },
    #[error("count for `{category}` is not a whole number (`{raw}`)")]
    NotANumber { category: String, raw: String },
}
