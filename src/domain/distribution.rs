use std::collections::BTreeMap;

use super::{
    error::{DistributionProblem, EstimateError},
    location::{CostTable, LocationId, REMOTE_CATEGORY},
};

/// Where an attendee is based: a recognized office or nowhere in particular.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HomeCategory {
    Office(LocationId),
    Remote,
}

impl HomeCategory {
    pub fn parse(key: &str) -> Self {
        if key.trim().eq_ignore_ascii_case(REMOTE_CATEGORY) {
            HomeCategory::Remote
        } else {
            HomeCategory::Office(LocationId::new(key))
        }
    }

    pub fn key(&self) -> &str {
        match self {
            HomeCategory::Office(id) => id.as_str(),
            HomeCategory::Remote => REMOTE_CATEGORY,
        }
    }
}

/// Attendee counts per home category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendeeDistribution {
    offices: BTreeMap<LocationId, u32>,
    remote: u32,
}

impl AttendeeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: HomeCategory, count: u32) -> Self {
        self.set(category, count);
        self
    }

    pub fn with_office(self, id: &str, count: u32) -> Self {
        self.with(HomeCategory::Office(LocationId::new(id)), count)
    }

    pub fn with_remote(self, count: u32) -> Self {
        self.with(HomeCategory::Remote, count)
    }

    pub fn set(&mut self, category: HomeCategory, count: u32) {
        match category {
            HomeCategory::Office(id) => {
                self.offices.insert(id, count);
            }
            HomeCategory::Remote => self.remote = count,
        }
    }

    pub fn add(&mut self, category: HomeCategory, count: u32) {
        match category {
            HomeCategory::Office(id) => {
                let entry = self.offices.entry(id).or_insert(0);
                *entry = entry.saturating_add(count);
            }
            HomeCategory::Remote => self.remote = self.remote.saturating_add(count),
        }
    }

    /// Count for the office category matching `id`; 0 when nobody lives there.
    pub fn count_for(&self, id: &LocationId) -> u32 {
        self.offices.get(id).copied().unwrap_or(0)
    }

    pub fn remote(&self) -> u32 {
        self.remote
    }

    pub fn total(&self) -> u64 {
        self.offices.values().map(|count| u64::from(*count)).sum::<u64>() + u64::from(self.remote)
    }

    /// Non-zero categories, offices in key order followed by remote.
    pub fn iter(&self) -> impl Iterator<Item = (HomeCategory, u32)> + '_ {
        self.offices
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(id, count)| (HomeCategory::Office(id.clone()), *count))
            .chain((self.remote > 0).then_some((HomeCategory::Remote, self.remote)))
    }

    /// Every category key must be a table location and the counts must add up
    /// to the declared headcount.
    pub fn validate(&self, table: &CostTable, total_attendees: u32) -> Result<(), EstimateError> {
        if let Some(unknown) = self.offices.keys().find(|id| !table.contains(id.as_str())) {
            return Err(DistributionProblem::UnrecognizedCategory(unknown.to_string()).into());
        }

        let actual = self.total();
        if actual != u64::from(total_attendees) {
            return Err(DistributionProblem::SumMismatch {
                expected: total_attendees,
                actual,
            }
            .into());
        }

        Ok(())
    }
}

/// Parses a raw count typed into a form field. Blank means zero; negative
/// values are rejected rather than clamped.
pub fn parse_count(category: &str, raw: &str) -> Result<u32, DistributionProblem> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => Err(DistributionProblem::NegativeCount {
            category: category.to_string(),
            value,
        }),
        Ok(value) => u32::try_from(value).map_err(|_| DistributionProblem::NotANumber {
            category: category.to_string(),
            raw: raw.to_string(),
        }),
        Err(_) => Err(DistributionProblem::NotANumber {
            category: category.to_string(),
            raw: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_and_lookups() {
        let distribution = AttendeeDistribution::new()
            .with_office("new-york", 5)
            .with_office("san-francisco", 3)
            .with_office("denver", 0)
            .with_remote(2);

        assert_eq!(distribution.total(), 10);
        assert_eq!(distribution.count_for(&LocationId::new("new-york")), 5);
        assert_eq!(distribution.count_for(&LocationId::new("arizona")), 0);
        assert_eq!(distribution.remote(), 2);

        let keys: Vec<_> = distribution
            .iter()
            .map(|(category, count)| (category.key().to_string(), count))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("new-york".to_string(), 5),
                ("san-francisco".to_string(), 3),
                ("remote".to_string(), 2),
            ]
        );
    }

    #[test]
    fn validation_enforces_sum_and_known_categories() {
        let table = CostTable::default();
        let distribution = AttendeeDistribution::new().with_office("denver", 2).with_remote(1);

        assert!(distribution.validate(&table, 3).is_ok());
        assert_eq!(
            distribution.validate(&table, 4),
            Err(EstimateError::InvalidDistribution(
                DistributionProblem::SumMismatch {
                    expected: 4,
                    actual: 3
                }
            ))
        );

        let unknown = AttendeeDistribution::new().with_office("tokyo", 3);
        assert!(matches!(
            unknown.validate(&table, 3),
            Err(EstimateError::InvalidDistribution(
                DistributionProblem::UnrecognizedCategory(id)
            )) if id == "tokyo"
        ));
    }

    #[test]
    fn remote_category_parses_case_insensitively() {
        assert_eq!(HomeCategory::parse(" Remote "), HomeCategory::Remote);
        assert_eq!(
            HomeCategory::parse("Denver"),
            HomeCategory::Office(LocationId::new("denver"))
        );
    }

    #[test]
    fn parse_count_rejects_negative_and_garbage() {
        assert_eq!(parse_count("denver", ""), Ok(0));
        assert_eq!(parse_count("denver", " 7 "), Ok(7));
        assert_eq!(
            parse_count("denver", "-2"),
            Err(DistributionProblem::NegativeCount {
                category: "denver".to_string(),
                value: -2
            })
        );
        assert!(matches!(
            parse_count("remote", "three"),
            Err(DistributionProblem::NotANumber { .. })
        ));
    }
}
