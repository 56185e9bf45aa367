//! Turning a roster of named employees into an attendee distribution.

use serde::{Deserialize, Serialize};

use super::{
    distribution::{AttendeeDistribution, HomeCategory},
    location::{CostTable, REMOTE_CATEGORY},
};

/// Home locations that always count as remote.
const REMOTE_ALIASES: [&str; 4] = [REMOTE_CATEGORY, "wfh", "home", "anywhere"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub home_location: String,
}

/// Result of matching every roster entry against the cost table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterTally {
    pub distribution: AttendeeDistribution,
    pub total_attendees: u32,
    /// `(employee, location)` pairs whose location was not recognized.
    /// They are counted as remote.
    pub unmatched: Vec<(String, String)>,
}

impl RosterTally {
    pub fn has_unmatched(&self) -> bool {
        !self.unmatched.is_empty()
    }
}

pub fn categorize(table: &CostTable, home_location: &str) -> Option<HomeCategory> {
    let trimmed = home_location.trim();
    if trimmed.is_empty()
        || REMOTE_ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(trimmed))
    {
        return Some(HomeCategory::Remote);
    }

    table
        .resolve(trimmed)
        .map(|profile| HomeCategory::Office(profile.id.clone()))
}

pub fn tally_roster(table: &CostTable, entries: &[RosterEntry]) -> RosterTally {
    let mut tally = RosterTally::default();

    for entry in entries {
        let category = match categorize(table, &entry.home_location) {
            Some(category) => category,
            None => {
                tally
                    .unmatched
                    .push((entry.name.clone(), entry.home_location.clone()));
                HomeCategory::Remote
            }
        };
        tally.distribution.add(category, 1);
        tally.total_attendees = tally.total_attendees.saturating_add(1);
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::LocationId;

    fn entry(name: &str, home: &str) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            home_location: home.to_string(),
        }
    }

    #[test]
    fn tallies_offices_remote_and_unmatched() {
        let table = CostTable::default();
        let roster = vec![
            entry("Ada", "New York"),
            entry("Grace", "nyc"),
            entry("Linus", "SF"),
            entry("Barbara", ""),
            entry("Ken", "WFH"),
            entry("Margaret", "Tokyo"),
        ];

        let tally = tally_roster(&table, &roster);

        assert_eq!(tally.total_attendees, 6);
        assert_eq!(tally.distribution.count_for(&LocationId::new("new-york")), 2);
        assert_eq!(tally.distribution.count_for(&LocationId::new("san-francisco")), 1);
        assert_eq!(tally.distribution.remote(), 3);
        assert_eq!(
            tally.unmatched,
            vec![("Margaret".to_string(), "Tokyo".to_string())]
        );
        assert!(tally.distribution.validate(&table, tally.total_attendees).is_ok());
    }

    #[test]
    fn empty_roster_tallies_to_nothing() {
        let tally = tally_roster(&CostTable::default(), &[]);
        assert_eq!(tally.total_attendees, 0);
        assert!(!tally.has_unmatched());
    }
}
