//! Destination cost profiles and the closed table the engine sweeps.
//!
//! Declaration order matters: it is the iteration order used for the
//! all-destinations sweep and therefore the tie-break order when two
//! destinations cost exactly the same.

use std::{
    collections::{hash_map::Entry, HashMap, HashSet},
    fmt,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::EstimateError;

/// Home category for attendees without a recognized office.
pub const REMOTE_CATEGORY: &str = "remote";

/// Stable identifier for a destination, e.g. `new-york`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocationId(String);

impl LocationId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocationId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<LocationId> for String {
    fn from(id: LocationId) -> Self {
        id.0
    }
}

/// Per-person unit costs for one candidate destination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationProfile {
    pub id: LocationId,
    pub display_name: String,
    #[serde(default)]
    pub icon: String,
    /// Round-trip flight, charged per traveling attendee.
    pub flight_cost: f64,
    /// Charged per traveling attendee per night.
    pub hotel_cost_per_night: f64,
    /// Charged per attendee per day, locals included.
    pub meal_cost_per_day: f64,
    /// Flat per traveling attendee (two rides), independent of trip length.
    pub ground_transport_cost: f64,
    /// Extra spellings accepted when matching roster home locations.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl LocationProfile {
    /// Label as shown in the wizard, e.g. "🗽 New York".
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.display_name.clone()
        } else {
            format!("{} {}", self.icon, self.display_name)
        }
    }

    /// True when `name` refers to this location by id, display name or alias.
    pub fn matches_name(&self, name: &str) -> bool {
        let needle = name.trim();
        if needle.is_empty() {
            return false;
        }
        self.id.as_str().eq_ignore_ascii_case(needle)
            || self.display_name.eq_ignore_ascii_case(needle)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(needle))
    }

    /// Every spelling `resolve` may match: id, display name and aliases.
    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str())
            .chain(std::iter::once(self.display_name.as_str()))
            .chain(self.aliases.iter().map(String::as_str))
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    fn cost_fields(&self) -> [(&'static str, f64); 4] {
        [
            ("flight_cost", self.flight_cost),
            ("hotel_cost_per_night", self.hotel_cost_per_night),
            ("meal_cost_per_day", self.meal_cost_per_day),
            ("ground_transport_cost", self.ground_transport_cost),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostTableError {
    #[error("cost table has no locations")]
    Empty,
    #[error("a location has an empty id")]
    EmptyId,
    #[error("location `{0}` is declared more than once")]
    DuplicateId(LocationId),
    #[error("`{0}` is reserved for remote attendees and cannot be a destination")]
    ReservedId(LocationId),
    #[error("`{name}` names both `{first}` and `{second}`")]
    AmbiguousName {
        name: String,
        first: LocationId,
        second: LocationId,
    },
    #[error("location `{id}` has an invalid {field}: {value}")]
    InvalidCost {
        id: LocationId,
        field: &'static str,
        value: f64,
    },
}

/// The closed, immutable set of candidate destinations.
#[derive(Clone, Debug, PartialEq)]
pub struct CostTable {
    profiles: Vec<LocationProfile>,
}

impl CostTable {
    pub fn new(profiles: Vec<LocationProfile>) -> Result<Self, CostTableError> {
        if profiles.is_empty() {
            return Err(CostTableError::Empty);
        }

        let mut seen = HashSet::new();
        let mut owners: HashMap<String, LocationId> = HashMap::new();
        for profile in &profiles {
            if profile.id.as_str().is_empty() {
                return Err(CostTableError::EmptyId);
            }
            if profile.id.as_str() == REMOTE_CATEGORY {
                return Err(CostTableError::ReservedId(profile.id.clone()));
            }
            if !seen.insert(profile.id.clone()) {
                return Err(CostTableError::DuplicateId(profile.id.clone()));
            }
            for name in profile.names() {
                match owners.entry(name.to_lowercase()) {
                    Entry::Vacant(slot) => {
                        slot.insert(profile.id.clone());
                    }
                    Entry::Occupied(slot) if slot.get() != &profile.id => {
                        return Err(CostTableError::AmbiguousName {
                            name: name.to_string(),
                            first: slot.get().clone(),
                            second: profile.id.clone(),
                        });
                    }
                    Entry::Occupied(_) => {}
                }
            }
            for (field, value) in profile.cost_fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(CostTableError::InvalidCost {
                        id: profile.id.clone(),
                        field,
                        value,
                    });
                }
            }
        }

        Ok(Self { profiles })
    }

    pub fn get(&self, id: &str) -> Result<&LocationProfile, EstimateError> {
        let wanted = LocationId::new(id);
        self.profiles
            .iter()
            .find(|profile| profile.id == wanted)
            .ok_or_else(|| EstimateError::UnknownLocation(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }

    /// All profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &LocationProfile> {
        self.profiles.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &LocationId> {
        self.profiles.iter().map(|profile| &profile.id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Resolves a free-form home location (id, display name or alias).
    pub fn resolve(&self, name: &str) -> Option<&LocationProfile> {
        self.profiles.iter().find(|profile| profile.matches_name(name))
    }

    pub fn profiles(&self) -> &[LocationProfile] {
        &self.profiles
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
        }
    }
}

fn profile(
    id: &str,
    display_name: &str,
    icon: &str,
    costs: [f64; 4],
    aliases: &[&str],
) -> LocationProfile {
    let [flight_cost, hotel_cost_per_night, meal_cost_per_day, ground_transport_cost] = costs;
    LocationProfile {
        id: LocationId::new(id),
        display_name: display_name.to_string(),
        icon: icon.to_string(),
        flight_cost,
        hotel_cost_per_night,
        meal_cost_per_day,
        ground_transport_cost,
        aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
    }
}

/// Built-in averages: flight, hotel/night, meals/day, ground (2 rides at $50).
pub fn default_profiles() -> Vec<LocationProfile> {
    vec![
        profile(
            "arizona",
            "Arizona",
            "🌵",
            [450.0, 250.0, 75.0, 100.0],
            &["az", "phoenix", "scottsdale"],
        ),
        profile(
            "san-francisco",
            "San Francisco",
            "🌉",
            [520.0, 350.0, 75.0, 100.0],
            &["sf", "sfo", "bay area"],
        ),
        profile(
            "denver",
            "Denver",
            "🏔️",
            [380.0, 300.0, 75.0, 100.0],
            &["den", "colorado"],
        ),
        profile(
            "new-york",
            "New York",
            "🗽",
            [480.0, 400.0, 75.0, 100.0],
            &["ny", "nyc", "new york city"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_keeps_declaration_order() {
        let table = CostTable::default();
        let ids: Vec<_> = table.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["arizona", "san-francisco", "denver", "new-york"]);
    }

    #[test]
    fn lookup_of_unknown_id_fails() {
        let table = CostTable::default();
        assert_eq!(
            table.get("tokyo"),
            Err(EstimateError::UnknownLocation("tokyo".to_string()))
        );
        assert_eq!(table.get("New-York").map(|p| p.flight_cost), Ok(480.0));
    }

    #[test]
    fn rejects_duplicates_reserved_ids_and_bad_costs() {
        let mut profiles = default_profiles();
        profiles.push(profiles[0].clone());
        assert!(matches!(
            CostTable::new(profiles),
            Err(CostTableError::DuplicateId(id)) if id.as_str() == "arizona"
        ));

        let mut remote = default_profiles();
        remote[1].id = LocationId::new("remote");
        assert!(matches!(
            CostTable::new(remote),
            Err(CostTableError::ReservedId(_))
        ));

        let mut negative = default_profiles();
        negative[2].hotel_cost_per_night = -1.0;
        assert!(matches!(
            CostTable::new(negative),
            Err(CostTableError::InvalidCost { field: "hotel_cost_per_night", .. })
        ));

        assert_eq!(CostTable::new(Vec::new()), Err(CostTableError::Empty));
    }

    #[test]
    fn rejects_names_shared_between_locations() {
        let mut stolen_name = default_profiles();
        stolen_name[0].aliases.push("Denver".to_string());
        assert_eq!(
            CostTable::new(stolen_name),
            Err(CostTableError::AmbiguousName {
                name: "denver".to_string(),
                first: LocationId::new("arizona"),
                second: LocationId::new("denver"),
            })
        );

        let mut shared_alias = default_profiles();
        shared_alias[3].aliases.push("SF".to_string());
        assert!(matches!(
            CostTable::new(shared_alias),
            Err(CostTableError::AmbiguousName { first, second, .. })
                if first.as_str() == "san-francisco" && second.as_str() == "new-york"
        ));

        let mut own_name = default_profiles();
        own_name[2].aliases.push("DENVER".to_string());
        assert!(CostTable::new(own_name).is_ok());

        let mut blank = default_profiles();
        blank[1].id = LocationId::new("  ");
        assert_eq!(CostTable::new(blank), Err(CostTableError::EmptyId));
    }

    #[test]
    fn resolves_names_and_aliases() {
        let table = CostTable::default();
        assert_eq!(table.resolve("NYC").map(|p| p.id.as_str()), Some("new-york"));
        assert_eq!(
            table.resolve(" san francisco ").map(|p| p.id.as_str()),
            Some("san-francisco")
        );
        assert!(table.resolve("Tokyo").is_none());
        assert!(table.resolve("").is_none());
    }
}
