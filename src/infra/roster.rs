//! Reads employee rosters exported from a spreadsheet as CSV.

use std::{fs::File, io, path::Path};

use log::{info, warn};
use thiserror::Error;

use crate::domain::RosterEntry;

const NAME_COLUMNS: [&str; 3] = ["name", "employee", "employee name"];
const LOCATION_COLUMNS: [&str; 5] = ["location", "home", "home location", "office", "city"];

#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("roster is missing a `{0}` column")]
    MissingColumn(&'static str),
    #[error("roster has no employees")]
    Empty,
}

pub fn read_roster(path: &Path) -> Result<Vec<RosterEntry>, RosterError> {
    let entries = parse_roster(File::open(path)?)?;
    info!(
        "[roster] Read {} employees from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

pub fn parse_roster<R: io::Read>(reader: R) -> Result<Vec<RosterEntry>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let name_idx = find_column(&headers, &NAME_COLUMNS).ok_or(RosterError::MissingColumn("name"))?;
    let location_idx =
        find_column(&headers, &LOCATION_COLUMNS).ok_or(RosterError::MissingColumn("location"))?;

    let mut entries = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or_default();
        let home_location = record.get(location_idx).unwrap_or_default();
        if name.is_empty() {
            if !home_location.is_empty() {
                warn!("[roster] Skipping row {} without a name", row + 2);
            }
            continue;
        }
        entries.push(RosterEntry {
            name: name.to_string(),
            home_location: home_location.to_string(),
        });
    }

    if entries.is_empty() {
        return Err(RosterError::Empty);
    }
    Ok(entries)
}

fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        candidates
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(header))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{tally_roster, CostTable, LocationId};

    #[test]
    fn parses_rows_with_flexible_headers() {
        let csv = "Employee,Team,Home Location\n\
                   Ada Lovelace,Eng,New York\n\
                   Grace Hopper,Eng, SF \n\
                   ,Ops,Denver\n\
                   Alan Turing,Research,\n";

        let entries = parse_roster(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].home_location, "SF");
        assert_eq!(entries[2].home_location, "");

        let tally = tally_roster(&CostTable::default(), &entries);
        assert_eq!(tally.total_attendees, 3);
        assert_eq!(tally.distribution.count_for(&LocationId::new("san-francisco")), 1);
        assert_eq!(tally.distribution.remote(), 1);
    }

    #[test]
    fn short_rows_are_tolerated() {
        let csv = "name,location\nAda,Denver\nAlan\n";
        let entries = parse_roster(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].home_location, "");
    }

    #[test]
    fn missing_columns_are_reported() {
        let result = parse_roster("name,team\nAda,Eng\n".as_bytes());
        assert!(matches!(result, Err(RosterError::MissingColumn("location"))));

        let result = parse_roster("city\nDenver\n".as_bytes());
        assert!(matches!(result, Err(RosterError::MissingColumn("name"))));
    }

    #[test]
    fn header_only_roster_is_empty() {
        let result = parse_roster("name,location\n".as_bytes());
        assert!(matches!(result, Err(RosterError::Empty)));
    }
}
