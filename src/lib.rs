//! Off-site cost estimation: a fixed table of candidate cities, a pure
//! engine that prices a trip for each of them, and the adapters the desktop
//! wizard uses to import rosters and export reports.

pub mod domain;
pub mod infra;
pub mod util;
