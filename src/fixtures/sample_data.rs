/// The demo roster: six employees, three of them licensed.
pub const SAMPLE_ROSTER_JSON: &str = include_str!("../../data/roster.json");

/// The demo fleet: four bikes followed by four cars.
pub const SAMPLE_FLEET_JSON: &str = include_str!("../../data/fleet.json");
