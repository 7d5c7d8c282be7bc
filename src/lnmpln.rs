use crate::error::{Error, Result};
use crate::geo::LatLon;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod parse;

#[derive(Clone, Debug, Builder, PartialEq)]
pub struct Waypoint {
    pub ident: String,
    pub latlon: LatLon,
    #[builder(default)]
    pub is_vor: bool,
}

#[cfg(test)]
impl Waypoint {
    pub fn new<S: Into<String>>(ident: S, latlon: LatLon, is_vor: bool) -> Self {
        Waypoint {
            ident: ident.into(),
            latlon,
            is_vor,
        }
    }
}

/// Waypoints of a flight plan in route order, departure first.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightPlan {
    pub waypoints: Vec<Waypoint>,
}

impl FlightPlan {
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(Error::EmptyFlightPlan);
        }
        Ok(FlightPlan { waypoints })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Input {
            path: path.display().to_string(),
            source,
        })?;
        let mut reader = quick_xml::Reader::from_reader(BufReader::new(file));
        reader.trim_text(true);
        parse::get_flight_plan(&mut reader)
    }

    pub fn departure(&self) -> &str {
        &self.waypoints[0].ident
    }

    pub fn destination(&self) -> &str {
        &self.waypoints[self.waypoints.len() - 1].ident
    }

    /// Base name shared by every file generated for this plan.
    pub fn name(&self) -> String {
        format!("{}-{}", self.departure(), self.destination())
    }

    pub fn vor_count(&self) -> usize {
        self.waypoints.iter().filter(|w| w.is_vor).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_plan_after_departure_and_destination() {
        let plan = FlightPlan::new(vec![
            Waypoint::new("UUEE", LatLon::new(55.97, 37.41), false),
            Waypoint::new("SOSIM", LatLon::new(56.5, 39.0), false),
            Waypoint::new("GR", LatLon::new(57.1, 41.2), true),
            Waypoint::new("ULLI", LatLon::new(59.8, 30.26), false),
        ])
        .unwrap();

        assert_eq!(plan.departure(), "UUEE");
        assert_eq!(plan.destination(), "ULLI");
        assert_eq!(plan.name(), "UUEE-ULLI");
        assert_eq!(plan.vor_count(), 1);
    }

    #[test]
    fn rejects_empty_plan() {
        match FlightPlan::new(Vec::new()) {
            Err(Error::EmptyFlightPlan) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_input_error() {
        match FlightPlan::from_file("/nonexistent/route.lnmpln") {
            Err(Error::Input { path, .. }) => assert_eq!(path, "/nonexistent/route.lnmpln"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
