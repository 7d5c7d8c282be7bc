use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Input{path: String, source: std::io::Error} = "Cannot open flight plan {path}",
    Output{path: String, source: std::io::Error} = "Cannot write {path}",
    XML{quick_xml: quick_xml::Error} = "XML error",
    MissingCoordinates{ident: String} = "Coords not found for waypoint {ident}",
    BadCoordinate{ident: String, value: String} = "Waypoint {ident} has a bad coordinate: {value}",
    MalformedWaypoint{reason: String} = "Malformed waypoint: {reason}",
    EmptyFlightPlan = "Flight plan has no waypoints",
    InvalidPosition{position: u8} = "Card position {position} is outside 1..9"
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Error {
        Error::XML { quick_xml: e }
    }
}
