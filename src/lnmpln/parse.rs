use quick_xml::events::*;
use quick_xml::Reader;
use std::io::BufRead;
use tracing::debug;
use crate::error::{Error, Result};
use super::*;
use crate::geo::LatLon;

// Little Navmap is not consistent about case across versions
fn is_tag(name: &[u8], tag: &str) -> bool {
    name.eq_ignore_ascii_case(tag.as_bytes())
}

fn get_coordinate<B: BufRead>(reader: &Reader<B>, tag: &BytesStart, attr: &str, ident: &str) -> Result<Option<f64>> {
    for a in tag.attributes() {
        let a = a?;
        if is_tag(a.key, attr) {
            let raw = a.unescape_and_decode_value(reader)?;
            let value = raw.trim().parse::<f64>().map_err(|_| Error::BadCoordinate {
                ident: ident.to_owned(),
                value: raw.clone(),
            })?;
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn get_pos<B: BufRead>(reader: &Reader<B>, tag: &BytesStart, ident: &str) -> Result<LatLon> {
    let lon = get_coordinate(reader, tag, "Lon", ident)?;
    let lat = get_coordinate(reader, tag, "Lat", ident)?;
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(LatLon::new(lat, lon)),
        _ => Err(Error::MissingCoordinates { ident: ident.to_owned() }),
    }
}

fn get_waypoint<B: BufRead>(reader: &mut Reader<B>, buf: &mut Vec<u8>) -> Result<Waypoint> {
    let mut waypoint = WaypointBuilder::default();
    // Pos may come before Ident, keep something to name the waypoint by
    let mut ident = String::from("<unnamed>");

    loop {
        match reader.read_event(buf)? {
            Event::Start(ref event) if is_tag(event.name(), "Ident") => {
                let end = event.name().to_vec();
                ident = reader.read_text(end, &mut Vec::new())?;
                waypoint.ident(ident.clone());
            }
            Event::Start(ref event) if is_tag(event.name(), "Type") => {
                let end = event.name().to_vec();
                let raw = reader.read_text(end, &mut Vec::new())?;
                waypoint.is_vor(raw.trim().eq_ignore_ascii_case("vor"));
            }
            Event::Start(ref event) | Event::Empty(ref event) if is_tag(event.name(), "Pos") => {
                waypoint.latlon(get_pos(reader, event, &ident)?);
            }
            Event::End(ref event) if is_tag(event.name(), "Waypoint") => break,
            Event::Eof => return Err(quick_xml::Error::UnexpectedEof("Waypoint".to_owned()).into()),
            _ => ()
        }
        buf.clear();
    }

    waypoint.build().map_err(|reason| Error::MalformedWaypoint { reason })
}

/// Reads every `Waypoint` element of a Little Navmap plan in document order.
pub fn get_waypoints<B: BufRead>(lnm: &mut Reader<B>) -> Result<Vec<Waypoint>> {
    let mut buf = Vec::new();
    let mut waypoints = Vec::new();

    loop {
        match lnm.read_event(&mut buf)? {
            Event::Start(ref event) if is_tag(event.name(), "Waypoint") => {
                let waypoint = get_waypoint(lnm, &mut Vec::new())?;
                debug!(ident = %waypoint.ident, vor = waypoint.is_vor, "read waypoint");
                waypoints.push(waypoint);
            }
            Event::Eof => break Ok(waypoints),
            _ => ()
        }
        buf.clear();
    }
}

pub fn get_flight_plan<B: BufRead>(lnm: &mut Reader<B>) -> Result<FlightPlan> {
    FlightPlan::new(get_waypoints(lnm)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<FlightPlan> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        get_flight_plan(&mut reader)
    }

    const PLAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LittleNavmap>
  <Flightplan>
    <Header><CreationDate>2020-05-01T10:00:00</CreationDate></Header>
    <Departure><Pos Lon="37.414600" Lat="55.972599" Alt="622.00"/></Departure>
    <Waypoints>
      <Waypoint>
        <Name>Sheremetyevo</Name>
        <Ident>UUEE</Ident>
        <Type>AIRPORT</Type>
        <Pos Lon="37.414600" Lat="55.972599" Alt="622.00"/>
      </Waypoint>
      <Waypoint>
        <Ident>RESMI</Ident>
        <Type>WAYPOINT</Type>
        <Pos Lon="36.500000" Lat="56.250000" Alt="33000.00"/>
      </Waypoint>
      <Waypoint>
        <Ident>BEL</Ident>
        <Type>vor</Type>
        <Pos Lon="-0.5" Lat="51.125"/>
      </Waypoint>
      <Waypoint>
        <Ident>ULLI</Ident>
        <Type>AIRPORT</Type>
        <Pos Lon="30.262501" Lat="59.800301" Alt="78.00"/>
      </Waypoint>
    </Waypoints>
  </Flightplan>
</LittleNavmap>"#;

    #[test]
    fn reads_waypoints_in_document_order() {
        let plan = parse(PLAN).unwrap();
        let idents: Vec<_> = plan.waypoints.iter().map(|w| w.ident.as_str()).collect();
        assert_eq!(idents, vec!["UUEE", "RESMI", "BEL", "ULLI"]);
        assert_eq!(plan.name(), "UUEE-ULLI");
    }

    #[test]
    fn reads_coordinates_and_vor_type() {
        let plan = parse(PLAN).unwrap();
        let bel = &plan.waypoints[2];
        assert!(bel.is_vor);
        assert_eq!(bel.latlon, LatLon::new(51.125, -0.5));
        assert!(!plan.waypoints[1].is_vor);
    }

    #[test]
    fn matches_names_ignoring_case() {
        let plan = parse(
            r#"<plan><waypoint><ident>ABC</ident><type>VOR</type><pos lat="1.5" lon="2.5"/></waypoint></plan>"#,
        )
        .unwrap();
        assert_eq!(plan.waypoints, vec![Waypoint::new("ABC", LatLon::new(1.5, 2.5), true)]);
    }

    #[test]
    fn missing_type_is_not_a_vor() {
        let plan = parse(r#"<Waypoint><Ident>X</Ident><Pos Lon="1" Lat="2"/></Waypoint>"#).unwrap();
        assert!(!plan.waypoints[0].is_vor);
    }

    #[test]
    fn missing_latitude_is_fatal() {
        match parse(r#"<Waypoint><Ident>X</Ident><Type>VOR</Type><Pos Lon="1"/></Waypoint>"#) {
            Err(Error::MissingCoordinates { ident }) => assert_eq!(ident, "X"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn bad_number_is_fatal() {
        match parse(r#"<Waypoint><Ident>X</Ident><Pos Lon="east" Lat="2"/></Waypoint>"#) {
            Err(Error::BadCoordinate { ident, value }) => {
                assert_eq!(ident, "X");
                assert_eq!(value, "east");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn waypoint_without_pos_is_malformed() {
        match parse(r#"<Waypoint><Ident>X</Ident><Type>VOR</Type></Waypoint>"#) {
            Err(Error::MalformedWaypoint { .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn truncated_document_is_an_xml_error() {
        match parse(r#"<Waypoint><Ident>X</Ident>"#) {
            Err(Error::XML { .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn document_without_waypoints_is_empty() {
        match parse(r#"<LittleNavmap><Flightplan/></LittleNavmap>"#) {
            Err(Error::EmptyFlightPlan) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
