#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn hemisphere(self, value: f64) -> &'static str {
        match (self, value < 0.0) {
            (Axis::Latitude, false) => "N",
            (Axis::Latitude, true) => "S",
            (Axis::Longitude, false) => "E",
            (Axis::Longitude, true) => "W",
        }
    }

    // Latitude runs 0-90, longitude 0-180
    fn degree_width(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    /// Card text for both axes, latitude first.
    pub fn to_card(self) -> (String, String) {
        (encode(self.0, Axis::Latitude), encode(self.1, Axis::Longitude))
    }
}

/// Encodes decimal degrees as ADEU card text, e.g. `N 37*37.3` or `W 122*22.7`.
///
/// Minutes are rounded half away from zero to a tenth. A value that rounds up
/// to a full 60 minutes carries into the degrees. Degrees wider than the
/// field (out of range input) widen the field instead of failing.
pub fn encode(value: f64, axis: Axis) -> String {
    let mut degrees = value.trunc().abs() as u32;
    let mut tenths = (value.fract().abs() * 60.0 * 10.0).round() as u32;
    if tenths >= 600 {
        degrees += 1;
        tenths -= 600;
    }

    format!(
        "{} {:0width$}*{:02}.{}",
        axis.hemisphere(value),
        degrees,
        tenths / 10,
        tenths % 10,
        width = axis.degree_width()
    )
}
