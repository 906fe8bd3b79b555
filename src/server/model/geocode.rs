use crate::server::model::db::GeocacheModel;

/// Resolved coordinates of an address along with the precision flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// `false` when the geocoder only matched the city or another coarse area.
    pub is_exact: bool,
}

impl From<&GeocacheModel> for Coordinates {
    fn from(entry: &GeocacheModel) -> Self {
        Self {
            latitude: entry.latitude,
            longitude: entry.longitude,
            is_exact: entry.is_exact,
        }
    }
}
