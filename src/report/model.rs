use serde::{Deserialize, Serialize};

/// Response body of `GET /kepler/{id}`; field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    pub star_system: String,
    pub number_of_planets: usize,
    pub star_temperature: String,
    pub star_size: String,
    pub star_mass: Option<String>,
    pub star_age: Option<String>,
    pub ra_dec: String,
    pub potential_planets: Vec<PlanetReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_note: Option<String>,
    pub discovery_date: String,
    pub last_update: String,
    pub smart_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetReport {
    pub planet_number: i64,
    pub orbit: String,
    pub size: String,
    pub temperature: String,
    pub sunlight_received: String,
    pub transit_duration: String,
    pub transit_depth: String,
    pub detection_snr: Option<f64>,
    pub impact_parameter: Option<f64>,
    pub interesting_features: Vec<String>,
}
