use crate::archive::TceRow;

pub const FAST_ORBIT: &str = "This planet orbits very quickly!";
pub const EXTREMELY_LARGE: &str = "This planet is extremely large!";
pub const LIQUID_WATER: &str = "This planet's temperature might allow for liquid water!";
pub const EXTREME_STARLIGHT: &str = "This planet receives an extreme amount of starlight!";

pub const CROWDED_SYSTEM_NOTE: &str = "This star has an unusually high number of potential planets!";

const FAST_ORBIT_MAX_DAYS: f64 = 1.0;
const LARGE_RADIUS_MIN_EARTH: f64 = 15.0;
const TEMPERATE_RANGE_KELVIN: (f64, f64) = (200.0, 300.0);
const EXTREME_INSOLATION_MIN: f64 = 10_000.0;
const CROWDED_SYSTEM_MIN_PLANETS: usize = 5;

/// Fixed-threshold annotations for one candidate. All bounds are strict and
/// a rule with a missing input never fires.
pub fn interesting_features(row: &TceRow) -> Vec<String> {
    let mut features = Vec::new();

    if row.tce_period.is_some_and(|p| p < FAST_ORBIT_MAX_DAYS) {
        features.push(FAST_ORBIT.to_string());
    }
    if row.tce_prad.is_some_and(|r| r > LARGE_RADIUS_MIN_EARTH) {
        features.push(EXTREMELY_LARGE.to_string());
    }
    let (cold, hot) = TEMPERATE_RANGE_KELVIN;
    if row.tce_eqt.is_some_and(|t| cold < t && t < hot) {
        features.push(LIQUID_WATER.to_string());
    }
    if row.tce_insol.is_some_and(|s| s > EXTREME_INSOLATION_MIN) {
        features.push(EXTREME_STARLIGHT.to_string());
    }

    features
}

pub fn system_note(planet_count: usize) -> Option<String> {
    (planet_count > CROWDED_SYSTEM_MIN_PLANETS).then(|| CROWDED_SYSTEM_NOTE.to_string())
}
