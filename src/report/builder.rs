use crate::archive::TceRow;

use super::features::{interesting_features, system_note};
use super::format;
use super::model::{PlanetReport, SystemReport};

pub const LAST_UPDATE: &str = "Data from Q1-Q17 DR25 TCE catalog";

/// Shape archive rows into a report. The star is described by the first
/// row; `smart_summary` is left empty for the summarize stage.
#[tracing::instrument(
    name = "report build",
    skip(rows),
    fields(
        report.planets = rows.len(),
        report.system_note,
    )
)]
pub fn build_report(kepid: i64, rows: &[TceRow]) -> SystemReport {
    let star = rows.first().cloned().unwrap_or_default();

    let potential_planets: Vec<PlanetReport> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| planet_report(index, row))
        .collect();

    let note = system_note(potential_planets.len());
    tracing::Span::current().record("report.system_note", note.is_some());

    SystemReport {
        star_system: format!("Kepler-{kepid}"),
        number_of_planets: potential_planets.len(),
        star_temperature: format::star_temperature(star.tce_steff),
        star_size: format::star_size(star.tce_sradius),
        star_mass: format::star_mass(star.tce_smass),
        star_age: format::star_age(star.tce_sage),
        ra_dec: format::ra_dec(star.ra, star.dec),
        potential_planets,
        system_note: note,
        discovery_date: format::discovery_date(star.tce_time0bk.as_ref()),
        last_update: LAST_UPDATE.to_string(),
        smart_summary: String::new(),
    }
}

fn planet_report(index: usize, row: &TceRow) -> PlanetReport {
    PlanetReport {
        planet_number: row
            .tce_plnt_num
            .map(|n| n as i64)
            .unwrap_or(index as i64 + 1),
        orbit: format::orbit(row.tce_period),
        size: format::size(row.tce_prad),
        temperature: format::temperature(row.tce_eqt),
        sunlight_received: format::sunlight_received(row.tce_insol),
        transit_duration: format::transit_duration(row.tce_duration),
        transit_depth: format::transit_depth(row.tce_depth),
        detection_snr: row.tce_model_snr,
        impact_parameter: row.tce_impact,
        interesting_features: interesting_features(row),
    }
}
