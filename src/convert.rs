use std::fs;
use std::path::Path;
use crate::card::{self, CardKind};
use crate::error::{Error, Result};
use crate::lnmpln::FlightPlan;
use crate::paginate;
use crate::summary;

/// What a conversion left in the output directory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Report {
    pub awc_files: usize,
    pub adc_files: usize,
    pub vor_waypoints: usize,
}

/// Writes the AWC cards, the ADC cards (only when the plan has VORs) and the
/// `.TXT` cross reference for `plan` into `dir`.
pub fn convert(plan: &FlightPlan, dir: &Path, drop_first: bool) -> Result<Report> {
    fs::create_dir_all(dir).map_err(|source| Error::Output {
        path: dir.display().to_string(),
        source,
    })?;
    let name = plan.name();

    // Waypoint cards
    let awc = paginate::paginate(&plan.waypoints, &name, drop_first)?;
    let awc_files = card::write_cards(dir, &awc, CardKind::Primary)?;

    // DME cards
    let adc = paginate::paginate_vor(&plan.waypoints, &name)?;
    let adc_files = if adc.is_empty() {
        0
    } else {
        card::write_cards(dir, &adc, CardKind::Auxiliary)?
    };

    summary::write(dir, &name, &summary::render(&awc, &adc))?;

    Ok(Report {
        awc_files,
        adc_files,
        vor_waypoints: plan.vor_count(),
    })
}
