use std::collections::HashMap;
use std::path::Path;
use itertools::Itertools;
use crate::card::{self, Page};
use crate::error::Result;

static HEADER: &[&str] = &[
    " AWC                                   ADC",
    " #/#  WAYPOINT  POSITION               #/#   FREQ",
    "-------------------------------------------------",
];

/// Card slots keyed by route index: (position, 1-based card number).
fn slots(pages: &[Page]) -> HashMap<usize, (u8, usize)> {
    pages
        .iter()
        .enumerate()
        .flat_map(|(card, page)| page.records.iter().map(move |r| (r.waypoint, (r.position, card + 1))))
        .collect()
}

/// Cross reference of every AWC slot and, for VORs, the matching ADC slot.
/// Rows of consecutive AWC cards are separated by a blank line.
pub fn render(awc: &[Page], adc: &[Page]) -> Vec<String> {
    let adc = slots(adc);
    let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();

    let rows = awc
        .iter()
        .enumerate()
        .flat_map(|(card, page)| page.records.iter().map(move |r| (card + 1, r)));

    for (card, group) in &rows.group_by(|&(card, _)| card) {
        if card > 1 {
            lines.push(String::new());
        }
        for (_, r) in group {
            let adc_slot = match adc.get(&r.waypoint) {
                Some((pos, adc_card)) => format!("{}/{}", pos, adc_card),
                None => "-/-".to_owned(),
            };
            lines.push(format!(
                " {}/{}  {:<5.5}     {} {}   {}   ",
                r.position, card, r.ident, r.latitude, r.longitude, adc_slot
            ));
        }
    }

    lines
}

pub fn write(dir: &Path, name: &str, lines: &[String]) -> Result<()> {
    card::write_lines(&dir.join(format!("{}.TXT", name)), lines)
}
