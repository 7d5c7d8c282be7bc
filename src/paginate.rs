use std::mem;
use tracing::debug;
use crate::card::{CardRecord, Page};
use crate::error::{Error, Result};
use crate::lnmpln::Waypoint;

/// Slots on a card; positions run 1 through 9.
pub const CARD_SLOTS: usize = 9;

/// Position printed in the first column of a card line, cycling 1..9.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PositionCounter(u8);

impl PositionCounter {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = CARD_SLOTS as u8;

    pub fn new(start: u8) -> Result<Self> {
        if start < Self::FIRST || start > Self::LAST {
            return Err(Error::InvalidPosition { position: start });
        }
        Ok(PositionCounter(start))
    }

    pub fn current(self) -> u8 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = if self.0 == Self::LAST { Self::FIRST } else { self.0 + 1 };
    }
}

impl Default for PositionCounter {
    fn default() -> Self {
        PositionCounter(Self::FIRST)
    }
}

#[derive(Debug, Default)]
struct Pager {
    pages: Vec<Vec<CardRecord>>,
    current: Vec<CardRecord>,
}

impl Pager {
    fn push(&mut self, record: CardRecord) {
        self.current.push(record);
    }

    fn len(&self) -> usize {
        self.current.len()
    }

    fn closed(&self) -> usize {
        self.pages.len()
    }

    // Never emits an empty card
    fn close(&mut self) {
        if self.current.is_empty() {
            return;
        }
        debug!(card = self.pages.len() + 1, records = self.current.len(), "closed card");
        self.pages.push(mem::take(&mut self.current));
    }

    fn into_pages(mut self, name: &str) -> Vec<Page> {
        self.close();
        let numbered = self.pages.len() > 1;
        self.pages
            .into_iter()
            .enumerate()
            .map(|(idx, records)| Page {
                name: if numbered { format!("{}_{}", name, idx + 1) } else { name.to_owned() },
                records,
            })
            .collect()
    }
}

/// Splits the route into AWC cards.
///
/// With `drop_first` the departure waypoint is left off, the first card
/// starts at position 2 and holds 8 waypoints. Otherwise the first card
/// starts at position 1 and holds 9. Every later card holds 9. The counter
/// runs on across cards, so each card after the first starts at position 1.
pub fn paginate(waypoints: &[Waypoint], name: &str, drop_first: bool) -> Result<Vec<Page>> {
    let (start, first_capacity) = if drop_first {
        (2, CARD_SLOTS - 1)
    } else {
        (PositionCounter::FIRST, CARD_SLOTS)
    };
    let capacity = |card: usize| if card == 0 { first_capacity } else { CARD_SLOTS };

    let mut counter = PositionCounter::new(start)?;
    let mut pager = Pager::default();
    let last = waypoints.len().saturating_sub(1);

    for (idx, waypoint) in waypoints.iter().enumerate() {
        if drop_first && idx == 0 {
            continue;
        }

        pager.push(CardRecord::new(counter.current(), idx, waypoint));
        counter.advance();

        if pager.len() == capacity(pager.closed()) || idx == last {
            pager.close();
        }
    }

    Ok(pager.into_pages(name))
}

/// Splits the VOR waypoints of the route into ADC cards of 9, each starting
/// at position 1. Non VOR waypoints are skipped but still end the route.
pub fn paginate_vor(waypoints: &[Waypoint], name: &str) -> Result<Vec<Page>> {
    let mut counter = PositionCounter::default();
    let mut pager = Pager::default();
    let last = waypoints.len().saturating_sub(1);

    for (idx, waypoint) in waypoints.iter().enumerate() {
        if waypoint.is_vor {
            pager.push(CardRecord::new(counter.current(), idx, waypoint));
            counter.advance();

            if pager.len() == CARD_SLOTS {
                pager.close();
                counter = PositionCounter::default();
                continue;
            }
        }

        if idx == last {
            pager.close();
        }
    }

    Ok(pager.into_pages(name))
}
