//! Auction
//!
//! A single auction session: the lots on offer, their numbering, the
//! open/closed lifecycle and the rules deciding which bids are recorded.
//!
//! Every operation either succeeds or returns a [`Rejection`] naming the
//! condition that failed; a rejected call never changes any state. The
//! status lines an auction produces are written as [`Event`]s to its
//! event log writer.
mod bid;
mod lot;

pub use self::{bid::*, lot::*};

use crate::{
    event::Event,
    event_log::{self, SharedWriter},
};
use parking_lot::Mutex;
use std::{
    collections::{btree_map::Entry, BTreeMap},
    sync::Arc,
};
use thiserror::Error;
use tracing::{debug, info, warn};

pub type LotNumber = u32;
pub type Amount = u64;

/// Why an auction operation was not carried out
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("auction is closed")]
    Closed,
    #[error("lot description is missing")]
    MissingDescription,
    #[error("bid amount must be positive")]
    NonPositiveAmount,
    #[error("lot number {0} does not exist")]
    UnknownLot(LotNumber),
    #[error("bid is too low")]
    TooLow { highest: Amount },
    #[error("lot number {0} already has a bid")]
    LotHasBid(LotNumber),
    #[error("no lot numbers left in this auction")]
    LotNumbersExhausted,
}

/// An auction behind a lock, for callers on more than one thread
pub type SharedAuction = Arc<Mutex<Auction>>;

pub struct Auction {
    lots: BTreeMap<LotNumber, Lot>,
    next_lot_number: LotNumber,
    open: bool,
    events: SharedWriter,
}

impl Default for Auction {
    fn default() -> Self {
        Self::new()
    }
}

impl Auction {
    /// A fresh, open auction that reports through `tracing`
    pub fn new() -> Self {
        Self::with_writer(event_log::TracingWriter::new_shared())
    }

    pub fn with_writer(events: SharedWriter) -> Self {
        Self {
            lots: BTreeMap::new(),
            next_lot_number: 1,
            open: true,
            events,
        }
    }

    pub fn into_shared(self) -> SharedAuction {
        Arc::new(Mutex::new(self))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The number the next entered lot will get
    pub fn next_lot_number(&self) -> LotNumber {
        self.next_lot_number
    }

    /// All lots, in lot number order.
    pub fn lots(&self) -> impl Iterator<Item = &Lot> {
        self.lots.values()
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Enter a new lot, returning the number it was given
    ///
    /// Any present description is accepted, including an empty one.
    pub fn enter_lot(&mut self, description: Option<&str>) -> Result<LotNumber, Rejection> {
        if !self.open {
            return Err(Rejection::Closed);
        }
        let description = description.ok_or(Rejection::MissingDescription)?;

        let number = self.next_lot_number;
        let next = number
            .checked_add(1)
            .ok_or(Rejection::LotNumbersExhausted)?;
        self.lots.insert(number, Lot::new(number, description));
        self.next_lot_number = next;

        debug!(lot = number, description, "lot entered");
        self.events.write(&Event::LotEntered {
            lot: number,
            description: description.to_owned(),
        });
        Ok(number)
    }

    /// Bid `value` for lot `lot_number` on behalf of `bidder`
    ///
    /// Writes exactly one outcome event: either the new high bidder, or the
    /// failure together with the lot's current highest bid, if it has one.
    pub fn bid_for(
        &mut self,
        lot_number: LotNumber,
        bidder: &Arc<Person>,
        value: Amount,
    ) -> Result<(), Rejection> {
        let res = self.try_bid_for(lot_number, bidder, value);

        let event = match res {
            Ok(()) => {
                debug!(lot = lot_number, bidder = bidder.name(), value, "bid accepted");
                Event::BidAccepted {
                    lot: lot_number,
                    bidder: bidder.name().to_owned(),
                    value,
                }
            }
            Err(reason) => {
                debug!(lot = lot_number, bidder = bidder.name(), value, %reason, "bid rejected");
                Event::BidRejected {
                    lot: lot_number,
                    reason,
                    highest_bid: self
                        .lots
                        .get(&lot_number)
                        .and_then(Lot::highest_bid)
                        .map(Bid::value),
                }
            }
        };
        self.events.write(&event);

        res
    }

    fn try_bid_for(
        &mut self,
        lot_number: LotNumber,
        bidder: &Arc<Person>,
        value: Amount,
    ) -> Result<(), Rejection> {
        if self.get_lot(lot_number).is_none() {
            return Err(Rejection::UnknownLot(lot_number));
        }
        if !self.open {
            return Err(Rejection::Closed);
        }
        if value == 0 {
            return Err(Rejection::NonPositiveAmount);
        }

        self.lots
            .get_mut(&lot_number)
            .ok_or(Rejection::UnknownLot(lot_number))?
            .bid_for(Bid::new(bidder.clone(), value))
    }

    /// Look up a lot by number
    ///
    /// Only numbers that were handed out by this auction are considered.
    /// Writes a not-found event when there is no such lot.
    pub fn get_lot(&self, lot_number: LotNumber) -> Option<&Lot> {
        let lot = if self.is_assigned(lot_number) {
            self.lots.get(&lot_number)
        } else {
            None
        };

        if lot.is_none() {
            self.events.write(&Event::LotNotFound(lot_number));
        }
        lot
    }

    fn is_assigned(&self, lot_number: LotNumber) -> bool {
        1 <= lot_number && lot_number < self.next_lot_number
    }

    /// Close the auction
    ///
    /// The full listing is written first, whether or not the auction was
    /// still open. Closing is final.
    pub fn close(&mut self) -> Result<(), Rejection> {
        self.show_lots();

        if !self.open {
            return Err(Rejection::Closed);
        }
        self.open = false;

        info!(
            lots = self.lots.len(),
            unsold = self.lots.values().filter(|lot| !lot.has_bid()).count(),
            "auction closed"
        );
        self.events.write(&Event::Closed);
        Ok(())
    }

    /// Bid-free copies of every lot that has no bid yet, in number order
    pub fn unsold_lots(&self) -> Vec<Lot> {
        self.lots
            .values()
            .filter(|lot| !lot.has_bid())
            .map(Lot::fresh_copy)
            .collect()
    }

    /// Remove a lot that nobody has bid on yet
    ///
    /// The number of a removed lot is never handed out again.
    pub fn remove_lot(&mut self, number: LotNumber) -> Result<Lot, Rejection> {
        if !self.open {
            return Err(Rejection::Closed);
        }
        if !self.is_assigned(number) {
            return Err(Rejection::UnknownLot(number));
        }

        let lot = match self.lots.entry(number) {
            Entry::Vacant(_) => return Err(Rejection::UnknownLot(number)),
            Entry::Occupied(entry) if entry.get().has_bid() => {
                return Err(Rejection::LotHasBid(number))
            }
            Entry::Occupied(entry) => entry.remove(),
        };

        debug!(lot = number, "lot removed");
        self.events.write(&Event::LotRemoved(number));
        Ok(lot)
    }

    pub fn show_lots(&self) {
        self.events.write(&Event::Listing(
            self.lots.values().map(Lot::summary).collect(),
        ));
    }
}

/// Start a new auction from the unsold lots of `prior`
///
/// The new auction keeps the lot numbers of the carried lots and continues
/// numbering where `prior` stopped. A `prior` that is still open yields a
/// fresh empty auction numbering from 1.
pub fn rollover_from(prior: &Auction) -> Auction {
    let mut auction = Auction::with_writer(prior.events.clone());

    if prior.open {
        warn!("rollover from an auction that is still open, starting an empty auction");
        return auction;
    }

    auction.lots = prior
        .unsold_lots()
        .into_iter()
        .map(|lot| (lot.number(), lot))
        .collect();
    auction.next_lot_number = prior.next_lot_number;

    info!(
        carried = auction.lots.len(),
        next_lot_number = auction.next_lot_number,
        "auction rolled over"
    );
    auction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_out_of_lot_numbers_is_a_rejection() {
        let mut auction = Auction::new();
        auction.next_lot_number = LotNumber::MAX - 1;

        assert_eq!(auction.enter_lot(Some("Painting")), Ok(LotNumber::MAX - 1));
        assert_eq!(
            auction.enter_lot(Some("Vase")),
            Err(Rejection::LotNumbersExhausted)
        );
        assert_eq!(auction.len(), 1);
        assert_eq!(auction.next_lot_number(), LotNumber::MAX);
    }
}
