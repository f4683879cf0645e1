use super::{Bid, LotNumber, Rejection};
use crate::event::{HighBid, LotSummary, DEFAULT_CURRENCY};
use std::fmt;

/// One item for sale, holding its current highest bid
#[derive(Debug)]
pub struct Lot {
    number: LotNumber,
    description: String,
    highest_bid: Option<Bid>,
}

impl Lot {
    pub fn new(number: LotNumber, description: impl Into<String>) -> Self {
        Self {
            number,
            description: description.into(),
            highest_bid: None,
        }
    }

    pub fn number(&self) -> LotNumber {
        self.number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn highest_bid(&self) -> Option<&Bid> {
        self.highest_bid.as_ref()
    }

    pub fn has_bid(&self) -> bool {
        self.highest_bid.is_some()
    }

    /// Record `bid` if it beats the current highest bid
    ///
    /// Only a strictly greater value replaces an existing bid. A rejected
    /// bid leaves the lot untouched.
    pub fn bid_for(&mut self, bid: Bid) -> Result<(), Rejection> {
        if let Some(highest) = &self.highest_bid {
            if !highest.is_outbid_by(bid.value()) {
                return Err(Rejection::TooLow {
                    highest: highest.value(),
                });
            }
        }
        self.highest_bid = Some(bid);
        Ok(())
    }

    /// Same number and description, no bid.
    pub fn fresh_copy(&self) -> Self {
        Self::new(self.number, self.description.clone())
    }

    pub fn summary(&self) -> LotSummary {
        LotSummary {
            number: self.number,
            description: self.description.clone(),
            highest_bid: self.highest_bid.as_ref().map(|bid| HighBid {
                bidder: bid.bidder().name().to_owned(),
                value: bid.value(),
            }),
        }
    }
}

impl fmt::Display for Lot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary().line(DEFAULT_CURRENCY))
    }
}
