use crate::auction::{Amount, LotNumber, Rejection};
use std::fmt;

pub const DEFAULT_CURRENCY: &str = "$";

/// Status messages an auction produces as it is operated
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    LotEntered {
        lot: LotNumber,
        description: String,
    },
    /// A bid was recorded and `bidder` is now the high bidder
    BidAccepted {
        lot: LotNumber,
        bidder: String,
        value: Amount,
    },
    /// A bid was refused; `highest_bid` is the lot's standing bid, if any
    BidRejected {
        lot: LotNumber,
        reason: Rejection,
        highest_bid: Option<Amount>,
    },
    LotNotFound(LotNumber),
    LotRemoved(LotNumber),
    /// All lots of the auction, in number order
    Listing(Vec<LotSummary>),
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LotSummary {
    pub number: LotNumber,
    pub description: String,
    pub highest_bid: Option<HighBid>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighBid {
    pub bidder: String,
    pub value: Amount,
}

impl LotSummary {
    pub fn line(&self, currency: &str) -> String {
        match &self.highest_bid {
            Some(HighBid { bidder, value }) => format!(
                "{}: {}    Bid: {currency}{value} ({bidder})",
                self.number, self.description
            ),
            None => format!("{}: {}    (No bid)", self.number, self.description),
        }
    }
}

impl Event {
    /// Human-readable lines for this event, amounts prefixed with `currency`
    pub fn lines(&self, currency: &str) -> Vec<String> {
        match self {
            Event::LotEntered { lot, description } => {
                vec![format!("Lot number {lot} entered: {description}")]
            }
            Event::BidAccepted { lot, bidder, value } => vec![
                format!("The bid for lot number {lot} was successful."),
                format!("The high bidder is now {bidder} with a bid of {currency}{value}."),
            ],
            Event::BidRejected {
                lot,
                reason,
                highest_bid,
            } => {
                let mut lines = vec![format!(
                    "The bid for lot number {lot} was NOT successful: {reason}."
                )];
                if let Some(highest) = highest_bid {
                    lines.push(format!(
                        "Lot number {lot} already has a bid of {currency}{highest}."
                    ));
                }
                lines
            }
            Event::LotNotFound(lot) => vec![format!("Lot number {lot} does not exist.")],
            Event::LotRemoved(lot) => vec![format!("Lot number {lot} was removed.")],
            Event::Listing(lots) if lots.is_empty() => {
                vec!["There are no lots in the auction yet!".to_owned()]
            }
            Event::Listing(lots) => lots.iter().map(|lot| lot.line(currency)).collect(),
            Event::Closed => vec!["The auction is now closed.".to_owned()],
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines(DEFAULT_CURRENCY).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_bid_mentions_standing_bid_only_when_present() {
        let without = Event::BidRejected {
            lot: 2,
            reason: Rejection::NonPositiveAmount,
            highest_bid: None,
        };
        assert_eq!(without.lines("$").len(), 1);

        let with = Event::BidRejected {
            lot: 2,
            reason: Rejection::TooLow { highest: 100 },
            highest_bid: Some(100),
        };
        assert_eq!(
            with.lines("€"),
            vec![
                "The bid for lot number 2 was NOT successful: bid is too low.".to_owned(),
                "Lot number 2 already has a bid of €100.".to_owned(),
            ]
        );
    }

    #[test]
    fn accepted_bid_names_lot_bidder_and_amount() {
        let accepted = Event::BidAccepted {
            lot: 1,
            bidder: "Alice".to_owned(),
            value: 100,
        };
        assert_eq!(
            accepted.lines(DEFAULT_CURRENCY),
            vec![
                "The bid for lot number 1 was successful.".to_owned(),
                "The high bidder is now Alice with a bid of $100.".to_owned(),
            ]
        );
    }

    #[test]
    fn not_found_and_closed_lines() {
        assert_eq!(Event::LotNotFound(9).to_string(), "Lot number 9 does not exist.");
        assert_eq!(Event::Closed.to_string(), "The auction is now closed.");
    }

    #[test]
    fn empty_listing_says_so() {
        assert_eq!(
            Event::Listing(vec![]).to_string(),
            "There are no lots in the auction yet!"
        );
    }
}
