//! A single-session lot auction
//!
//! [`auction::Auction`] holds the lots and enforces the bidding rules;
//! everything it has to say goes to an [`event_log`] writer. The
//! `lot-auction` binary wraps it in a console [`shell`].
pub mod auction;
pub mod event;
pub mod event_log;
pub mod logging;
pub mod settings;
pub mod shell;

pub use auction::{rollover_from, Auction, Bid, Lot, Person, Rejection, SharedAuction};
