//! Console shell
//!
//! A line-oriented command interpreter driving one shared auction. Status
//! messages from the auction itself are printed by a [`ConsoleWriter`];
//! [`Shell::execute`] only returns what the auction does not report.
use crate::{
    auction::{self, Amount, LotNumber, Person, Rejection, SharedAuction},
    event::Event,
    event_log::{SharedWriter, Writer},
};
use std::{collections::HashMap, str::FromStr, sync::Arc};
use thiserror::Error;
use tracing::debug;

pub const HELP: &[&str] = &[
    "Commands:",
    "  enter <description>          enter a new lot",
    "  bid <lot> <bidder> <amount>  bid for a lot",
    "  lot <lot>                    show one lot",
    "  show                         show all lots",
    "  remove <lot>                 remove a lot that has no bid",
    "  close                        close the auction",
    "  unsold                       list lots without a bid",
    "  rollover                     start a new auction from the unsold lots",
    "  help                         show this help",
    "  quit                         leave",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Enter(String),
    Bid {
        lot: LotNumber,
        bidder: String,
        value: Amount,
    },
    Lot(LotNumber),
    Show,
    Remove(LotNumber),
    Close,
    Unsold,
    Rollover,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((line, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let no_args = |command: Command, usage: &'static str| {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::Usage(usage))
            }
        };

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "enter" if rest.is_empty() => Err(CommandError::Usage("enter <description>")),
            "enter" => Ok(Command::Enter(rest.to_owned())),
            "bid" => match args.as_slice() {
                [lot, bidder, value] => Ok(Command::Bid {
                    lot: parse_number("lot number", lot)?,
                    bidder: (*bidder).to_owned(),
                    value: parse_number("amount", value)?,
                }),
                _ => Err(CommandError::Usage("bid <lot> <bidder> <amount>")),
            },
            "lot" => match args.as_slice() {
                [lot] => Ok(Command::Lot(parse_number("lot number", lot)?)),
                _ => Err(CommandError::Usage("lot <lot>")),
            },
            "remove" => match args.as_slice() {
                [lot] => Ok(Command::Remove(parse_number("lot number", lot)?)),
                _ => Err(CommandError::Usage("remove <lot>")),
            },
            "show" => no_args(Command::Show, "show"),
            "close" => no_args(Command::Close, "close"),
            "unsold" => no_args(Command::Unsold, "unsold"),
            "rollover" => no_args(Command::Rollover, "rollover"),
            "help" => no_args(Command::Help, "help"),
            "quit" | "exit" => no_args(Command::Quit, "quit"),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

/// Prints auction events to stdout
pub struct ConsoleWriter {
    currency: String,
}

impl ConsoleWriter {
    pub fn new_shared(currency: &str) -> SharedWriter {
        Arc::new(Self {
            currency: currency.to_owned(),
        })
    }
}

impl Writer for ConsoleWriter {
    fn write(&self, event: &Event) {
        for line in event.lines(&self.currency) {
            println!("{line}");
        }
    }
}

pub struct Shell {
    auction: SharedAuction,
    bidders: HashMap<String, Arc<Person>>,
    currency: String,
}

impl Shell {
    pub fn new(auction: SharedAuction, currency: &str) -> Self {
        Self {
            auction,
            bidders: HashMap::new(),
            currency: currency.to_owned(),
        }
    }

    pub fn auction(&self) -> &SharedAuction {
        &self.auction
    }

    /// The person known by `name`, registering them on first use
    pub fn bidder(&mut self, name: &str) -> Arc<Person> {
        self.bidders
            .entry(name.to_owned())
            .or_insert_with(|| Person::new_shared(name))
            .clone()
    }

    /// Run `command`, returning lines for the user
    ///
    /// `Quit` is left to the caller and does nothing here.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        debug!(?command, "executing");
        match command {
            Command::Enter(description) => {
                match self.auction.lock().enter_lot(Some(&description)) {
                    Ok(_) => vec![],
                    Err(e) => vec![format!("Could not enter the lot: {e}.")],
                }
            }
            Command::Bid { lot, bidder, value } => {
                let bidder = self.bidder(&bidder);
                // the auction reports the outcome itself
                let _ = self.auction.lock().bid_for(lot, &bidder, value);
                vec![]
            }
            Command::Lot(number) => self
                .auction
                .lock()
                .get_lot(number)
                .map(|lot| vec![lot.summary().line(&self.currency)])
                .unwrap_or_default(),
            Command::Show => {
                self.auction.lock().show_lots();
                vec![]
            }
            Command::Remove(number) => match self.auction.lock().remove_lot(number) {
                Ok(_) => vec![],
                Err(e) => vec![format!("Could not remove lot number {number}: {e}.")],
            },
            Command::Close => match self.auction.lock().close() {
                Ok(()) => vec![],
                Err(Rejection::Closed) => vec!["The auction is already closed.".to_owned()],
                Err(e) => vec![format!("Could not close the auction: {e}.")],
            },
            Command::Unsold => {
                let unsold = self.auction.lock().unsold_lots();
                if unsold.is_empty() {
                    vec!["Every lot has a bid.".to_owned()]
                } else {
                    unsold
                        .iter()
                        .map(|lot| lot.summary().line(&self.currency))
                        .collect()
                }
            }
            Command::Rollover => {
                let mut current = self.auction.lock();
                if current.is_open() {
                    return vec!["Close the auction before rolling it over.".to_owned()];
                }
                *current = auction::rollover_from(&current);
                vec![format!(
                    "Started a new auction with {} unsold lot(s); the next lot number is {}.",
                    current.len(),
                    current.next_lot_number()
                )]
            }
            Command::Help => HELP.iter().map(|line| (*line).to_owned()).collect(),
            Command::Quit => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            "  enter  Old oak chest ".parse::<Command>(),
            Ok(Command::Enter("Old oak chest".to_owned()))
        );
        assert_eq!(
            "enter   ".parse::<Command>(),
            Err(CommandError::Usage("enter <description>"))
        );
        assert_eq!(
            "BID 2 alice 150".parse::<Command>(),
            Ok(Command::Bid {
                lot: 2,
                bidder: "alice".to_owned(),
                value: 150
            })
        );
        assert_eq!("lot 4".parse::<Command>(), Ok(Command::Lot(4)));
        assert_eq!("remove 1".parse::<Command>(), Ok(Command::Remove(1)));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "sell 1".parse::<Command>(),
            Err(CommandError::Unknown("sell".to_owned()))
        );
        assert_eq!(
            "bid 1 alice".parse::<Command>(),
            Err(CommandError::Usage("bid <lot> <bidder> <amount>"))
        );
        assert_eq!(
            "bid 1 alice -5".parse::<Command>(),
            Err(CommandError::InvalidNumber {
                field: "amount",
                value: "-5".to_owned()
            })
        );
        assert_eq!("show all".parse::<Command>(), Err(CommandError::Usage("show")));
    }
}
