use crate::{
    auction::Auction,
    event::Event,
    event_log,
    shell::{Command, CommandError, Shell},
};
use anyhow::Result;
use std::sync::Arc;

fn run(shell: &mut Shell, line: &str) -> Result<Vec<String>> {
    Ok(shell.execute(line.parse::<Command>()?))
}

#[test]
fn same_name_is_same_bidder() {
    let mut shell = Shell::new(Auction::new().into_shared(), "$");

    let first = shell.bidder("alice");
    let again = shell.bidder("alice");
    let other = shell.bidder("bob");

    assert!(Arc::ptr_eq(&first, &again));
    assert!(!Arc::ptr_eq(&first, &other));
}

#[test]
fn drives_a_whole_session() -> Result<()> {
    let (event_writer, event_reader) = event_log::new_in_memory_shared();
    let mut shell = Shell::new(Auction::with_writer(event_writer).into_shared(), "£");

    assert!(run(&mut shell, "enter Painting")?.is_empty());
    assert!(run(&mut shell, "enter Vase")?.is_empty());
    assert_eq!(
        "enter".parse::<Command>(),
        Err(CommandError::Usage("enter <description>"))
    );
    assert!(run(&mut shell, "bid 1 alice 100")?.is_empty());
    assert!(run(&mut shell, "bid 1 alice 120")?.is_empty());
    assert_eq!(
        run(&mut shell, "lot 1")?,
        vec!["1: Painting    Bid: £120 (alice)".to_owned()]
    );
    assert_eq!(
        run(&mut shell, "remove 1")?,
        vec!["Could not remove lot number 1: lot number 1 already has a bid.".to_owned()]
    );
    assert_eq!(
        run(&mut shell, "rollover")?,
        vec!["Close the auction before rolling it over.".to_owned()]
    );
    assert_eq!(
        run(&mut shell, "unsold")?,
        vec!["2: Vase    (No bid)".to_owned()]
    );
    assert!(run(&mut shell, "close")?.is_empty());
    assert_eq!(
        run(&mut shell, "close")?,
        vec!["The auction is already closed.".to_owned()]
    );
    assert_eq!(
        run(&mut shell, "enter Lamp")?,
        vec!["Could not enter the lot: auction is closed.".to_owned()]
    );
    assert_eq!(
        run(&mut shell, "rollover")?,
        vec!["Started a new auction with 1 unsold lot(s); the next lot number is 3.".to_owned()]
    );
    assert!(shell.auction().lock().is_open());
    assert!(run(&mut shell, "enter Clock")?.is_empty());

    let events: Vec<_> = event_reader
        .read(event_reader.get_start_offset(), usize::MAX)?
        .data
        .into_iter()
        .map(|e| e.details)
        .collect();
    assert!(events.contains(&Event::BidAccepted {
        lot: 1,
        bidder: "alice".to_owned(),
        value: 120
    }));
    assert_eq!(
        events.last(),
        Some(&Event::LotEntered {
            lot: 3,
            description: "Clock".to_owned()
        })
    );
    Ok(())
}

#[test]
fn unsold_when_everything_has_a_bid() -> Result<()> {
    let mut shell = Shell::new(Auction::new().into_shared(), "$");
    run(&mut shell, "enter Painting")?;
    run(&mut shell, "bid 1 alice 1")?;

    assert_eq!(run(&mut shell, "unsold")?, vec!["Every lot has a bid.".to_owned()]);
    assert!(run(&mut shell, "help")?.len() > 1);
    Ok(())
}
