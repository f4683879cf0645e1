use anyhow::{Context, Result};
use clap::Parser;
use lot_auction::{
    logging,
    settings::Settings,
    shell::{Command, CommandError, ConsoleWriter, Shell, HELP},
    Auction,
};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "lot-auction")]
#[command(about = "Run a single-session lot auction from the console")]
struct Args {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    logging::init(&settings.log_filter, args.verbose);
    info!(?settings, "starting lot-auction");

    let auction = Auction::with_writer(ConsoleWriter::new_shared(&settings.currency)).into_shared();

    ctrlc::set_handler({
        let auction = auction.clone();
        move || {
            eprintln!("Closing the auction...");
            // already closed is fine, the listing is printed either way
            let _ = auction.lock().close();
            std::process::exit(0);
        }
    })
    .context("failed to install the Ctrl-C handler")?;

    let mut shell = Shell::new(auction, &settings.currency);
    for line in HELP {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line).context("failed to read a command")? == 0 {
            break;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                for reply in shell.execute(command) {
                    println!("{reply}");
                }
            }
            Err(CommandError::Empty) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    info!("leaving lot-auction");
    Ok(())
}
