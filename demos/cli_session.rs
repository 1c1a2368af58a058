//! Session statistics demo.
//!
//! Usage: `cli_session [ROUNDS] [BET] [SEED]`

#![allow(clippy::missing_docs_in_private_items)]

use core::str::FromStr;
use std::env;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{Session, SessionOptions};

fn main() {
    let mut args = env::args().skip(1);

    let rounds = match args.next() {
        Some(arg) => parse_or_exit(&arg, "ROUNDS"),
        None => SessionOptions::default().rounds,
    };
    let bet = match args.next() {
        Some(arg) => parse_or_exit(&arg, "BET"),
        None => SessionOptions::default().bet,
    };
    let seed = match args.next() {
        Some(arg) => parse_or_exit(&arg, "SEED"),
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
    };

    let options = SessionOptions::default().with_rounds(rounds).with_bet(bet);
    let mut session = Session::new(options, seed);

    let report = match session.run() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    const WIDTH: usize = 40;
    const NUM_WIDTH: usize = 20;

    println!("{:-^width$}", " session ", width = WIDTH + NUM_WIDTH);
    println!("{:<WIDTH$}{:>NUM_WIDTH$}", "rounds played", report.rounds());
    println!("{:<WIDTH$}{:>NUM_WIDTH$}", "seed", seed);
    println!("{:<WIDTH$}{:>NUM_WIDTH$}", "wins", report.summary.wins);
    println!(
        "{:<WIDTH$}{:>NUM_WIDTH$}",
        "player blackjacks", report.summary.blackjacks
    );
    println!("{:<WIDTH$}{:>NUM_WIDTH$}", "draws", report.summary.draws);
    println!("{:<WIDTH$}{:>NUM_WIDTH$}", "losses", report.summary.losses);
    println!(
        "{:<WIDTH$}{:>NUM_WIDTH$}",
        "mixed split rounds", report.summary.mixed
    );
    println!(
        "{:<WIDTH$}{:>NUM_WIDTH$}",
        "unsettled split rounds", report.summary.stood
    );
    println!(
        "{:<WIDTH$}{:>NUM_WIDTH$.2}",
        "total staked",
        report.final_stake()
    );
    println!(
        "{:<WIDTH$}{:>NUM_WIDTH$.2}",
        "gross return",
        report.final_return()
    );
    println!("{}", "-".repeat(WIDTH + NUM_WIDTH));
}

fn parse_or_exit<T: FromStr>(arg: &str, name: &str) -> T {
    match arg.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("error: invalid {name}: {arg}");
            eprintln!("usage: cli_session [ROUNDS] [BET] [SEED]");
            process::exit(1);
        }
    }
}
