//! CLI table setup example.
//!
//! Usage: `cargo run --example deal_table -- [hand_size] [players] [seed] [--round-robin]`

use std::env;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, DealOrder, Player, SetupOptions, Table, standard_deck};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let round_robin = take_flag(&mut args, "--round-robin");

    let defaults = SetupOptions::default();
    let Some(hand_size) = parse_arg(&args, 0, "hand_size", defaults.hand_size) else {
        return ExitCode::FAILURE;
    };
    let Some(players) = parse_arg(&args, 1, "players", defaults.players) else {
        return ExitCode::FAILURE;
    };
    let time_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let Some(seed) = parse_arg(&args, 2, "seed", time_seed) else {
        return ExitCode::FAILURE;
    };

    let order = if round_robin {
        DealOrder::RoundRobin
    } else {
        DealOrder::Block
    };
    let options = defaults
        .with_hand_size(hand_size)
        .with_players(players)
        .with_deal_order(order);

    let deck = standard_deck();
    let mut table = Table::new(options, seed);

    println!("Dealing {hand_size} card(s) to {players} player(s), seed {seed}, {order:?} order");
    match table.setup(&deck) {
        Ok(players) => {
            for player in &players {
                print_player(player);
            }
            let dealt = hand_size * players.len();
            println!("{} card(s) left undealt.", deck.len() - dealt);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Setup error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != flag);
    args.len() != before
}

fn parse_arg<T: FromStr>(args: &[String], index: usize, name: &str, default: T) -> Option<T> {
    let Some(raw) = args.get(index) else {
        return Some(default);
    };
    if let Ok(value) = raw.parse() {
        Some(value)
    } else {
        eprintln!("{name} must be a non-negative number, got {raw:?}");
        None
    }
}

fn print_player(player: &Player) {
    let marker = if player.current_turn { "*" } else { " " };
    let cards: Vec<&str> = player.hand.cards().iter().map(Card::as_str).collect();
    println!("{marker} Player {}: {}", player.id, cards.join(" "));
}
