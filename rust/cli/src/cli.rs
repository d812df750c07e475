//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    about = "Blackjack against the house dealer",
    version
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds against the dealer
    Play(PlayArgs),
    /// Deal one opening hand and show it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        decks: Option<usize>,
    },
    /// Show the effective configuration and where each value came from
    Cfg,
}

#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Number of rounds to play (default: 1)
    #[arg(long)]
    pub rounds: Option<u32>,
    /// RNG seed for a reproducible shoe
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of 52-card decks in the shoe
    #[arg(long)]
    pub decks: Option<usize>,
    /// Starting balance
    #[arg(long)]
    pub balance: Option<u32>,
    /// Bet this amount every round instead of prompting
    #[arg(long)]
    pub bet: Option<u32>,
    /// Let the house rule (hit below 17) play your hand
    #[arg(long)]
    pub auto: bool,
    /// Print each settled round as a JSON line
    #[arg(long)]
    pub json: bool,
}
