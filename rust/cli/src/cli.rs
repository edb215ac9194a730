//! Command-line definitions for the `hilo` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hilo", version, about = "Hi-Lo card game chat-bot")]
pub struct HiloCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively: type chat commands such as `!dealer spades Q`
    Play {
        /// Write a JSONL transcript of every reveal to this file
        #[arg(long)]
        transcript: Option<String>,
    },
    /// Self-play a shuffled deck through the bot
    Sim {
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many player rounds (default: until the deck runs out)
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        transcript: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
