//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use evtracker_core::HeldItem;

#[derive(Parser, Debug)]
#[command(name = "ev")]
#[command(version)]
#[command(about = "A small utility for keeping track of Effort Values while training Pokemon")]
pub struct Cli {
    /// Location of the file tracking information is saved to.
    /// Defaults to .ev-tracker in your home directory
    #[arg(long = "infile", short = 'i', value_name = "FILE")]
    pub tracker: Option<PathBuf>,

    /// Location of the species database
    #[arg(long, value_name = "FILE")]
    pub pokedex: Option<PathBuf>,

    /// Configuration file
    #[arg(long, env = "EV_TRACKER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List Effort Values for a Pokemon species
    Ev {
        /// Name or number of the species to search for
        species: String,
    },

    /// List tracked Pokemon
    List,

    /// Add a Pokemon to track
    Track {
        /// Name or number of the species to track
        species: String,
        /// Nickname of the Pokemon
        #[arg(long, short = 'n')]
        name: Option<String>,
        /// Held item, e.g. "Macho Brace" or "Power Anklet"
        #[arg(long, short = 'i')]
        item: Option<HeldItem>,
        /// The Pokemon has Pokerus
        #[arg(long, short = 'p')]
        pokerus: bool,
    },

    /// Show or switch the active Pokemon
    Active {
        /// Id of the tracked Pokemon to make active
        #[arg(long, short = 's')]
        switch: Option<u32>,
    },

    /// Show the status of a tracked Pokemon (the active one by default)
    Status {
        #[arg(long, short = 'i')]
        id: Option<u32>,
    },

    /// Record battles against a species for a tracked Pokemon
    Battle {
        /// Name or number of the species defeated
        species: String,
        /// Tracked Pokemon that battled (the active one by default)
        #[arg(long, short = 'i')]
        id: Option<u32>,
        /// Number of defeats to record
        #[arg(long, short = 'c', default_value_t = 1)]
        count: u32,
    },

    /// Update a tracked Pokemon's details
    Update {
        /// Tracked Pokemon to update (the active one by default)
        #[arg(long)]
        id: Option<u32>,
        /// New nickname
        #[arg(long, short = 'n')]
        name: Option<String>,
        /// New held item
        #[arg(long, short = 'i', conflicts_with = "no_item")]
        item: Option<HeldItem>,
        /// Remove the held item
        #[arg(long)]
        no_item: bool,
        /// Mark the Pokemon as having Pokerus
        #[arg(long, short = 'p', conflicts_with = "no_pokerus")]
        pokerus: bool,
        /// Mark the Pokemon as not having Pokerus
        #[arg(long)]
        no_pokerus: bool,
    },

    /// Stop tracking a Pokemon
    Release {
        id: u32,
    },

    /// Replace the species database with the contents of a CSV file
    Import {
        /// Header-less CSV: id,name,hp,attack,defense,sp.attack,sp.defense,speed[,form]
        csv: PathBuf,
    },
}
