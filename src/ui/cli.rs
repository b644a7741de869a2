use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "passkeep",
    about = "Generate and keep website passwords",
    version = "2.0.0"
)]
#[command(long_about = "A small local password keeper: generate passwords under a \
configurable policy and record them per website in a single JSON file.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Save a credential for a website")]
    Add {
        #[arg(help = "Website name, e.g. github.com")]
        site: String,
        #[arg(
            short = 'i',
            long,
            default_value = "",
            help = "Email or username for the account"
        )]
        identity: String,
        #[arg(
            short = 'g',
            long,
            help = "Generate the password instead of prompting for one"
        )]
        generate: bool,
    },

    #[command(about = "Look up the credential saved for a website")]
    Find {
        #[arg(help = "Website name to look up")]
        site: String,
        #[arg(
            short = 'c',
            long = "clip",
            help = "Copy the password to the clipboard instead of printing it"
        )]
        clip: bool,
    },

    #[command(about = "Generate passwords without saving anything")]
    Gen {
        #[arg(
            short = 'n',
            long,
            default_value = "1",
            help = "Number of passwords to generate"
        )]
        count: usize,
        #[arg(short = 'c', long = "clip", help = "Also copy the password to the clipboard")]
        clip: bool,
    },

    #[command(about = "List stored websites")]
    List,

    #[command(about = "Manage configuration settings")]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    #[command(about = "Show current configuration")]
    Show,

    #[command(about = "Set the count range for a character class")]
    SetRange {
        #[arg(help = "Character class: letters, digits, or symbols")]
        class: String,
        #[arg(help = "Minimum count (inclusive)")]
        min: usize,
        #[arg(help = "Maximum count (inclusive)")]
        max: usize,
    },

    #[command(about = "Set the credential store file path")]
    SetStore {
        #[arg(help = "Path to the store file")]
        path: PathBuf,
    },
}
