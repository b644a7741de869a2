use clap::Parser;
use passkeep::{
    commands::add::Add,
    commands::config::ConfigCmd,
    commands::find::Find,
    commands::gen::Gen,
    commands::list::List,
    ui::cli::{Cli, Commands, ConfigAction},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            site,
            identity,
            generate,
        } => Add::new(site, identity, generate),
        Commands::Find { site, clip } => Find::new(site, clip),
        Commands::Gen { count, clip } => Gen::new(count, clip),
        Commands::List => List::new(),
        Commands::Config { action } => match action {
            Some(ConfigAction::SetRange { class, min, max }) => {
                ConfigCmd::set_range(class, min, max)
            }
            Some(ConfigAction::SetStore { path }) => ConfigCmd::set_store(path),
            Some(ConfigAction::Show) | None => ConfigCmd::show(),
        },
    }
}
