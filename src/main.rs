use clap::Parser;
use log::{debug, info};
use std::fs;

use petits_plats::render::render_page;
use petits_plats::{load_recipes, AppError, Command, FilterCategory, Session, Settings};

mod args;
use args::{Cli, Commands, FilterArgs};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    debug!("{:#?}", settings);

    let data_path = cli.data.clone().unwrap_or_else(|| settings.data_path.clone());
    let recipes = load_recipes(&data_path)?;
    let mut session = Session::new(recipes, settings);

    match cli.command {
        Commands::Render {
            filters,
            open,
            output,
        } => {
            let mut commands = filter_commands(&filters);
            if let Some(open) = open {
                commands.push(Command::ToggleDropdown(open.parse()?));
            }
            session.dispatch_all(commands);
            let view = session.view();
            let page = render_page(&view, session.settings());

            match output {
                Some(path) => {
                    fs::write(&path, page)?;
                    info!("Wrote {} recipes to {}", view.count(), path.display());
                }
                None => print!("{}", page),
            }
        }
        Commands::List { filters } => {
            let view = session.dispatch_all(filter_commands(&filters));
            println!("{}", view.count());
            for recipe in &view.visible {
                println!("{}", recipe.name);
            }
        }
        Commands::Options {
            category,
            filters,
            query,
        } => {
            let category: FilterCategory = category.parse()?;
            let mut commands = filter_commands(&filters);
            if let Some(query) = query {
                commands.push(Command::SetDropdownQuery { category, query });
            }
            let view = session.dispatch_all(commands);
            if let Some(dropdown) = view.dropdown(category) {
                for value in &dropdown.available {
                    println!("{}", value);
                }
            }
        }
    }

    Ok(())
}

fn filter_commands(filters: &FilterArgs) -> Vec<Command> {
    let mut commands = Vec::new();

    if let Some(term) = &filters.search {
        commands.push(Command::search(term.as_str()));
    }

    let selections = [
        (FilterCategory::Ingredients, &filters.ingredients),
        (FilterCategory::Appliances, &filters.appliances),
        (FilterCategory::Utensils, &filters.utensils),
    ];
    for (category, values) in selections {
        commands.extend(values.iter().map(|v| Command::select(category, v.as_str())));
    }

    commands
}
