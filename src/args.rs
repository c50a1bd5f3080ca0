use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "petits-plats")]
#[command(about = "Search and filter a static recipe collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Recipe data file (JSON array, {"recipes": [...]}, or recipes.js)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Settings file (defaults to ./petits-plats.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Search box and filter selections, applied in this order
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Search term (name, description, ingredients)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Required ingredient (repeatable)
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Required appliance (repeatable)
    #[arg(short, long = "appliance")]
    pub appliances: Vec<String>,

    /// Required utensil (repeatable)
    #[arg(short, long = "utensil")]
    pub utensils: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full HTML page for the filtered recipes
    Render {
        #[command(flatten)]
        filters: FilterArgs,

        /// Dropdown to render open (ingredients, appliances, ustensils)
        #[arg(long)]
        open: Option<String>,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the recipe count and the names of matching recipes
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the remaining options of one filter category
    Options {
        /// ingredients, appliances or ustensils
        category: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Narrow the options like the dropdown's text box
        #[arg(short, long)]
        query: Option<String>,
    },
}
