pub mod command;
pub mod config;
pub mod dropdown;
pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod options;
pub mod render;
pub mod session;
pub mod store;

pub use command::Command;
pub use config::Settings;
pub use engine::compute_visible;
pub use error::{AppError, Result};
pub use filter::{FilterCategory, FilterState, Tag};
pub use model::{Ingredient, Recipe};
pub use options::unique_values;
pub use session::{DropdownView, Session, View};
pub use store::{load_recipes, parse_recipes};
