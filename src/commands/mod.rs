//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against a snippet repository.

pub mod add;
pub mod config;
pub mod delete;
pub mod favorite;
pub mod list;
pub mod search;
pub mod seed;
pub mod show;
pub mod tag;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use config::execute as config;
pub use delete::execute as delete;
pub use favorite::execute as favorite;
pub use list::execute as list;
pub use search::execute as search;
pub use seed::execute as seed;
pub use show::execute as show;
pub use tag::execute as tag;
