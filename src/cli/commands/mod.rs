//! One module per subcommand, each exposing an `execute` function.

pub mod completions;
pub mod copy;
pub mod delete;
pub mod generate;
pub mod list;
pub mod save;
pub mod search;
pub mod version;
