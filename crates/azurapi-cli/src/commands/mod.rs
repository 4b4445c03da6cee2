// Module exports for CLI subcommands
//
// Each module handles one group of subcommands. main.rs parses arguments,
// loads the dataset, and dispatches to these handlers.

pub mod download;
pub mod equipment;
pub mod lookup;
pub mod ships;
pub mod version;
