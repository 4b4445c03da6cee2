//! AzurAPI CLI library.
//!
//! Output formatting shared by the `azurapi-cli` subcommands.

pub mod output;
