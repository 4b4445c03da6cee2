use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use azurapi_cli::output::OutputFormat;
use azurapi_lib::{resolve_data_dir, AzurApi};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "AzurAPI dataset utilities")]
struct Cli {
    /// Override the dataset directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Fetch the dataset from the source before running the command.
    #[arg(long, global = true)]
    online: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the dataset and cache it in the data directory.
    Download,
    /// Look up a ship by name or id.
    Ship {
        /// Ship name in any language, or its id.
        identifier: String,
        /// Only consider ships that have a name in this language.
        #[arg(long)]
        lang: Option<String>,
    },
    /// List ships, optionally filtered.
    Ships {
        /// Only list ships that have a name in this language.
        #[arg(long)]
        lang: Option<String>,
        /// Only list ships of this faction (alias or full name).
        #[arg(long)]
        faction: Option<String>,
    },
    /// Show a campaign stage, e.g. `7-2`.
    Chapter {
        /// Stage address in `<chapter>-<stage>` form.
        stage: String,
        /// Difficulty key such as `normal` or `hard`.
        #[arg(long)]
        diff: Option<String>,
    },
    /// Show a memory by name.
    Memory {
        name: String,
    },
    /// List or search equipment.
    Equipment {
        /// Substring to search for; lists everything when omitted.
        name: Option<String>,
        /// Language to list or search in.
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// Print the cached dataset version.
    Version,
    /// Check the source for a newer version and record it.
    Update,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())
        .context("failed to resolve the AzurAPI data directory")?;
    debug!(data_dir = %data_dir.display(), online = cli.online, "resolved data directory");

    let format = cli.format;
    let load = || load_api(&data_dir, cli.online);

    match cli.command {
        Command::Download => commands::download::handle_download(&data_dir, format),
        Command::Ship { identifier, lang } => {
            commands::ships::handle_ship(&load()?, &identifier, lang.as_deref(), format)
        }
        Command::Ships { lang, faction } => commands::ships::handle_list_ships(
            &load()?,
            lang.as_deref(),
            faction.as_deref(),
            format,
        ),
        Command::Chapter { stage, diff } => {
            commands::lookup::handle_chapter(&load()?, &stage, diff.as_deref(), format)
        }
        Command::Memory { name } => commands::lookup::handle_memory(&load()?, &name, format),
        Command::Equipment { name, lang } => {
            commands::equipment::handle_equipment(&load()?, name.as_deref(), &lang, format)
        }
        Command::Version => commands::version::handle_version(&load()?, format),
        Command::Update => commands::version::handle_update(&mut load()?, format),
    }
}

fn load_api(data_dir: &Path, online: bool) -> Result<AzurApi> {
    AzurApi::new(!online, data_dir).with_context(|| {
        if online {
            format!(
                "failed to download the AzurAPI dataset into {}",
                data_dir.display()
            )
        } else {
            format!(
                "failed to load the AzurAPI dataset from {}; run `download` first",
                data_dir.display()
            )
        }
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
