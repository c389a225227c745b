use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use config::Source;
use database::SqliteDatabase;
use metro::{
    client::Client,
    database::{memory::MemoryDatabase, Database},
};
use model::accessibility::AccessibilityKind;
use serde_json::Value;
use utility::id::Id;

mod config;

#[derive(Parser)]
#[command(name = "metro", about = "Queries the Tehran metro reference dataset")]
struct Cli {
    /// SQLite dataset, overrides `METRO_DATABASE_PATH`
    #[arg(long, global = true, conflicts_with = "dataset")]
    database: Option<PathBuf>,

    /// JSON dataset, overrides `METRO_DATASET_JSON`
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Station, intersection and line counts
    Stats,
    /// Share of stations per emergency service and accessibility level
    Breakdown,
    /// All stations
    Stations {
        /// Attach line, intersection and accessibility levels
        #[arg(long)]
        complete: bool,
        /// List stations served by several lines once per line
        #[arg(long)]
        keep_duplicates: bool,
    },
    /// A single station
    Station {
        id: i64,
        #[arg(long)]
        complete: bool,
    },
    /// All lines
    Lines,
    /// Stations of one line
    Line {
        id: i64,
        #[arg(long)]
        complete: bool,
    },
    /// Stations whose english or persian name contains the query
    Search {
        query: String,
        #[arg(long)]
        complete: bool,
    },
    /// Accessibility levels of one kind
    Levels { kind: Kind },
    /// Dataset version
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Wheelchair,
    Blindness,
    Wc,
}

impl From<Kind> for AccessibilityKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Wheelchair => Self::Wheelchair,
            Kind::Blindness => Self::Blindness,
            Kind::Wc => Self::Wc,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let source = Source::from_args(cli.database, cli.dataset)
        .or_else(Source::from_env)
        .ok_or("no dataset given, set METRO_DATABASE_PATH or METRO_DATASET_JSON")?;

    let output = match source {
        Source::Sqlite(info) => {
            let database = SqliteDatabase::connect(info).await?;
            run(Client::new(database), cli.command).await?
        }
        Source::Json(path) => {
            let database = MemoryDatabase::load(path).await?;
            run(Client::new(database), cli.command).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run<D: Database>(client: Client<D>, command: Commands) -> Result<Value, Box<dyn Error>> {
    log::debug!("running {:?}", command);
    let output = match command {
        Commands::Stats => serde_json::to_value(client.statistics().get_basic_statistics().await?)?,
        Commands::Breakdown => {
            serde_json::to_value(client.statistics().get_complex_statistics().await?)?
        }
        Commands::Stations {
            complete,
            keep_duplicates,
        } => serde_json::to_value(
            client
                .stations()
                .get_stations(complete, !keep_duplicates)
                .await?,
        )?,
        Commands::Station { id, complete } => {
            serde_json::to_value(client.stations().get_station(Id::new(id), complete).await?)?
        }
        Commands::Lines => serde_json::to_value(client.lines().get_lines().await?)?,
        Commands::Line { id, complete } => serde_json::to_value(
            client
                .stations()
                .get_stations_by_line(Id::new(id), complete)
                .await?,
        )?,
        Commands::Search { query, complete } => serde_json::to_value(
            client.stations().search_stations(&query, complete).await?,
        )?,
        Commands::Levels { kind } => {
            serde_json::to_value(client.accessibility().get_levels(kind.into()).await?)?
        }
        Commands::Info => {
            serde_json::to_value(client.database_information().get_information().await?)?
        }
    };
    Ok(output)
}
