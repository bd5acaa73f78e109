use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use inquire::Text;

use crate::clients::catalog_client::{CatalogSource, DataSource};
use crate::models::date::{current_date, parse_date, MalformedDateError};
use crate::service::board_service::{BoardOptions, BoardService};
use crate::service::finder;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Today {
        date: Option<String>,
    },
    Upcoming {
        limit: Option<usize>,
    },
    Prompt {},
}

pub async fn cli(source: DataSource, tz: Tz, options: BoardOptions) {
    // Fine to panic here
    let cli = Cli::parse();
    match &cli.command {
        Commands::Today { date } => {
            let reference = match resolve_reference(date.as_deref(), tz) {
                Ok(reference) => reference,
                Err(e) => {
                    println!("{}", e);
                    return;
                }
            };
            if let Err(e) = show_today(&source, reference).await {
                println!("Failed to look up the session: {}", e);
            }
        }
        Commands::Upcoming { limit } => {
            let limit = limit.unwrap_or(options.upcoming_count);
            if let Err(e) = show_upcoming(&source, current_date(tz), limit).await {
                println!("Failed to list upcoming sessions: {}", e);
            }
        }
        Commands::Prompt {} => {
            let raw: String;
            if let Ok(answer) = specify_date() {
                raw = answer;
            } else {
                println!("No date supplied");
                return;
            }
            match parse_date(&raw) {
                Ok(reference) => {
                    if let Err(e) = show_today(&source, reference).await {
                        println!("Failed to look up the session: {}", e);
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
    }
}

async fn show_today(
    source: &DataSource,
    reference: NaiveDate,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let catalog = source.load().await?;
    let session = finder::find_session_on_date(&catalog.sessions, reference)?;
    println!("{}", BoardService::render_today(session));
    Ok(())
}

async fn show_upcoming(
    source: &DataSource,
    reference: NaiveDate,
    limit: usize,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let catalog = source.load().await?;
    let upcoming = finder::upcoming_sessions(&catalog.sessions, reference, limit)?;
    if upcoming.is_empty() {
        println!("No upcoming sessions");
    } else {
        println!("{}", BoardService::render_upcoming(&upcoming));
    }
    Ok(())
}

fn resolve_reference(raw: Option<&str>, tz: Tz) -> Result<NaiveDate, MalformedDateError> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(current_date(tz)),
    }
}

fn specify_date() -> Result<String, Box<dyn std::error::Error>> {
    Ok(Text::new("Date to check (DD/MM/YYYY or YYYY-MM-DD).").prompt()?)
}
