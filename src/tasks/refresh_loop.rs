use chrono::NaiveDate;
use chrono_tz::Tz;
use std::time::Duration;
use tokio::time::sleep;

use crate::clients::catalog_client::CatalogSource;
use crate::models::date::current_date;
use crate::service::board_service::{BoardOptions, BoardService};

// Where the rendered board goes. Production writes to stdout; tests
// record what would have been displayed.
pub trait DisplaySink {
    async fn show(&self, content: &str) -> Result<(), String>;
}

pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    async fn show(&self, content: &str) -> Result<(), String> {
        println!("{}", content);
        Ok(())
    }
}

// Renders once immediately, then again every interval so a day
// rollover gets picked up without restarting the process.
pub async fn run_refresh_loop<S: CatalogSource, D: DisplaySink>(
    source: &S,
    sink: &D,
    tz: Tz,
    options: &BoardOptions,
    interval_secs: u64,
) {
    loop {
        let today = current_date(tz);
        if let Err(err) = refresh_tick(source, sink, today, options).await {
            eprintln!("Refresh failed: {}", err);
        }
        sleep(Duration::from_secs(interval_secs)).await;
    }
}

/// One refresh round: load the catalog, build the board for `today`,
/// push it to the sink. A load failure still updates the display with
/// the fallback view instead of leaving stale content up.
pub async fn refresh_tick<S: CatalogSource, D: DisplaySink>(
    source: &S,
    sink: &D,
    today: NaiveDate,
    options: &BoardOptions,
) -> Result<(), String> {
    let catalog = match source.load().await {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Error loading catalog: {}", err);
            return sink.show(&BoardService::render_load_failure()).await;
        }
    };

    let board = BoardService::build_board(&catalog, today, options).map_err(|e| e.to_string())?;
    sink.show(&board).await
}
