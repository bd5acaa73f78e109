use chrono_tz::Tz;

use crate::clients::catalog_client::DataSource;
use crate::service::board_service::BoardOptions;
use crate::tasks::refresh_loop::{run_refresh_loop, StdoutSink};

pub async fn run_watch(source: DataSource, tz: Tz, options: BoardOptions, interval_secs: u64) {
    let sink = StdoutSink;
    run_refresh_loop(&source, &sink, tz, &options, interval_secs).await;
}
