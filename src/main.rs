#![allow(non_snake_case)]

mod cli;
mod clients;
mod config;
mod models;
mod runtime;
mod service;
mod tasks;

use std::env;

use chrono_tz::Tz;

use crate::clients::catalog_client::{DataSource, FileCatalogSource, HttpCatalogSource};
use crate::config::AppConfig;
use crate::service::board_service::BoardOptions;

const DEFAULT_RUN_MODE: &str = "cli";
const DEFAULT_DATA_FILE: &str = "./data.json";
const DEFAULT_TIMEZONE: &str = "UTC";
const DEFAULT_UPCOMING_COUNT: usize = 3;
const DEFAULT_REFRESH_SECONDS: u64 = 3600;

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let source = match config.prop("DATA_URL") {
        Some(url) => DataSource::Http(HttpCatalogSource::new(url)),
        None => {
            let path = config
                .prop("DATA_FILE")
                .unwrap_or(DEFAULT_DATA_FILE.to_string());
            DataSource::File(FileCatalogSource::new(path))
        }
    };

    let tz: Tz = config
        .prop("TIMEZONE")
        .unwrap_or(DEFAULT_TIMEZONE.to_string())
        .parse()
        .expect("TIMEZONE must be a valid IANA timezone name");

    let options = BoardOptions {
        show_upcoming: config
            .prop("SHOW_UPCOMING")
            .map(|value| value != "false")
            .unwrap_or(true),
        upcoming_count: match config.prop("UPCOMING_COUNT") {
            Some(raw) => raw
                .parse()
                .expect("UPCOMING_COUNT must be a non-negative integer"),
            None => DEFAULT_UPCOMING_COUNT,
        },
    };

    let refresh_seconds: u64 = match config.prop("REFRESH_SECONDS") {
        Some(raw) => raw.parse().expect("REFRESH_SECONDS must be a number of seconds"),
        None => DEFAULT_REFRESH_SECONDS,
    };

    let run_mode = config.prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());
    if run_mode == "watch" {
        runtime::run_watch(source, tz, options, refresh_seconds).await;
    } else if run_mode == "cli" {
        cli::cli(source, tz, options).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
