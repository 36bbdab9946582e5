use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::LevelFilter;
use simplelog::WriteLogger;

mod app;
mod domain;
mod infra;
mod ui;
mod usecase;


use crate::domain::entities::table::PipelineOrder;

const PAGE_SIZE: usize = 5;
const SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const API_BASE_URL_ENV: &str = "USER_DIRECTORY_API_URL";
const SORT_SCOPE_ENV: &str = "USER_DIRECTORY_SORT_SCOPE";

fn main() {
    if let Err(err) = init_logging() {
        eprintln!("file logging disabled: {err}");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("User Directory")),
        )
        .launch(app::App);
}

fn api_base_url() -> String {
    std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

fn pipeline_order() -> PipelineOrder {
    sort_scope_from(std::env::var(SORT_SCOPE_ENV).ok().as_deref())
}

fn sort_scope_from(value: Option<&str>) -> PipelineOrder {
    match value {
        Some(raw) if raw.eq_ignore_ascii_case("global") => PipelineOrder::SortBeforePaginate,
        _ => PipelineOrder::SortAfterPaginate,
    }
}

fn default_log_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "userdirectory", "user-directory")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    let data_dir = project_dirs.data_local_dir().to_path_buf();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data dir: {}", data_dir.display()))?;
    Ok(data_dir.join("user-directory.log"))
}

fn init_logging() -> Result<()> {
    let log_path = default_log_path()?;
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to create log file: {}", log_path.display()))?;
    WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), log_file)
        .context("failed to install logger")?;
    Ok(())
}
