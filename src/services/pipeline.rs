use std::path::Path;
use std::{thread, time::Duration};

use crate::error::PipelineError;
use crate::model::app::AppEntry;
use crate::services::{export, extract, fetch::Fetcher};

pub struct PipelineConfig<'a> {
    pub out: &'a Path,
    pub json_dump: Option<&'a Path>,
}

#[derive(Debug)]
pub struct RunReport {
    pub apps_written: usize,
    pub json_dumped: bool,
}

pub fn run(fetcher: &Fetcher, cfg: &PipelineConfig) -> Result<RunReport, PipelineError> {
    run_with(fetcher, cfg, thread::sleep)
}

pub fn run_with<S>(fetcher: &Fetcher, cfg: &PipelineConfig, sleep: S) -> Result<RunReport, PipelineError>
where
    S: FnMut(Duration),
{
    tracing::info!("Fetching Steam app list...");
    let data = fetcher.fetch_with(sleep)?;

    // Best effort: a failed dump never stops the CSV.
    let json_dumped = match cfg.json_dump {
        Some(path) => match export::write_json(path, &data) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "saved raw JSON");
                true
            }
            Err(e) => {
                tracing::error!("Failed to save JSON: {e}");
                false
            }
        },
        None => false,
    };

    let apps: Vec<AppEntry> = extract::extract_apps(&data).collect();
    tracing::info!("Fetched {} apps. Writing to {} ...", apps.len(), cfg.out.display());

    export::write_csv(cfg.out, &apps)?;
    tracing::info!("Done.");

    Ok(RunReport {
        apps_written: apps.len(),
        json_dumped,
    })
}
