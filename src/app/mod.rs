// Author: Dustin Pilgrim
// License: MIT

pub mod clean_mode;
pub mod platform;
pub mod timer_mode;

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::cli::Args;
use crate::config::Settings;

pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    crate::log::init(platform::default_log_path(), args.verbose);
    crate::linfo!("lapwatch", "starting (pid={})", std::process::id());

    let settings = crate::config::load(&args).map_err(|e| {
        crate::lerror!("config", "{e:#}");
        format!("{e:#}")
    })?;

    let catalog = load_catalog(&settings)?;

    if args.clean {
        clean_mode::run(&settings, catalog).await
    } else {
        let task = args
            .task_label()
            .unwrap_or_else(|| catalog.unnamed_task.clone());
        timer_mode::run(&settings, task, catalog).await
    }
}

/// Catalog for the configured language; must succeed before any mode runs.
pub fn load_catalog(settings: &Settings) -> Result<Arc<Catalog>, CatalogError> {
    Catalog::load(&settings.lang, Some(settings.locales_dir.as_path()))
        .map(Arc::new)
        .map_err(|e| {
            crate::lerror!("catalog", "cannot load '{}': {e}", e.lang());
            e
        })
}

pub fn exit_code(result: &Result<(), AnyError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
