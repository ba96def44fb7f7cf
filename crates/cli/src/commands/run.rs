//! `xrinputctl run`: one conformance pass over a snapshot file.

use anyhow::Result;
use tracing::info;
use xrinput_conformance::prelude::*;

use crate::commands::RunArgs;
use crate::error::CliError;
use crate::output;

/// Returns whether the pass succeeded.
pub async fn execute(args: &RunArgs, json: bool) -> Result<bool> {
    let provider = SnapshotProvider::load(&args.snapshot).map_err(CliError::snapshot)?;
    let config = match &args.config {
        Some(path) => ConformanceConfig::load_optional(path).map_err(CliError::config)?,
        None => None,
    };

    let ticks = config.as_ref().map_or(0, |c| c.settle_delay_ticks);
    if ticks > 0 && !args.no_settle {
        info!(ticks, frame_rate = args.frame_rate, "Settling provider");
        let mut frames = IntervalFrameSource::with_rate(args.frame_rate);
        settle(&mut frames, ticks).await;
    }

    let mut options = RunnerOptions::default();
    if !args.checks.is_empty() {
        options = options.with_checks(args.checks.iter().copied());
    }
    if let Some(ceiling) = args.haptic_ceiling {
        options = options.with_haptic_buffer_ceiling(ceiling);
    }

    let report = ConformanceRunner::new(options).with_config(config).run(&provider);
    output::print_report(&report, json)?;
    Ok(report.is_pass())
}
