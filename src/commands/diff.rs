use std::io::Write;

use anyhow::{Context, Result};
use mono_meta::presentation::{create_diff_use_case, create_renderer};

use crate::cli::CommonArgs;

pub fn cmd_diff(
    common: &CommonArgs,
    base: &str,
    compare: &str,
    changed_only: bool,
    events: bool,
) -> Result<()> {
    let settings = super::load_settings(common)?;
    let mut use_case = create_diff_use_case(&settings, super::event_sink(events))
        .context("failed to open repository")?;

    // close even when the diff failed, then report the diff error first
    let outcome = use_case.execute(base, compare);
    let closed = use_case.close();
    let mut result =
        outcome.with_context(|| format!("failed to diff {} against {}", compare, base))?;
    closed.context("failed to release repository")?;

    if changed_only {
        result = result.changed_only();
    }

    tracing::info!(
        new = result.summary.new,
        removed = result.summary.removed,
        modified = result.summary.modified,
        unmodified = result.summary.unmodified,
        "diff complete"
    );

    let mut stdout = std::io::stdout().lock();
    create_renderer(common.format).render_diff(&result, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
