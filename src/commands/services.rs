use std::io::Write;

use anyhow::{Context, Result};
use mono_meta::presentation::{create_inventory_use_case, create_renderer};

use crate::cli::CommonArgs;

pub fn cmd_services(common: &CommonArgs, branch: &str, events: bool) -> Result<()> {
    let settings = super::load_settings(common)?;
    let mut use_case = create_inventory_use_case(&settings, super::event_sink(events))
        .context("failed to open repository")?;

    let inventory = use_case.inventory(branch);
    let closed = use_case.close();
    let services = inventory?;
    closed.context("failed to release repository")?;

    let mut stdout = std::io::stdout().lock();
    create_renderer(common.format).render_services(&services, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
