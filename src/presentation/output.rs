//! Output Rendering
//!
//! Provides a unified interface for rendering inventories and diffs to
//! different formats. Results go to stdout; progress and errors never do.

use std::io::{self, Write};

use crate::application::DiffResult;
use crate::domain::entities::Service;

/// Output format for rendering
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// One line per service plus totals
    Text,
}

/// Trait for rendering command results
pub trait ResultRenderer {
    /// Render an inventory
    fn render_services(&self, services: &[Service], out: &mut dyn Write) -> io::Result<()>;

    /// Render a diff
    fn render_diff(&self, result: &DiffResult, out: &mut dyn Write) -> io::Result<()>;
}

/// JSON renderer
///
/// Inventories render as an array of services, diffs as an array of
/// service diffs, both sorted by name.
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonRenderer {
    fn write<T>(&self, value: &T, out: &mut dyn Write) -> io::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, value)?;
        } else {
            serde_json::to_writer(&mut *out, value)?;
        }
        writeln!(out)
    }
}

impl ResultRenderer for JsonRenderer {
    fn render_services(&self, services: &[Service], out: &mut dyn Write) -> io::Result<()> {
        self.write(services, out)
    }

    fn render_diff(&self, result: &DiffResult, out: &mut dyn Write) -> io::Result<()> {
        self.write(&result.diffs, out)
    }
}

/// Plain-text renderer
pub struct TextRenderer;

impl ResultRenderer for TextRenderer {
    fn render_services(&self, services: &[Service], out: &mut dyn Write) -> io::Result<()> {
        for service in services {
            writeln!(
                out,
                "{}\t{}\t{}",
                service.name,
                service.checksum,
                service.path.display()
            )?;
        }
        writeln!(out)?;
        writeln!(out, "{} services", services.len())
    }

    fn render_diff(&self, result: &DiffResult, out: &mut dyn Write) -> io::Result<()> {
        for diff in &result.diffs {
            writeln!(out, "{}\t{}", diff.comment, diff.name)?;
        }
        let s = &result.summary;
        writeln!(out)?;
        writeln!(
            out,
            "{} new, {} removed, {} modified, {} unmodified",
            s.new, s.removed, s.modified, s.unmodified
        )
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer::default()),
        OutputFormat::Text => Box::new(TextRenderer),
    }
}
