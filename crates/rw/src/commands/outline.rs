//! `rw outline` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use rw_config::{CliSettings, Config};
use rw_outline::Outline;
use rw_scaffold::page_path;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the outline command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    /// Outline file (default: organizer.yml next to rw.toml or in the current directory).
    pub(crate) outline: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,
}

impl OutlineArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            outline: self.outline,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let path = &config.scaffold_resolved.outline;

        let outline = Outline::load(path)?;
        output.info(&format!("Outline: {}", path.display()));

        for line in tree_lines(&outline) {
            match line {
                TreeLine::Section(text) => output.highlight(&text),
                TreeLine::Page(text) => output.info(&text),
            }
        }

        output.success(&format!(
            "{} sections, {} pages",
            outline.sections.len(),
            outline.page_count()
        ));
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum TreeLine {
    Section(String),
    Page(String),
}

/// Render the outline as section headers followed by indented page entries.
fn tree_lines(outline: &Outline) -> Vec<TreeLine> {
    let mut lines = Vec::with_capacity(outline.sections.len() + outline.page_count());
    for section in &outline.sections {
        lines.push(TreeLine::Section(format!(
            "{} ({})",
            section.display_title(),
            section.key
        )));
        for sub in &section.subsections {
            let relative = page_path(Path::new(""), section, sub);
            lines.push(TreeLine::Page(format!(
                "  {} -> {}",
                sub.display_title(),
                relative.display()
            )));
        }
    }
    lines
}
