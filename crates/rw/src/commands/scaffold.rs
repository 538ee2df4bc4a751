//! `rw scaffold` command implementation.

use std::path::PathBuf;

use clap::Args;
use rw_config::{CliSettings, Config, ScaffoldStrategy};
use rw_outline::Outline;
use rw_scaffold::{ScaffoldPlan, ScaffoldReport, Scaffolder, Strategy};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the scaffold command.
#[derive(Args)]
pub(crate) struct ScaffoldArgs {
    /// Outline file (default: organizer.yml next to rw.toml or in the current directory).
    pub(crate) outline: Option<PathBuf>,

    /// Directory the site tree is generated under (default: the outline's directory).
    #[arg(short, long)]
    pub(crate) base_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Compute every file up front and write each one exactly once.
    #[arg(long)]
    pub(crate) planned: bool,

    /// Show what would be written without touching the filesystem.
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ScaffoldArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            outline: self.outline,
            base_dir: self.base_dir,
            strategy: self.planned.then_some(ScaffoldStrategy::Planned),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let settings = &config.scaffold_resolved;
        let scaffolder =
            Scaffolder::new(settings.base_dir()).with_strategy(strategy(settings.strategy));

        tracing::debug!(
            config = ?config.config_path,
            outline = %settings.outline.display(),
            base_dir = %scaffolder.base_dir().display(),
            strategy = ?scaffolder.strategy(),
            "Resolved scaffold settings"
        );

        output.info(&format!("Outline: {}", settings.outline.display()));
        output.info(&format!("Output: {}", scaffolder.base_dir().display()));

        let outline = Outline::load(&settings.outline)?;
        if let Some(warning) = empty_outline_warning(&outline) {
            output.warning(warning);
        }

        if self.dry_run {
            let plan = scaffolder.plan(&outline)?;
            report_plan(&output, &plan);
            return Ok(());
        }

        let report = scaffolder.run(&outline)?;
        report_run(&output, &report, self.verbose);
        Ok(())
    }
}

fn strategy(configured: ScaffoldStrategy) -> Strategy {
    match configured {
        ScaffoldStrategy::Sequential => Strategy::Sequential,
        ScaffoldStrategy::Planned => Strategy::Planned,
    }
}

fn report_plan(output: &Output, plan: &ScaffoldPlan) {
    output.highlight("Dry run, nothing written:");
    for file in plan.files() {
        output.info(&format!("  {}", file.path.display()));
        if !file.siblings.is_empty() {
            output.detail(&format!("    links: {}", file.siblings.join(", ")));
        }
    }
    output.success(&format!(
        "{} pages and 1 index would be written",
        plan.pages.len()
    ));
}

fn report_run(output: &Output, report: &ScaffoldReport, verbose: bool) {
    if verbose {
        for page in &report.pages {
            output.detail(&format!("  {}", page.display()));
        }
    }
    output.success(&format!(
        "Scaffolded {} pages, index at {}",
        report.pages.len(),
        report.index.display()
    ));
    if let Some(summary) = linked_summary(report) {
        output.info(&summary);
    }
}

/// Warning for an outline that yields no pages, even if it has sections.
fn empty_outline_warning(outline: &Outline) -> Option<&'static str> {
    (outline.page_count() == 0)
        .then_some("Outline has no pages; only the index will be written")
}

fn linked_summary(report: &ScaffoldReport) -> Option<String> {
    let linked = report.linked.len();
    (linked > 0).then(|| format!("Linked siblings on {linked} pages"))
}
