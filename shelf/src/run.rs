use itertools::Itertools;
use log::{info, warn};
use stockcut::entities::{Instance, Solution};
use stockcut::io::ext_repr::ExtInstance;
use stockcut::io::export::export_solution;
use stockcut::io::import::{ImportError, import};
use stockcut::io::svg::solution_to_svgs;
use stockcut::shelf::place_instance;
use svg::Document;
use web_time::Instant;

use crate::config::ShelfConfig;
use crate::io::output::ShelfOutput;
use crate::io::report::report_lines;
use crate::io::store::Store;

/// Everything a front-end presents after a successful placement run
pub struct ShelfRun {
    pub instance: Instance,
    pub solution: Solution,
    pub output: ShelfOutput,
    pub report: Vec<String>,
    pub solve_time_ms: f64,
}

impl ShelfRun {
    /// One document per sheet, empty if the config disables SVG output
    pub fn svgs(&self) -> Vec<Document> {
        match self.output.config.write_svg {
            true => solution_to_svgs(
                &self.instance,
                &self.solution,
                self.output.config.svg_draw_options,
            ),
            false => vec![],
        }
    }
}

/// Imports `ext_instance`, places its components and logs the report.
/// Nothing is placed if the instance is rejected during import.
pub fn run(ext_instance: ExtInstance, config: &ShelfConfig) -> Result<ShelfRun, ImportError> {
    let instance = import(&ext_instance)?;

    let start = Instant::now();
    let solution = place_instance(&instance);
    let solve_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let report = report_lines(&instance, &solution);
    for line in &report {
        info!("[RUN] {line}");
    }
    if !solution.is_complete() {
        warn!(
            "[RUN] components not placed (insufficient sheet space): {}",
            solution.unplaced.iter().map(|i| i + 1).join(", ")
        );
    }

    let output = ShelfOutput {
        instance: ext_instance,
        solution: export_solution(&instance, &solution),
        config: config.clone(),
    };

    Ok(ShelfRun {
        instance,
        solution,
        output,
        report,
        solve_time_ms,
    })
}

/// Runs `ext_instance` and keeps it in the store entry named by `config.store_key`.
/// A failed save is logged and does not fail the run.
pub fn run_and_save<S: Store>(
    ext_instance: ExtInstance,
    config: &ShelfConfig,
    open_store: impl Fn(&str) -> S,
) -> Result<ShelfRun, ImportError> {
    let result = run(ext_instance, config)?;
    if let Err(e) = open_store(&config.store_key).save(&result.output.instance) {
        warn!("[RUN] could not save the instance: {e:#}");
    }
    Ok(result)
}

/// The instance kept by [`run_and_save`] under the same config, if any
pub fn load_saved<S: Store>(
    config: &ShelfConfig,
    open_store: impl Fn(&str) -> S,
) -> anyhow::Result<Option<ExtInstance>> {
    open_store(&config.store_key).load()
}
