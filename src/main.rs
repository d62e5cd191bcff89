use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use cpu_time::ThreadTime;

use riona::evaluation::{balanced_metrics, per_class_metrics};
use riona::metric::DistanceConfig;
use riona::output::{
    ExperimentPaths, ExperimentSummary, PhaseTimes, SummaryLog, write_neighbors_file,
    write_predictions_file, write_report_file,
};
use riona::readers::load_dataset;
use riona::tasks::LeaveOneOut;
use riona::ui::cli::args::{Cli, resolve_k_values};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            exit(if err.use_stderr() { 1 } else { 0 });
        }
    };
    let plan = cli.plan()?;

    println!("{BOLD}{FG_CYAN}▶ Leave-one-out evaluation{RESET}");
    println!(
        "{DIM}input={}{RESET}  {DIM}svdm={}{RESET}  {}",
        cli.input.display(),
        plan.svdm,
        timestamp_now()
    );
    println!(
        "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
    );

    let read_timer = ThreadTime::now();
    let dataset = load_dataset(&cli.input, &cli.missing, plan.kinds_override.clone())
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let read_ms = elapsed_ms(&read_timer);

    let preprocess_timer = ThreadTime::now();
    let driver = LeaveOneOut::new(&dataset, DistanceConfig::for_variant(plan.svdm))?;
    let preprocess_ms = elapsed_ms(&preprocess_timer);

    let objects = dataset.rows.len();
    let attributes = dataset.number_of_attributes();
    let k_values = resolve_k_values(&plan.k_specs, objects);
    let input_stem = cli
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());

    println!(
        "{DIM}objects={objects}  attributes={attributes}  classes={}  k={k_values:?}{RESET}",
        dataset.number_of_labels()
    );

    let mut summaries = SummaryLog::default();

    for &algorithm in &plan.algorithms {
        for &mode in &plan.modes {
            for &k in &k_values {
                let Some(k_eff) = driver.effective_k(k) else {
                    continue;
                };

                let classify_timer = ThreadTime::now();
                let run = driver.run(algorithm, mode, k_eff, plan.n_for_kplus_nn);
                let classify_ms = elapsed_ms(&classify_timer);

                let write_timer = ThreadTime::now();
                let paths = ExperimentPaths::compose(
                    &cli.outdir,
                    &input_stem,
                    algorithm,
                    mode,
                    plan.svdm,
                    attributes,
                    objects,
                    k_eff,
                );
                std::fs::create_dir_all(&paths.directory)
                    .with_context(|| format!("failed to create {}", paths.directory.display()))?;
                write_predictions_file(
                    &paths.predictions,
                    &dataset,
                    &run.predicted_standard,
                    &run.predicted_normalized,
                    &cli.missing,
                )
                .with_context(|| format!("failed to write {}", paths.predictions.display()))?;
                write_neighbors_file(&paths.neighbors, &run.neighbor_lists)
                    .with_context(|| format!("failed to write {}", paths.neighbors.display()))?;
                let write_ms = elapsed_ms(&write_timer);

                let times = PhaseTimes {
                    read_ms,
                    preprocess_ms,
                    classify_ms,
                    write_ms,
                };
                write_report_file(
                    &paths.report,
                    &dataset,
                    driver.global_stats(),
                    &cli.input,
                    algorithm,
                    mode,
                    plan.svdm,
                    k_eff,
                    &times,
                    &run.conf_standard,
                    &run.conf_normalized,
                )
                .with_context(|| format!("failed to write {}", paths.report.display()))?;

                println!(
                    "{FG_GREEN}{BOLD}{algorithm}{RESET} mode={mode} k={k_eff}  \
                     acc {:>6.2}%  acc_n {:>6.2}%  {DIM}{classify_ms:.1}ms{RESET}",
                    run.conf_standard.accuracy() * 100.0,
                    run.conf_normalized.accuracy() * 100.0,
                );

                summaries.push(ExperimentSummary {
                    algorithm: algorithm.to_string(),
                    mode: mode.to_string(),
                    svdm: plan.svdm.to_string(),
                    k: k_eff,
                    objects,
                    attributes,
                    accuracy_standard: run.conf_standard.accuracy(),
                    accuracy_normalized: run.conf_normalized.accuracy(),
                    balanced_f1_standard: balanced_metrics(&per_class_metrics(&run.conf_standard))
                        .f1,
                    balanced_f1_normalized: balanced_metrics(&per_class_metrics(
                        &run.conf_normalized,
                    ))
                    .f1,
                    classify_ms,
                });
            }
        }
    }

    if let Some((path, format)) = &plan.dump {
        summaries
            .export(path, *format)
            .with_context(|| format!("failed to export summary to {}", path.display()))?;
        println!(
            "{DIM}summary: {} ({} records){RESET}",
            path.display(),
            summaries.len()
        );
    }

    println!("Done.");
    Ok(())
}

fn elapsed_ms(timer: &ThreadTime) -> f64 {
    timer.elapsed().as_secs_f64() * 1000.0
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    format!(
        "{DIM}{}{RESET}",
        Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}
