use anyhow::Context;
use beamcore::sources::Axis;
use bridge::bridge::ResultsBridge;
use bridge::model::ReportModel;
use clap::Parser;
use generator::phantom::{build_phantom_image, PhantomConfig};
use ingest::sheet_csv::read_sheet;
use report::render::{render_table, write_json};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::{AnalysisReport, Runner};

mod bridge;
mod generator;
mod ingest;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Beam-profile symmetry QA workflow driver")]
struct Args {
    /// Analyze a synthetic phantom field and emit the report
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Linac vendor (elekta or varian) deciding the greyscale convention
    #[arg(long)]
    vendor: Option<String>,
    /// Force profile inversion regardless of vendor
    #[arg(long, default_value_t = false)]
    invert: bool,
    #[arg(long, default_value_t = 40.0)]
    pixels_per_cm: f64,
    #[arg(long, default_value_t = 6.0)]
    energy_mv: f64,
    #[arg(long, default_value_t = 10.0)]
    depth_cm: f64,
    /// Inline measurement sheet (CSV)
    #[arg(long)]
    sheet_inline: Option<PathBuf>,
    /// Crossline measurement sheet (CSV)
    #[arg(long)]
    sheet_crossline: Option<PathBuf>,
    /// Write the full report (diagnostic slopes included) as JSON
    #[arg(long)]
    report: Option<PathBuf>,
    /// Keep the HTTP bridge alive for incoming payloads
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.vendor.as_deref(),
            args.invert,
            args.pixels_per_cm,
            args.energy_mv,
            args.depth_cm,
        )
    };

    log::info!(
        "workflow config: vendor {:?}, inversion {:?}, {} px/cm",
        config.vendor,
        config.inversion,
        config.pixels_per_cm
    );

    let runner = Arc::new(Runner::new(config.clone()));
    let results_bridge = ResultsBridge::new(runner.clone());

    let mut axes = Vec::new();
    for (axis, path) in [
        (Axis::Inline, &args.sheet_inline),
        (Axis::Crossline, &args.sheet_crossline),
    ] {
        if let Some(path) = path {
            let payload = read_sheet(path, axis)?;
            axes.push(runner.analyze_sheet(&payload)?);
        }
    }

    let analysis = if args.offline {
        let phantom = PhantomConfig {
            pixels_per_cm: config.pixels_per_cm,
            inverted: config.effective_invert(),
            ..Default::default()
        };
        let payload = build_phantom_image(&phantom)?;
        let mut report = runner.analyze_image(&payload)?;
        report.axes.extend(axes.drain(..));
        Some(report)
    } else if !axes.is_empty() {
        Some(AnalysisReport {
            energy_mv: config.energy_mv,
            depth_cm: config.depth_cm,
            inverted: false,
            axes,
        })
    } else {
        None
    };

    if let Some(analysis) = &analysis {
        println!("{}", render_table(analysis));
        results_bridge.publish(&ReportModel::from_report(analysis, runner.counters()))?;
        results_bridge.publish_status("Workflow results ready.");
        if let Some(path) = &args.report {
            write_json(analysis, path)?;
        }
    }

    if args.serve {
        results_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
