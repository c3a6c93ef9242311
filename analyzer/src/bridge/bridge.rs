use crate::bridge::model::ReportModel;
use crate::generator::phantom::{build_phantom_image, PhantomConfig};
use crate::workflow::runner::Runner;
use anyhow::Result;
use beamcore::sources::SheetPayload;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct BridgeError;

impl warp::reject::Reject for BridgeError {}

/// Bridge that serves the latest analysis results over HTTP and accepts
/// incoming sheet payloads or phantom configs for analysis.
pub struct ResultsBridge {
    state: Arc<RwLock<ReportModel>>,
}

impl ResultsBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(ReportModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("report")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<ReportModel>>| warp::reply::json(&*state.read().unwrap()));

        let sheet_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |payload: SheetPayload,
                 state: Arc<RwLock<ReportModel>>,
                 runner: Arc<Runner>| async move {
                    match runner.analyze_sheet(&payload) {
                        Ok(analysis) => {
                            let flagged = analysis.flagged.len();
                            let label = analysis.axis.label();
                            let mut guard = state.write().unwrap();
                            *guard = ReportModel::from_axis(analysis, runner.counters());
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "axis": label,
                                    "flagged": flagged,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest error: {:#}", err);
                            Err(warp::reject::custom(BridgeError))
                        }
                    }
                },
            );

        let phantom_route = warp::path("ingest-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |config: PhantomConfig,
                 state: Arc<RwLock<ReportModel>>,
                 runner: Arc<Runner>| async move {
                    match build_phantom_image(&config)
                        .and_then(|payload| runner.analyze_image(&payload))
                    {
                        Ok(report) => {
                            let model = ReportModel::from_report(&report, runner.counters());
                            let axes = model.axes.len();
                            let mut guard = state.write().unwrap();
                            *guard = model;
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "axes": axes,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest-config error: {:#}", err);
                            Err(warp::reject::custom(BridgeError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(sheet_route).or(phantom_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bridge_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &ReportModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[bridge] axes: {}, analyzed: {}, errors: {}",
            guard.axes.len(),
            guard.analyzed,
            guard.errors
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ReportModel {
        self.state.read().unwrap().clone()
    }
}
