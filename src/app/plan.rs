use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::args::BenchArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{RequestSpec, RunPlan, TransportSettings};
use crate::metrics::MatrixShape;

/// Where the end-of-run artifacts go. `None` skips the artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OutputTargets {
    pub(crate) report: Option<PathBuf>,
    pub(crate) export_json: Option<PathBuf>,
    pub(crate) export_csv: Option<PathBuf>,
}

/// A validated local run: nothing in here can fail once workers start.
#[derive(Debug, Clone)]
pub(crate) struct LocalRun {
    pub(crate) plan: Arc<RunPlan>,
    pub(crate) transport: TransportSettings,
    pub(crate) outputs: OutputTargets,
}

/// Validates the merged CLI/config arguments and builds the run.
pub(crate) fn build_local_run(args: &BenchArgs) -> AppResult<LocalRun> {
    let Some(url) = args.url.as_deref() else {
        error!("Missing URL (set --url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    };

    let shape = MatrixShape::new(args.clients, args.iterations)?;
    let request = RequestSpec::new(
        args.method.clone(),
        url,
        &args.headers,
        &args.data,
        &args.verify_body,
    )?;
    debug!(
        "Planned {} cells, delay {}ms, timeout {}s",
        shape.cells(),
        args.delay_ms,
        args.connect_timeout_secs
    );

    let plan = RunPlan::new(shape, Duration::from_millis(args.delay_ms), request);
    let outputs = OutputTargets {
        report: (!args.no_report).then(|| PathBuf::from(&args.out)),
        export_json: args.export_json.as_ref().map(PathBuf::from),
        export_csv: args.export_csv.as_ref().map(PathBuf::from),
    };

    Ok(LocalRun {
        plan: Arc::new(plan),
        transport: TransportSettings::new(args.connect_timeout_secs, args.insecure),
        outputs,
    })
}
