//! Production planner entry point — CLI wiring, config loading, and serving.

use std::env;
use std::path::Path;
use std::process;

use production_plan::cli::{self, CliOptions, Mode};
use production_plan::config::AppConfig;
use production_plan::io::export::export_csv;
use production_plan::logging;
use production_plan::plan::LoadRequest;

fn load_config(opts: &CliOptions) -> AppConfig {
    let mut config = match opts.config {
        Some(ref path) => AppConfig::from_toml_file(path).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        }),
        None => AppConfig::default(),
    };

    if let Some(ref bind) = opts.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = opts.port {
        config.server.port = port;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    config
}

/// Computes the plan for one payload file, prints it, and optionally exports CSV.
fn run_plan(payload: &Path, out: Option<&Path>) -> Result<(), String> {
    let request = LoadRequest::from_json_file(payload).map_err(|e| e.to_string())?;
    let plan = request.plan().map_err(|e| e.to_string())?;

    let body = serde_json::to_string_pretty(&plan).map_err(|e| e.to_string())?;
    println!("{body}");

    if let Some(path) = out {
        export_csv(&plan, path).map_err(|e| format!("failed to write CSV: {e}"))?;
        tracing::info!(path = %path.display(), "plan written");
    }
    Ok(())
}

#[cfg(feature = "api")]
fn run_server(config: &AppConfig) -> Result<(), String> {
    let addr = config.socket_addr().map_err(|e| e.to_string())?;
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("failed to create tokio runtime: {e}"))?;
    rt.block_on(production_plan::api::serve(addr))
        .map_err(|e| format!("server error on {addr}: {e}"))
}

#[cfg(not(feature = "api"))]
fn run_server(_config: &AppConfig) -> Result<(), String> {
    Err("this build has no HTTP API; rebuild with `--features api` or pass --payload".to_string())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if cli::wants_help(&args) {
        cli::print_usage();
        process::exit(0);
    }

    let opts = cli::parse_args_from(&args).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        cli::print_usage();
        process::exit(1);
    });

    let config = load_config(&opts);
    logging::init(&config.logging);

    let outcome = match opts.mode {
        Mode::Plan { ref payload } => run_plan(payload, opts.out.as_deref()),
        Mode::Serve => run_server(&config),
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
