//! Command-line argument parsing.

use std::path::PathBuf;

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Compute one plan from a payload file and print it.
    Plan { payload: PathBuf },
    /// Serve the HTTP API.
    Serve,
}

/// Parsed CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub mode: Mode,
    /// TOML configuration file.
    pub config: Option<PathBuf>,
    /// CSV output path for a computed plan.
    pub out: Option<PathBuf>,
    /// Overrides `server.bind`.
    pub bind: Option<String>,
    /// Overrides `server.port`.
    pub port: Option<u16>,
}

/// Parses arguments, excluding the program name.
///
/// With neither `--payload` nor `--serve`, the API is served.
///
/// # Errors
///
/// Returns a message describing the first invalid argument.
pub fn parse_args_from(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut payload = None;
    let mut serve = false;
    let mut config = None;
    let mut out = None;
    let mut bind = None;
    let mut port = None;

    while i < args.len() {
        match args[i].as_str() {
            "--payload" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --payload (expected a JSON file path)")?;
                if payload.replace(PathBuf::from(path)).is_some() {
                    return Err("--payload provided more than once".to_string());
                }
            }
            "--out" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --out (expected a file path)")?;
                if out.replace(PathBuf::from(path)).is_some() {
                    return Err("--out provided more than once".to_string());
                }
            }
            "--config" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --config (expected a TOML file path)")?;
                if config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--serve" => serve = true,
            "--bind" => {
                i += 1;
                let addr =
                    args.next_or_err(i, "missing value for --bind (expected an IP address)")?;
                bind = Some(addr.to_string());
            }
            "--port" => {
                i += 1;
                let value = args.next_or_err(i, "missing value for --port (expected a u16)")?;
                let parsed = value
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{value}\" is not a valid u16"))?;
                port = Some(parsed);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if serve && payload.is_some() {
        return Err(
            "arguments `--serve` and `--payload` are mutually exclusive; choose one".to_string(),
        );
    }
    if out.is_some() && payload.is_none() {
        return Err("--out requires --payload".to_string());
    }

    let mode = match payload {
        Some(payload) => Mode::Plan { payload },
        None => Mode::Serve,
    };

    Ok(CliOptions {
        mode,
        config,
        out,
        bind,
        port,
    })
}

/// Returns true if `--help`/`-h` appears anywhere in `args`.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("production-plan: merit-order production planning for a power plant fleet");
    eprintln!();
    eprintln!("Usage: production-plan [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --payload <path>   Compute a plan from a JSON payload and print it");
    eprintln!("  --out <path>       Also write the computed plan as CSV (with --payload)");
    eprintln!("  --config <path>    Load service configuration from a TOML file");
    eprintln!("  --serve            Serve the REST API (default without --payload)");
    eprintln!("  --bind <ip>        API bind address (default: 0.0.0.0)");
    eprintln!("  --port <u16>       API port (default: 8888)");
    eprintln!("  --help             Show this help message");
}
