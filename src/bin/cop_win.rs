use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use cop_win::{check_cop_win, scenarios, DanglingPolicy, Method, ResourceLimits, SolverConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Relaxation,
    Attractor,
}

impl From<MethodArg> for Method {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Relaxation => Method::Relaxation,
            MethodArg::Attractor => Method::Attractor,
        }
    }
}

/// Run the cop-win check on built-in graphs and print a JSON report per graph.
#[derive(Debug, Parser)]
#[command(name = "cop_win", version)]
struct Cli {
    /// Built-in graphs to solve (default: all of them).
    #[arg(value_name = "SCENARIO")]
    scenarios: Vec<String>,

    /// Print the built-in graph names and exit.
    #[arg(long)]
    list: bool,

    /// Solver config as JSON; flags below override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    method: Option<MethodArg>,

    /// Reject graphs with dangling neighbors instead of treating them as off-board.
    #[arg(long)]
    strict: bool,

    /// Cap on on-board states (enables default limits for the other metrics).
    #[arg(long)]
    max_states: Option<usize>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("COP_WIN_LOG")
        .unwrap_or_else(|_| EnvFilter::new("cop_win=info,warn"));

    let format = env::var("COP_WIN_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn load_config(cli: &Cli) -> Result<SolverConfig, String> {
    let mut cfg = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            SolverConfig::from_json_str(&text).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => SolverConfig::default(),
    };

    if let Some(m) = cli.method {
        cfg = cfg.with_method(m.into());
    }
    if cli.strict {
        cfg = cfg.with_dangling(DanglingPolicy::Reject);
    }
    if let Some(max_states) = cli.max_states {
        let limits = ResourceLimits {
            max_states,
            ..cfg.limits.unwrap_or_default()
        };
        cfg = cfg.with_limits(Some(limits));
    }
    Ok(cfg)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if cli.list {
        for name in scenarios::names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let cfg = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            return ExitCode::from(2);
        }
    };

    let names: Vec<String> = if cli.scenarios.is_empty() {
        scenarios::names().iter().map(|s| s.to_string()).collect()
    } else {
        cli.scenarios.clone()
    };

    let mut failed = false;
    for name in &names {
        let Some(graph) = scenarios::by_name(name) else {
            eprintln!(
                "Unknown scenario {name:?}; available: {}",
                scenarios::names().join(", ")
            );
            return ExitCode::from(2);
        };

        match check_cop_win(&graph, &cfg) {
            Ok(report) => {
                let out = serde_json::json!({
                    "scenario": name,
                    "graph": graph,
                    "report": report,
                });
                match serde_json::to_string_pretty(&out) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to encode report for {name}: {e}");
                        failed = true;
                    }
                }
            }
            Err(e) => {
                eprintln!("Solving {name} failed: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
