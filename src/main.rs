//! Command-line driver for the concept tour.
//!
//! Runs each demo and prints the result, either as formatted text or as
//! JSON for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Run every demo in sequence
//! cargo run -- all
//!
//! # Individual demos
//! cargo run -- counter --increments 2 --decrements 1
//! cargo run -- math add 2 3
//! cargo run -- animals
//! cargo run -- compose --input 2
//! cargo run -- fetch --delay-ms 500
//! cargo run -- fib 8
//!
//! # Machine-readable output
//! cargo run -- --json fib 8
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Log level filter (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `FETCH_DELAY_MS` - Fetch demo delay (default: 2000)
//! - `FIB_MAX_N` - Largest accepted fib index (default: 93)

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use concept_tour::config::{self, Config};
use concept_tour::counter::Counter;
use concept_tour::demos::animals::{Animal, Describe, Dog};
use concept_tour::demos::compose::Pipeline;
use concept_tour::demos::{arith, fetch, fib};

/// A guided tour of core language concepts in idiomatic Rust.
#[derive(Parser)]
#[command(name = "tour")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit the demo result as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level demo commands.
#[derive(Subcommand)]
enum Commands {
    /// Run the counter demo
    Counter {
        /// Number of increment calls
        #[arg(long, default_value_t = 2)]
        increments: u32,

        /// Number of decrement calls
        #[arg(long, default_value_t = 1)]
        decrements: u32,
    },

    /// Checked arithmetic on two operands
    Math {
        #[command(subcommand)]
        op: MathOp,
    },

    /// Trait-based polymorphism with an animal hierarchy
    Animals,

    /// Right-to-left function composition
    Compose {
        /// Initial value fed into the pipeline
        #[arg(long, default_value_t = 2)]
        input: i64,
    },

    /// Delayed asynchronous fetch
    Fetch {
        /// Delay in milliseconds (default: FETCH_DELAY_MS)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Recursive Fibonacci
    Fib {
        /// Sequence index
        #[arg(default_value_t = 8)]
        n: u32,
    },

    /// Run every demo in sequence with default inputs
    All,
}

/// Arithmetic subcommands.
#[derive(Subcommand)]
enum MathOp {
    /// Add two numbers
    Add { x: i64, y: i64 },

    /// Multiply two numbers
    Multiply { x: i64, y: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    let output = match cli.command {
        Commands::Counter {
            increments,
            decrements,
        } => run_counter(increments, decrements),
        Commands::Math { op } => run_math(op)?,
        Commands::Animals => run_animals(),
        Commands::Compose { input } => run_compose(input)?,
        Commands::Fetch { delay_ms } => {
            let delay = delay_ms.map_or_else(|| config.fetch_delay(), Duration::from_millis);
            run_fetch(delay).await
        }
        Commands::Fib { n } => run_fib(n, &config)?,
        Commands::All => run_all(&config).await?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&output);
    }

    Ok(())
}

/// Initializes the tracing subscriber per the configured format.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Runs the requested increments and decrements against a fresh counter.
fn run_counter(increments: u32, decrements: u32) -> Value {
    let mut counter = Counter::new();

    for _ in 0..increments {
        counter.increment();
    }
    for _ in 0..decrements {
        counter.decrement();
    }

    tracing::debug!(increments, decrements, count = counter.count(), "counter demo");

    json!({
        "demo": "counter",
        "increments": increments,
        "decrements": decrements,
        "count": counter.count(),
    })
}

fn run_math(op: MathOp) -> Result<Value> {
    let (name, x, y, result) = match op {
        MathOp::Add { x, y } => ("add", x, y, arith::add(x, y)?),
        MathOp::Multiply { x, y } => ("multiply", x, y, arith::multiply(x, y)?),
    };

    Ok(json!({
        "demo": "math",
        "op": name,
        "x": x,
        "y": y,
        "result": result,
    }))
}

fn run_animals() -> Value {
    let animal = Animal::new("Max", "Mammal");
    let dog = Dog::new("Buddy", "Labrador Retriever");

    json!({
        "demo": "animals",
        "animals": [
            { "kind": animal.kind(), "full_name": animal.full_name() },
            { "kind": dog.kind(), "full_name": dog.full_name() },
        ],
    })
}

/// Composes an add step and a multiply step right to left.
fn run_compose(input: i64) -> Result<Value> {
    let pipeline = Pipeline::new()
        .step(|x| arith::add(x, 5))
        .step(|x| arith::multiply(x, 10));

    let result = pipeline.run(input)?;

    Ok(json!({
        "demo": "compose",
        "steps": ["add 5", "multiply by 10"],
        "order": "right-to-left",
        "input": input,
        "result": result,
    }))
}

async fn run_fetch(delay: Duration) -> Value {
    let started = Instant::now();
    let data = fetch::fetch_data(delay).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    tracing::debug!(elapsed_ms, "fetch demo resolved");

    json!({
        "demo": "fetch",
        "delay_ms": delay.as_millis() as u64,
        "elapsed_ms": elapsed_ms,
        "data": data,
    })
}

fn run_fib(n: u32, config: &Config) -> Result<Value> {
    if n > config.fib_max_n {
        anyhow::bail!(
            "fib index {} exceeds the configured maximum {} (FIB_MAX_N)",
            n,
            config.fib_max_n
        );
    }

    let value = fib::fibonacci(n)?;

    Ok(json!({
        "demo": "fib",
        "n": n,
        "value": value,
    }))
}

/// Runs every demo with default inputs and aggregates one report.
async fn run_all(config: &Config) -> Result<Value> {
    let report = json!({
        "generated_at": chrono::Utc::now(),
        "demos": [
            run_counter(2, 1),
            run_math(MathOp::Add { x: 2, y: 3 })?,
            run_animals(),
            run_compose(2)?,
            run_fetch(config.fetch_delay()).await,
            run_fib(8, config)?,
        ],
    });

    Ok(report)
}

/// Prints a demo result as formatted terminal text.
fn print_text(output: &Value) {
    if let Some(demos) = output.get("demos").and_then(Value::as_array) {
        println!("{}", "Concept tour".bold().underline());
        for demo in demos {
            print_demo_line(demo);
        }
        return;
    }

    print_demo_line(output);
}

fn print_demo_line(demo: &Value) {
    let name = demo
        .get("demo")
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    let summary = match name {
        "counter" => format!("final count = {}", demo["count"]),
        "math" => format!(
            "{}({}, {}) = {}",
            demo["op"].as_str().unwrap_or("?"),
            demo["x"], demo["y"], demo["result"]
        ),
        "animals" => demo["animals"]
            .as_array()
            .map(|list| {
                list.iter()
                    .filter_map(|a| a["full_name"].as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default(),
        "compose" => format!("pipeline({}) = {}", demo["input"], demo["result"]),
        "fetch" => format!(
            "{} (after {} ms)",
            demo["data"].as_str().unwrap_or(""),
            demo["elapsed_ms"]
        ),
        "fib" => format!("fib({}) = {}", demo["n"], demo["value"]),
        _ => demo.to_string(),
    };

    println!("{} {}", format!("[{name}]").green().bold(), summary);
}
