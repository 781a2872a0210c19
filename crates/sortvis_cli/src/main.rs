//! sortvis - step through sorting algorithms in the terminal

mod commands;
mod config;
mod render;

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sortvis_animation::{PlaybackController, PlaybackDriver, Session, SessionCommand};
use sortvis_core::input::clamp_size;
use sortvis_core::{Algorithm, InputSource, RandomInput, Step, Trace, Value};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::commands::{parse_command, HELP};
use crate::config::{SortvisConfig, MAX_DELAY_MS};
use crate::render::TerminalRenderer;

#[derive(Parser, Debug)]
#[command(name = "sortvis", version, about = "Trace and play back sorting algorithms")]
struct Cli {
    /// Config file (defaults to ./sortvis.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate a sort in the terminal (default)
    Play(PlayArgs),
    /// Print every traced step
    Trace(TraceArgs),
}

#[derive(Args, Debug, Default)]
struct InputArgs {
    /// bubble, selection or quick
    #[arg(long, short)]
    algorithm: Option<Algorithm>,
    /// Length of the generated input
    #[arg(long, short)]
    size: Option<usize>,
    /// Seed for reproducible input
    #[arg(long)]
    seed: Option<u64>,
    /// Explicit input instead of a generated one, e.g. `5,3,1`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<Value>,
}

#[derive(Args, Debug, Default)]
struct PlayArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Milliseconds between steps; 0 jumps straight to the result
    #[arg(long, short)]
    delay_ms: Option<u64>,
    /// Read commands from stdin instead of playing once
    #[arg(long, short)]
    interactive: bool,
    /// Draw frames below each other instead of redrawing in place
    #[arg(long)]
    no_clear: bool,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    input: InputArgs,
    /// One JSON array instead of one line per step
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = SortvisConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded config");

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => play(args, config).await,
        Command::Trace(args) => print_trace(args, &config),
    }
}

fn input_source(args: &InputArgs, config: &SortvisConfig) -> RandomInput {
    let source = match args.seed.or(config.input.seed) {
        Some(seed) => RandomInput::seeded(seed),
        None => RandomInput::from_entropy(),
    };
    source.with_max_value(config.input.max_value)
}

async fn play(args: PlayArgs, mut config: SortvisConfig) -> Result<()> {
    if args.no_clear {
        config.render.clear_screen = false;
    }
    let algorithm = args.input.algorithm.unwrap_or(config.playback.algorithm);
    let delay_ms = args
        .delay_ms
        .unwrap_or(config.playback.delay_ms)
        .min(MAX_DELAY_MS);
    let size = clamp_size(args.input.size.unwrap_or(config.input.size));

    let mut renderer = TerminalRenderer::new(&config.render);
    let mut controller = PlaybackController::new(delay_ms);
    controller.on_publish(move |frame| {
        if let Err(err) = renderer.draw(frame) {
            tracing::warn!(%err, "failed to draw frame");
        }
    });
    controller.on_finish(|values| println!("sorted: {}", join(values)));

    let mut source = input_source(&args.input, &config);
    let mut session = Session::new(algorithm, controller);
    session.set_size(size);
    if args.input.values.is_empty() {
        session.generate(&mut source);
    } else {
        session.set_input(args.input.values);
    }

    let (tx, rx) = mpsc::channel(16);
    let driver = PlaybackDriver::new(session, source, rx).exit_on_finish(!args.interactive);

    if args.interactive {
        eprintln!("{HELP}");
        // tokio's stdin blocks runtime shutdown, so read on a plain thread
        std::thread::spawn(move || read_commands(tx));
    } else {
        tx.send(SessionCommand::Start)
            .await
            .context("playback driver stopped early")?;
        drop(tx);
    }

    let session = driver.run().await;
    if !args.interactive && !session.is_sorted() {
        tracing::warn!("nothing to play");
    }
    Ok(())
}

fn read_commands(tx: mpsc::Sender<SessionCommand>) {
    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                let quit = command == SessionCommand::Quit;
                if tx.blocking_send(command).is_err() || quit {
                    break;
                }
            }
            Err(err) => {
                tracing::warn!(%err, "refused command");
                eprintln!("{err}\n{HELP}");
            }
        }
    }
}

fn print_trace(args: TraceArgs, config: &SortvisConfig) -> Result<()> {
    let algorithm = args.input.algorithm.unwrap_or(config.playback.algorithm);
    let input = if args.input.values.is_empty() {
        let size = clamp_size(args.input.size.unwrap_or(config.input.size));
        input_source(&args.input, config).generate(size)
    } else {
        args.input.values.clone()
    };

    let trace = Trace::new(input, algorithm);
    if args.json {
        let json = serde_json::to_string_pretty(trace.steps()).context("Failed to encode steps")?;
        println!("{json}");
    } else {
        println!("{} on [{}]", algorithm.title(), join(trace.input()));
        for (index, step) in trace.steps().iter().enumerate() {
            println!("{index:>4}  {}", describe(step));
        }
    }
    Ok(())
}

fn describe(step: &Step) -> String {
    let mut line = format!(
        "[{}] active={:?} sorted={:?}",
        join(&step.values),
        step.active.as_slice(),
        step.sorted
    );
    if let Some(q) = step.quick {
        line.push_str(&format!(" range={}..={} pivot={}", q.low, q.high, q.pivot));
        if let Some(i) = q.scan {
            line.push_str(&format!(" i={i}"));
        }
        if let Some(j) = q.probe {
            line.push_str(&format!(" j={j}"));
        }
    }
    line
}

fn join(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
