mod backend_bridge;
mod config;
mod controller;
mod render;

use std::{
    io::{self, BufRead},
    path::PathBuf,
    thread,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossbeam_channel::{bounded, unbounded};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::{
    domain::{AlgorithmKind, BarState, StepKind},
    protocol::{FrameSnapshot, SortEvent},
};
use sort_engine::{PacedReporter, RecordingReporter, Session, StepReporter};
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::{parse_command, BackendCommand},
    config::{load_settings, Settings},
    controller::{
        events::{UiError, UiErrorContext, UiEvent},
        orchestration::dispatch_backend_command,
    },
    render::{describe_summary, JsonRenderer, TerminalRenderer},
};

const COMMAND_QUEUE: usize = 32;

#[derive(Parser, Debug)]
#[command(name = "sortviz", about = "Animated sorting algorithms in the terminal")]
struct Cli {
    /// Settings file; defaults to ./visualizer.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate one sort and print its summary.
    Run(RunArgs),
    /// Read commands from stdin while a worker animates sorts.
    Interactive(SessionArgs),
    /// List algorithm tags and their complexity labels.
    Algorithms,
}

#[derive(Args, Debug)]
struct SessionArgs {
    #[arg(long)]
    size: Option<usize>,
    #[arg(long)]
    speed: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Emit JSON lines instead of drawing bars.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[arg(long, short)]
    algorithm: Option<String>,
    /// Sort these values instead of a generated array.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Option<Vec<i64>>,
    /// Skip the animation and print step counts only.
    #[arg(long)]
    trace: bool,
    #[command(flatten)]
    session: SessionArgs,
}

impl SessionArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(size) = self.size {
            settings.size = size;
        }
        if let Some(speed) = self.speed {
            settings.speed = speed;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Run(args) => {
            args.session.apply(&mut settings);
            if let Some(algorithm) = &args.algorithm {
                settings.algorithm = algorithm.clone();
            }
            run_once(&settings, &args)
        }
        Command::Interactive(args) => {
            args.apply(&mut settings);
            run_interactive(settings, args.json)
        }
        Command::Algorithms => {
            for kind in AlgorithmKind::ALL {
                println!("{:<10} {}", kind.as_str(), kind.complexity());
            }
            Ok(())
        }
    }
}

fn run_once(settings: &Settings, args: &RunArgs) -> Result<()> {
    let config = settings.sort_config();
    let mut session = match &args.values {
        Some(values) => Session::new(values.clone()),
        None => Session::generate(&config, &mut seeded_rng(settings.seed))?,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build runtime")?;

    if args.trace {
        let mut recorder = RecordingReporter::default();
        let summary = runtime.block_on(session.run_sort_named(
            &settings.algorithm,
            &config,
            &mut recorder,
        ))?;
        println!(
            "{} compare steps, {} visit steps, {} swap steps, {} refreshes",
            recorder.count_kind(StepKind::Compare),
            recorder.count_kind(StepKind::Visit),
            recorder.count_kind(StepKind::Swap),
            recorder.refreshes()
        );
        println!("{:?}", session.values());
        println!("{}", describe_summary(&summary));
        return Ok(());
    }

    let mut reporter: Box<dyn StepReporter> = if args.session.json {
        Box::new(PacedReporter::new(JsonRenderer::stdout()))
    } else {
        Box::new(PacedReporter::new(TerminalRenderer::stdout()))
    };
    let summary = runtime.block_on(session.run_sort_named(
        &settings.algorithm,
        &config,
        reporter.as_mut(),
    ))?;

    if args.session.json {
        JsonRenderer::stdout().emit(&SortEvent::Completed(summary));
    } else {
        println!("{}", describe_summary(&summary));
    }
    Ok(())
}

fn run_interactive(settings: Settings, json: bool) -> Result<()> {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE);
    let (ui_tx, ui_rx) = unbounded::<UiEvent>();

    let worker = backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    thread::spawn(move || {
        let mut status = String::new();
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Ok(Some(cmd)) => {
                    let quitting = matches!(cmd, BackendCommand::Quit);
                    dispatch_backend_command(&cmd_tx, cmd, &mut status);
                    if !status.is_empty() {
                        eprintln!("{status}");
                    }
                    if quitting {
                        return;
                    }
                }
                Ok(None) => {}
                Err(message) => eprintln!(
                    "{}",
                    UiError::from_message(UiErrorContext::Command, message).display_line()
                ),
            }
        }
        // stdin closed
        dispatch_backend_command(&cmd_tx, BackendCommand::Quit, &mut status);
    });

    let mut terminal = TerminalRenderer::stdout();
    let mut json_out = JsonRenderer::stdout();
    for event in ui_rx.iter() {
        match event {
            UiEvent::Frame(pending) => {
                if pending.is_cancelled() {
                    continue;
                }
                if json {
                    json_out.emit(&SortEvent::Frame(pending.snapshot().clone()));
                } else {
                    terminal.draw(pending.snapshot());
                }
                pending.mark_drawn();
            }
            UiEvent::Engine(event) if json => json_out.emit(&event),
            UiEvent::Engine(SortEvent::Generated { values }) => {
                let bars = vec![BarState::Default; values.len()];
                terminal.draw(&FrameSnapshot {
                    values,
                    bars,
                    comparisons: 0,
                });
            }
            UiEvent::Engine(SortEvent::Frame(frame)) => terminal.draw(&frame),
            UiEvent::Engine(SortEvent::Completed(summary)) => {
                println!("{}", describe_summary(&summary));
            }
            UiEvent::Engine(SortEvent::Aborted { algorithm }) => {
                println!("{algorithm} sort aborted");
            }
            UiEvent::Engine(SortEvent::Failed(report)) => {
                eprintln!("sort failed: {}", report.message);
            }
            UiEvent::Engine(SortEvent::Started { algorithm, len }) => {
                tracing::debug!(%algorithm, len, "sort started");
            }
            UiEvent::Info(message) if json => {
                tracing::info!("{message}");
            }
            UiEvent::Info(message) => println!("{message}"),
            UiEvent::Error(err) => eprintln!("{}", err.display_line()),
            UiEvent::Shutdown => break,
        }
    }

    if worker.join().is_err() {
        anyhow::bail!("sort worker panicked");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_accepts_negative_value_lists() {
        let cli = Cli::parse_from(["sortviz", "run", "--values", "3,-1,2", "-a", "quick"]);
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.values, Some(vec![3, -1, 2]));
        assert_eq!(args.algorithm.as_deref(), Some("quick"));
    }

    #[test]
    fn same_seed_same_rng_stream() {
        use rand::Rng;
        let a: u64 = seeded_rng(Some(9)).gen();
        let b: u64 = seeded_rng(Some(9)).gen();
        assert_eq!(a, b);
    }
}
