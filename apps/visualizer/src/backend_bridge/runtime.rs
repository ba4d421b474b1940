//! Sort worker: owns the tokio runtime and the `SortController`, consumes
//! queued commands and forwards engine events and frames to the UI thread.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use rand_chacha::ChaCha8Rng;
use shared::{domain::AlgorithmKind, protocol::SortEvent};
use sort_engine::{PendingFrame, SortController};
use tokio::sync::{
    broadcast::{self, error::RecvError},
    mpsc,
};

use crate::{
    backend_bridge::commands::BackendCommand,
    config::Settings,
    controller::events::{UiError, UiErrorContext, UiEvent},
    seeded_rng,
};

const EVENT_BUFFER: usize = 1024;
// One frame in flight keeps the sort in lockstep with the UI.
const FRAME_BUFFER: usize = 1;

pub fn launch(
    settings: Settings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("sort worker startup failure: failed to build runtime: {err}"),
                )));
                let _ = ui_tx.send(UiEvent::Shutdown);
                tracing::error!("failed to build sort worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(run_worker(settings, cmd_rx, ui_tx));
    })
}

async fn run_worker(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let (events_tx, events_rx) = broadcast::channel(EVENT_BUFFER);
    let (frames_tx, frames_rx) = mpsc::channel(FRAME_BUFFER);
    let mut controller = SortController::new(settings.sort_config(), events_tx, frames_tx);
    let mut rng = seeded_rng(settings.seed);
    let forwarder = tokio::spawn(forward_events(events_rx, ui_tx.clone()));
    let frame_forwarder = tokio::spawn(forward_frames(frames_rx, ui_tx.clone()));

    generate(&mut controller, None, &mut rng, &ui_tx).await;
    let _ = ui_tx.send(UiEvent::Info(
        "ready: generate [size] | load <v,v,..> | sort <algorithm> | speed <n> | quit".into(),
    ));

    loop {
        // crossbeam receives block, so park them on the blocking pool.
        let rx = cmd_rx.clone();
        let cmd = match tokio::task::spawn_blocking(move || rx.recv()).await {
            Ok(Ok(cmd)) => cmd,
            Ok(Err(_)) | Err(_) => break,
        };

        match cmd {
            BackendCommand::Generate { size } => {
                generate(&mut controller, size, &mut rng, &ui_tx).await;
            }
            BackendCommand::Load { values } => controller.load(values).await,
            BackendCommand::Sort { algorithm } => {
                let started = match algorithm.parse::<AlgorithmKind>() {
                    Ok(kind) => controller.start_sort(kind).await,
                    Err(err) => Err(err.into()),
                };
                if let Err(err) = started {
                    tracing::warn!("sort request rejected: {err}");
                    let _ = ui_tx.send(UiEvent::Error(UiError::from_report(
                        UiErrorContext::Sort,
                        (&err).into(),
                    )));
                }
            }
            BackendCommand::SetSpeed { speed } => match controller.set_speed(speed) {
                Ok(()) => {
                    let _ = ui_tx.send(UiEvent::Info(format!(
                        "speed set to {speed}; applies to the next sort"
                    )));
                }
                Err(err) => {
                    let _ = ui_tx.send(UiEvent::Error(UiError::from_report(
                        UiErrorContext::Speed,
                        (&err).into(),
                    )));
                }
            },
            BackendCommand::Quit => break,
        }
    }

    controller.shutdown().await;
    let _ = forwarder.await;
    let _ = frame_forwarder.await;
    let _ = ui_tx.send(UiEvent::Shutdown);
}

async fn generate(
    controller: &mut SortController,
    size: Option<usize>,
    rng: &mut ChaCha8Rng,
    ui_tx: &Sender<UiEvent>,
) {
    let size = size.unwrap_or(controller.config().size);
    if let Err(err) = controller.generate(size, rng).await {
        let _ = ui_tx.send(UiEvent::Error(UiError::from_report(
            UiErrorContext::Generate,
            (&err).into(),
        )));
    }
}

async fn forward_events(mut events_rx: broadcast::Receiver<SortEvent>, ui_tx: Sender<UiEvent>) {
    loop {
        match events_rx.recv().await {
            Ok(event) => {
                if ui_tx.send(UiEvent::Engine(event)).is_err() {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "ui fell behind; dropped lifecycle events");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Hands frames to the UI thread, which marks each one drawn.
async fn forward_frames(mut frames_rx: mpsc::Receiver<PendingFrame>, ui_tx: Sender<UiEvent>) {
    while let Some(frame) = frames_rx.recv().await {
        // A failed send drops the frame, which releases the waiting sort.
        if ui_tx.send(UiEvent::Frame(frame)).is_err() {
            break;
        }
    }
}
