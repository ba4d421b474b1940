//! Owns the session between sorts and the single in-flight sort task.

use rand::Rng;
use shared::{
    domain::{AlgorithmKind, SortSummary},
    error::ErrorReport,
    protocol::SortEvent,
};
use tokio::{
    sync::{broadcast, mpsc},
    task::JoinHandle,
};
use tracing::{error, info, warn};

use crate::{
    config::{validate_speed, SortConfig},
    error::EngineError,
    generate::generate_values,
    reporter::{ChannelReporter, PendingFrame},
    session::Session,
};

type SortOutcome = (Session, Result<SortSummary, EngineError>);

struct InFlightSort {
    algorithm: AlgorithmKind,
    handle: JoinHandle<SortOutcome>,
}

/// Runs at most one animated sort at a time.
///
/// While a sort is in flight its task owns the [`Session`]; the controller
/// gets it back when the task is joined. Installing a new array aborts the
/// task instead of racing with it.
///
/// Lifecycle events go out on `events`. Frames go to `frames` one at a time
/// and the sort waits for each to be drawn.
pub struct SortController {
    session: Option<Session>,
    in_flight: Option<InFlightSort>,
    events: broadcast::Sender<SortEvent>,
    frames: mpsc::Sender<PendingFrame>,
    config: SortConfig,
}

impl SortController {
    pub fn new(
        config: SortConfig,
        events: broadcast::Sender<SortEvent>,
        frames: mpsc::Sender<PendingFrame>,
    ) -> Self {
        Self {
            session: None,
            in_flight: None,
            events,
            frames,
            config,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SortEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Takes effect on the next sort; a running sort keeps its delay.
    pub fn set_speed(&mut self, speed: u32) -> Result<(), EngineError> {
        validate_speed(speed)?;
        self.config.speed = speed;
        Ok(())
    }

    pub fn is_sorting(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|in_flight| !in_flight.handle.is_finished())
    }

    /// Current values, unless a sort task is holding the session.
    pub fn values(&self) -> Option<&[i64]> {
        self.session.as_ref().map(Session::values)
    }

    pub async fn generate<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        let values = generate_values(size, rng)?;
        self.config.size = size;
        self.load(values).await;
        Ok(())
    }

    /// Installs `values` as a fresh session, aborting any in-flight sort.
    pub async fn load(&mut self, values: Vec<i64>) {
        self.abort_in_flight().await;
        info!(len = values.len(), "installed new array");
        let _ = self.events.send(SortEvent::Generated {
            values: values.clone(),
        });
        // The previous session went down with an aborted task, if any.
        self.session
            .get_or_insert_with(Session::default)
            .regenerate(values);
    }

    pub async fn start_sort(&mut self, algorithm: AlgorithmKind) -> Result<(), EngineError> {
        self.reap_finished().await;
        if let Some(in_flight) = &self.in_flight {
            warn!(
                requested = %algorithm,
                running = %in_flight.algorithm,
                "rejecting sort while another is in flight"
            );
            return Err(EngineError::SortInProgress {
                algorithm: in_flight.algorithm,
            });
        }

        let session = self.session.take().ok_or(EngineError::NoSequence)?;
        if let Err(err) = session.preflight(algorithm, &self.config) {
            self.session = Some(session);
            return Err(err);
        }

        let config = self.config;
        let events = self.events.clone();
        let frames = self.frames.clone();
        let handle = tokio::spawn(async move {
            let mut session = session;
            let mut reporter = ChannelReporter::new(frames);
            let _ = events.send(SortEvent::Started {
                algorithm,
                len: session.values().len(),
            });
            let result = session.run_sort(algorithm, &config, &mut reporter).await;
            let _ = match &result {
                Ok(summary) => events.send(SortEvent::Completed(summary.clone())),
                Err(err) => events.send(SortEvent::Failed(ErrorReport::from(err))),
            };
            (session, result)
        });

        self.in_flight = Some(InFlightSort { algorithm, handle });
        Ok(())
    }

    /// Joins the in-flight sort, if any, and takes its session back.
    ///
    /// A task that panicked loses its session; that failure is published as
    /// `failed` since the task could not report it itself.
    pub async fn wait(&mut self) -> Option<Result<SortSummary, EngineError>> {
        let in_flight = self.in_flight.take()?;
        match in_flight.handle.await {
            Ok((session, result)) => {
                self.session = Some(session);
                Some(result)
            }
            Err(err) if err.is_cancelled() => Some(Err(EngineError::Aborted {
                algorithm: in_flight.algorithm,
            })),
            Err(err) => {
                let err = EngineError::TaskFailed(err.to_string());
                error!(algorithm = %in_flight.algorithm, "sort task failed: {err}");
                let _ = self.events.send(SortEvent::Failed(ErrorReport::from(&err)));
                Some(Err(err))
            }
        }
    }

    /// Aborts any in-flight sort and closes the event channel for this controller.
    pub async fn shutdown(mut self) {
        self.abort_in_flight().await;
        info!("sort controller shut down");
    }

    async fn reap_finished(&mut self) {
        let finished = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.handle.is_finished());
        if finished {
            // The outcome was already published as an event.
            let _ = self.wait().await;
        }
    }

    async fn abort_in_flight(&mut self) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        let running = !in_flight.handle.is_finished();
        if running {
            warn!(algorithm = %in_flight.algorithm, "aborting in-flight sort");
            in_flight.handle.abort();
        }
        // The old session is discarded either way. Joining first means no
        // frame or event from the old task can follow `aborted`.
        let _ = in_flight.handle.await;
        if running {
            let _ = self.events.send(SortEvent::Aborted {
                algorithm: in_flight.algorithm,
            });
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
