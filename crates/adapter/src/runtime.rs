//! Adapter runtime integration.
//!
//! Bridges synchronous callers with the async game loop.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::AdapterConfig;
use crate::core::{GameSnapshot, GameState, PieceSource, RandomPieceSource};
use crate::types::{Command, LockEvent, Status, StepOutcome};

/// Input delivered to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound {
    Command(Command),
    /// Reset the game; accepted in any status.
    Restart,
    /// Stop the loop.
    Shutdown,
}

impl From<Command> for Inbound {
    fn from(value: Command) -> Self {
        Inbound::Command(value)
    }
}

fn gravity_interval(ms: u32) -> Interval {
    let period = Duration::from_millis(u64::from(ms.max(1)));
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Own `state` and apply inputs and gravity to it one at a time.
///
/// Runs until [`Inbound::Shutdown`] arrives or every sender is dropped, then returns
/// the final state.
pub async fn run_game_loop<S: PieceSource>(
    mut state: GameState<S>,
    mut cmd_rx: mpsc::Receiver<Inbound>,
    snapshot_tx: watch::Sender<GameSnapshot>,
    event_tx: mpsc::UnboundedSender<LockEvent>,
) -> GameState<S> {
    let mut period_ms = state.gravity_ms();
    let mut gravity = gravity_interval(period_ms);
    snapshot_tx.send_replace(state.snapshot());
    info!(gravity_ms = period_ms, "game loop started");

    loop {
        let outcome = tokio::select! {
            inbound = cmd_rx.recv() => match inbound {
                Some(Inbound::Command(command)) => state.apply_command(command),
                Some(Inbound::Restart) => {
                    state.start();
                    gravity.reset();
                    StepOutcome::Moved
                }
                Some(Inbound::Shutdown) | None => break,
            },
            _ = gravity.tick() => {
                if state.status() != Status::Running {
                    continue;
                }
                state.tick()
            }
        };

        match outcome {
            StepOutcome::Ignored | StepOutcome::Rejected => continue,
            StepOutcome::Locked(event) => {
                if event_tx.send(event).is_err() {
                    debug!("lock event receiver dropped");
                }
            }
            StepOutcome::Moved => {}
        }

        if state.gravity_ms() != period_ms {
            period_ms = state.gravity_ms();
            gravity = gravity_interval(period_ms);
            debug!(gravity_ms = period_ms, "gravity interval changed");
        }

        snapshot_tx.send_replace(state.snapshot());
    }

    info!(score = state.score(), level = state.level(), "game loop stopped");
    state
}

/// Running adapter instance with its own tokio runtime.
pub struct Adapter {
    rt: Runtime,
    cmd_tx: mpsc::Sender<Inbound>,
    snapshot_rx: watch::Receiver<GameSnapshot>,
    event_rx: mpsc::UnboundedReceiver<LockEvent>,
    handle: Option<JoinHandle<GameSnapshot>>,
}

impl Adapter {
    /// Start with the uniform random source seeded from `config.game.seed`.
    pub fn start(config: AdapterConfig) -> Result<Self> {
        let source = RandomPieceSource::from_seed(config.game.seed);
        Self::start_with_source(config, source)
    }

    /// Start the adapter from environment variables.
    pub fn start_from_env() -> Result<Self> {
        Self::start(AdapterConfig::from_env())
    }

    pub fn start_with_source<S>(config: AdapterConfig, source: S) -> Result<Self>
    where
        S: PieceSource + Send + 'static,
    {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("gridfall-adapter")
            .enable_all()
            .build()
            .context("failed to create tokio runtime")?;

        let state = GameState::with_source(config.game.clone(), source);
        let (cmd_tx, cmd_rx) = mpsc::channel::<Inbound>(config.max_pending_commands.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());
        let (event_tx, event_rx) = mpsc::unbounded_channel::<LockEvent>();

        let handle = rt.spawn(async move {
            run_game_loop(state, cmd_rx, snapshot_tx, event_tx)
                .await
                .snapshot()
        });

        Ok(Self {
            rt,
            cmd_tx,
            snapshot_rx,
            event_rx,
            handle: Some(handle),
        })
    }

    /// Enqueue an input, waiting for queue capacity.
    ///
    /// Must not be called from inside an async context.
    pub fn send(&self, inbound: impl Into<Inbound>) -> Result<()> {
        let inbound = inbound.into();
        self.cmd_tx.blocking_send(inbound).map_err(|_| {
            warn!(?inbound, "input dropped, game loop is gone");
            anyhow!("game loop is not running")
        })
    }

    /// Enqueue an input without waiting; fails when the queue is full.
    pub fn try_send(&self, inbound: impl Into<Inbound>) -> Result<()> {
        self.cmd_tx
            .try_send(inbound.into())
            .map_err(|e| anyhow!("failed to enqueue input: {}", e))
    }

    /// Sender for async producers.
    pub fn sender(&self) -> mpsc::Sender<Inbound> {
        self.cmd_tx.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        *self.snapshot_rx.borrow()
    }

    pub fn try_recv_event(&mut self) -> Option<LockEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Stop the loop after every queued input has been applied; returns the final snapshot.
    pub fn shutdown(mut self) -> Result<GameSnapshot> {
        // A closed queue means the loop already stopped; the join below still reports it.
        let _ = self.cmd_tx.blocking_send(Inbound::Shutdown);
        let handle = self
            .handle
            .take()
            .ok_or_else(|| anyhow!("adapter already shut down"))?;
        self.rt
            .block_on(handle)
            .context("game loop task failed")
    }
}
