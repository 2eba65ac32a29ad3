// src/engine/orchestrator.rs

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures_util::future::BoxFuture;
use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info, warn};

use crate::reload::ReloadHub;
use crate::watch::{RecursiveWatcher, WatchPattern};

/// A registered rebuild operation: async, fallible, zero arguments.
pub type RebuildAction = Arc<dyn Fn() -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Handle to a registered action.
///
/// Bindings refer to actions through this, so one action bound to many
/// patterns still runs at most once per poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionId(usize);

struct RegisteredAction {
    label: String,
    action: RebuildAction,
}

/// One (pattern -> action) binding. All bindings are fixed before the loop
/// starts and evaluated in registration order.
struct WatchBinding {
    pattern: WatchPattern,
    action: ActionId,
}

/// Owns the poll loop: re-evaluates every binding each cycle, runs the
/// actions whose patterns changed, and pushes a reload signal after each
/// successful run.
pub struct Orchestrator {
    watcher: RecursiveWatcher,
    actions: Vec<RegisteredAction>,
    bindings: Vec<WatchBinding>,
    hub: Option<ReloadHub>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            watcher: RecursiveWatcher::new(),
            actions: Vec::new(),
            bindings: Vec::new(),
            hub: None,
        }
    }

    /// Notify reload clients through `hub` after every successful action.
    pub fn with_reload_hub(mut self, hub: ReloadHub) -> Self {
        self.hub = Some(hub);
        self
    }

    /// Register a distinct rebuild action. The label only shows up in logs.
    pub fn register_action(
        &mut self,
        label: impl Into<String>,
        action: RebuildAction,
    ) -> ActionId {
        let id = ActionId(self.actions.len());
        self.actions.push(RegisteredAction {
            label: label.into(),
            action,
        });
        id
    }

    /// Bind a pattern to an action. The same action may be bound to any
    /// number of patterns.
    pub fn bind(&mut self, pattern: WatchPattern, action: ActionId) {
        debug!(pattern = %pattern.as_str(), "watching");
        self.bindings.push(WatchBinding { pattern, action });
    }

    /// Run the loop: one unconditional invocation of `primary` first (the
    /// initial build), then a poll every `poll_interval` until `shutdown`
    /// flips to true.
    ///
    /// An in-flight build always completes before shutdown or the next tick
    /// is observed; there is at most one build in flight by construction.
    pub async fn run(
        mut self,
        primary: ActionId,
        poll_interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        info!(
            bindings = self.bindings.len(),
            poll_ms = poll_interval.as_millis() as u64,
            "orchestrator started"
        );

        self.run_action(primary).await;

        loop {
            tokio::select! {
                _ = time::sleep(poll_interval) => {}
                _ = shutdown.wait_for(|stop| *stop) => {
                    info!("shutdown requested, stopping orchestrator");
                    return Ok(());
                }
            }
            self.run_cycle().await;
        }
    }

    /// One poll cycle: evaluate every binding, then run each distinct due
    /// action once, in first-bound order.
    ///
    /// Every binding is evaluated even once its action is already due. The
    /// change check updates fingerprints as it goes, so skipping patterns
    /// would misreport their files as changed on a later cycle.
    pub async fn run_cycle(&mut self) {
        let mut due: Vec<ActionId> = Vec::new();

        for binding in &self.bindings {
            if self.watcher.has_pattern_changed(&binding.pattern)
                && !due.contains(&binding.action)
            {
                due.push(binding.action);
            }
        }

        for action in due {
            self.run_action(action).await;
        }
    }

    /// Run one action to completion.
    ///
    /// Failure is logged and swallowed: the loop keeps going, the previous
    /// output stays served, and no reload signal is sent.
    pub async fn run_action(&self, id: ActionId) {
        let Some(registered) = self.actions.get(id.0) else {
            warn!(action = id.0, "unknown action id, skipping");
            return;
        };

        debug!(action = %registered.label, "running action");
        match (registered.action)().await {
            Ok(()) => {
                info!(action = %registered.label, "action succeeded");
                if let Some(hub) = &self.hub {
                    hub.notify_reload();
                }
            }
            Err(err) => {
                warn!(
                    action = %registered.label,
                    error = %err,
                    "action failed, keeping previous output"
                );
            }
        }
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
