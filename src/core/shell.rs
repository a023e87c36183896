//! The root shell's state machine and signal dispatcher.
//!
//! [`ShellState`] holds the two pieces of page state (current run, current
//! main view) and exposes the pure mutations the child signals map to.
//! [`Shell`] wraps it with a FIFO queue so signals raised while another one
//! is being handled run afterwards, never re-entrantly.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, info};

use crate::error::{Result, ShellError};
use crate::run::RunDescriptor;
use crate::view::MainView;

/// Page state owned by the root shell.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShellState {
    current_run: RunDescriptor,
    current_main_view: MainView,
}

impl ShellState {
    /// `{}` and `splash`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_run(&self) -> &RunDescriptor {
        &self.current_run
    }

    pub fn current_main_view(&self) -> MainView {
        self.current_main_view
    }

    /// Replace the current run. No validation, no merging.
    pub fn apply_run_changed(&mut self, new_run: RunDescriptor) -> Transition {
        let previous = std::mem::replace(&mut self.current_run, new_run);
        Transition::RunReplaced {
            previous,
            current: self.current_run.clone(),
        }
    }

    /// Move to `explore`. A no-op once there.
    pub fn apply_all_done(&mut self) -> Transition {
        let from = self.current_main_view;
        self.current_main_view = MainView::Explore;
        if from == MainView::Explore {
            Transition::Unchanged { view: from }
        } else {
            Transition::ViewChanged {
                from,
                to: MainView::Explore,
            }
        }
    }

    pub fn apply(&mut self, signal: ShellSignal) -> Transition {
        match signal {
            ShellSignal::RunChanged { run } => self.apply_run_changed(run),
            ShellSignal::AllDone => self.apply_all_done(),
        }
    }
}

/// Signals the child components raise towards the shell.
///
/// Wire form is one JSON object per signal, tagged by `type`:
/// `{"type":"run-changed","run":{...}}` or `{"type":"all-done"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ShellSignal {
    /// From the run selector.
    RunChanged { run: RunDescriptor },
    /// From the splash screen once its own setup is finished.
    AllDone,
}

impl ShellSignal {
    pub fn run_changed(run: impl Into<RunDescriptor>) -> Self {
        ShellSignal::RunChanged { run: run.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellSignal::RunChanged { .. } => "run-changed",
            ShellSignal::AllDone => "all-done",
        }
    }

    /// Decode one signal. `line` is 1-based and only used for the error.
    pub fn from_json_line(line: usize, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ShellError::InvalidSignal {
            line,
            column: e.column(),
            message: without_position(&e),
        })
    }
}

/// serde_json's message minus its trailing ` at line L column C`; each signal
/// is a single line, so only the column is meaningful.
fn without_position(e: &serde_json::Error) -> String {
    let full = e.to_string();
    let suffix = format!(" at line {} column {}", e.line(), e.column());
    full.strip_suffix(&suffix).unwrap_or(&full).to_string()
}

/// Decode a JSON-lines stream of signals. Blank lines and `#` comments are skipped.
pub fn parse_signal_lines(input: &str) -> Result<Vec<ShellSignal>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, l)| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .map(|(i, l)| ShellSignal::from_json_line(i + 1, l.trim()))
        .collect()
}

/// What applying one signal did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Transition {
    RunReplaced {
        previous: RunDescriptor,
        current: RunDescriptor,
    },
    ViewChanged {
        from: MainView,
        to: MainView,
    },
    /// `all-done` while already in `explore`.
    Unchanged { view: MainView },
}

impl Transition {
    pub fn changes_view(&self) -> bool {
        matches!(self, Transition::ViewChanged { .. })
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::RunReplaced { previous, current } => {
                write!(f, "run: {previous} -> {current}")
            }
            Transition::ViewChanged { from, to } => write!(f, "view: {from} -> {to}"),
            Transition::Unchanged { view } => write!(f, "view: {view} (unchanged)"),
        }
    }
}

/// Signals raised by an observer while it is being notified.
#[derive(Debug, Default)]
pub struct Outbox {
    signals: Vec<ShellSignal>,
}

impl Outbox {
    pub fn emit(&mut self, signal: ShellSignal) {
        self.signals.push(signal);
    }
}

type Observer = Box<dyn FnMut(&ShellState, &Transition, &mut Outbox)>;

/// State plus a run-to-completion signal queue.
pub struct Shell {
    state: ShellState,
    queue: VecDeque<ShellSignal>,
    observers: Vec<Observer>,
    applied: u64,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_state(ShellState::new())
    }

    pub fn with_state(state: ShellState) -> Self {
        Self {
            state,
            queue: VecDeque::new(),
            observers: Vec::new(),
            applied: 0,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of signals applied so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Called after every applied signal. Observers may raise more signals
    /// through the [`Outbox`]; those are queued behind anything already pending.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&ShellState, &Transition, &mut Outbox) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Queue a signal without processing it.
    pub fn emit(&mut self, signal: ShellSignal) {
        debug!(signal = signal.name(), "signal queued");
        self.queue.push_back(signal);
    }

    /// Queue a signal and drain the queue.
    pub fn dispatch(&mut self, signal: ShellSignal) -> Vec<Transition> {
        self.emit(signal);
        self.drain()
    }

    /// Process queued signals, one at a time, until none are left.
    pub fn drain(&mut self) -> Vec<Transition> {
        let mut out = Vec::new();
        while let Some(signal) = self.queue.pop_front() {
            let transition = self.state.apply(signal);
            self.applied += 1;
            log_transition(&transition);

            let mut outbox = Outbox::default();
            for observer in self.observers.iter_mut() {
                observer(&self.state, &transition, &mut outbox);
            }
            self.queue.extend(outbox.signals);

            out.push(transition);
        }
        out
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("state", &self.state)
            .field("pending", &self.queue.len())
            .field("observers", &self.observers.len())
            .field("applied", &self.applied)
            .finish()
    }
}

fn log_transition(t: &Transition) {
    match t {
        Transition::RunReplaced { current, .. } => debug!(run = %current, "current run replaced"),
        Transition::ViewChanged { from, to } => info!(%from, %to, "main view changed"),
        Transition::Unchanged { view } => debug!(%view, "all-done ignored, view already reached"),
    }
}
