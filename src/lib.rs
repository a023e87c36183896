//! # neural_ir_explorer
//!
//! Root shell of the neural-ir-explorer run inspector.
//!
//! The page is a header with a run selector, a splash screen shown while the
//! selected run is prepared, and the explore view. This crate holds the part
//! that decides what is on screen: a two-state view machine (`splash` then
//! `explore`) plus the currently selected run, both driven by signals from
//! the child components. Nothing here depends on a renderer, so the whole
//! state machine is unit-testable on the host.
//!
//! ## Quick Start
//!
//! ```
//! use neural_ir_explorer::prelude::*;
//!
//! let mut shell = Shell::new();
//! shell.dispatch(ShellSignal::run_changed(serde_json::json!({ "id": "run-1" })));
//! shell.dispatch(ShellSignal::AllDone);
//!
//! assert_eq!(shell.state().current_main_view(), MainView::Explore);
//! let layout = ShellLayout::from_state(shell.state());
//! assert!(!layout.splash.is_mounted());
//! ```
//!
//! ## Feature Flags
//!
//! - `config-files`: load [`config::ShellConfig`] from JSON or YAML files
//! - `cli` (default): the `nirx-shell` replay binary (implies `config-files`)
//!
//! The browser app (`explorer_web`) depends on this crate with
//! `default-features = false`.
//!
//! ## Modules
//!
//! - [`run`]: opaque run descriptors
//! - [`view`]: the `splash`/`explore` view state
//! - [`shell`]: state container, signals and the run-to-completion dispatcher
//! - [`layout`]: render plan (mount vs. visibility) and the render tree
//! - [`config`]: page configuration
//! - [`observer`]: read-only snapshots

#[path = "core/run.rs"]
pub mod run;

#[path = "core/view.rs"]
pub mod view;

#[path = "core/shell.rs"]
pub mod shell;

#[path = "core/layout.rs"]
pub mod layout;

#[path = "core/config.rs"]
pub mod config;

pub mod error;

pub mod observer;

/// Prelude module for convenient imports.
///
/// ```
/// use neural_ir_explorer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ShellConfig;
    pub use crate::error::ShellError;
    pub use crate::layout::{Component, RenderTree, ShellLayout, Slot};
    pub use crate::observer::{ShellAdapter, ShellSnapshot};
    pub use crate::run::RunDescriptor;
    pub use crate::shell::{Shell, ShellSignal, ShellState, Transition};
    pub use crate::view::MainView;
}
