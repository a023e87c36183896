use serde::Serialize;

use crate::layout::ShellLayout;
use crate::run::RunDescriptor;
use crate::shell::Shell;
use crate::view::MainView;

/// What the shell is showing right now, plus queue counters.
///
/// Taken through a shared borrow, so it cannot raise signals. The current
/// run is cloned into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellSnapshot {
    pub view: MainView,
    pub run: RunDescriptor,
    pub layout: ShellLayout,
    pub pending_signals: usize,
    pub applied_signals: u64,
}

pub struct ShellAdapter<'a> {
    shell: &'a Shell,
}

impl<'a> ShellAdapter<'a> {
    pub fn new(shell: &'a Shell) -> Self {
        Self { shell }
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        let state = self.shell.state();
        ShellSnapshot {
            view: state.current_main_view(),
            run: state.current_run().clone(),
            layout: ShellLayout::from_state(state),
            pending_signals: self.shell.pending(),
            applied_signals: self.shell.applied(),
        }
    }
}

impl ShellSnapshot {
    /// Short human-readable summary, one field per line.
    pub fn summary(&self) -> String {
        format!(
            "view: {}\nrun: {}\nsplash mounted: {}\nexplore visible: {}\nsignals applied: {} (pending {})",
            self.view,
            self.run,
            self.layout.splash.is_mounted(),
            self.layout.explore.is_visible(),
            self.applied_signals,
            self.pending_signals,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellSignal;
    use serde_json::json;

    #[test]
    fn snapshot_tracks_queue_and_view() {
        let mut shell = Shell::new();
        shell.emit(ShellSignal::run_changed(json!({ "id": "run-1" })));

        let snap = ShellAdapter::new(&shell).snapshot();
        assert_eq!(snap.view, MainView::Splash);
        assert!(snap.run.is_empty_record());
        assert_eq!(snap.pending_signals, 1);
        assert_eq!(snap.applied_signals, 0);

        shell.drain();
        shell.dispatch(ShellSignal::AllDone);
        let snap = ShellAdapter::new(&shell).snapshot();
        assert_eq!(snap.view, MainView::Explore);
        assert_eq!(snap.run.as_value(), &json!({ "id": "run-1" }));
        assert!(!snap.layout.splash.is_mounted());
        assert_eq!(snap.applied_signals, 2);
        assert!(snap.summary().contains("splash mounted: false"));
    }

    #[test]
    fn snapshot_serializes_layout_slots() {
        let shell = Shell::new();
        let v = serde_json::to_value(ShellAdapter::new(&shell).snapshot()).unwrap();
        assert_eq!(v["view"], json!("splash"));
        assert_eq!(v["layout"]["splash"], json!({ "slot": "mounted", "visible": true }));
        assert_eq!(v["layout"]["explore"], json!({ "slot": "mounted", "visible": false }));
    }
}
