//! UI models that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! child components' display logic on the host. The shell never calls into
//! this module; only the run selector, splash screen and explore view do.

use neural_ir_explorer::run::RunDescriptor;
use serde_json::Value;

/// Id of the `<script type="application/json">` element holding the page config.
pub const CONFIG_ELEMENT_ID: &str = "nirx-config";

/// Display label for a run in the selector: `name`, else `id`, else `run #N`.
pub fn run_label(run: &RunDescriptor, index: usize) -> String {
    run.str_field("name")
        .or_else(|| run.str_field("id"))
        .map(str::to_string)
        .unwrap_or_else(|| format!("run #{}", index + 1))
}

/// Label for the run currently held by the shell, which may be `{}`.
pub fn current_run_label(run: &RunDescriptor) -> Option<String> {
    if run.is_empty_record() {
        None
    } else {
        Some(run_label(run, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashStatus {
    /// Nothing to explore; the splash stays up.
    NoRuns,
    /// Runs exist but none has been picked yet.
    WaitingForRun,
    Ready,
}

impl SplashStatus {
    pub fn evaluate(available_runs: usize, current: &RunDescriptor) -> Self {
        if available_runs == 0 {
            SplashStatus::NoRuns
        } else if current.is_empty_record() {
            SplashStatus::WaitingForRun
        } else {
            SplashStatus::Ready
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SplashStatus::NoRuns => "No runs configured. Add runs to the page config and reload.",
            SplashStatus::WaitingForRun => "Pick a run in the header to begin.",
            SplashStatus::Ready => "Run selected.",
        }
    }

    pub fn can_continue(self) -> bool {
        matches!(self, SplashStatus::Ready)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub key: String,
    pub value: String,
}

/// Top-level fields of a run, sorted by key, filtered by a case-insensitive
/// substring on the key. Non-object runs show as a single `value` row.
pub fn run_fields(run: &RunDescriptor, filter: &str) -> Vec<FieldRow> {
    let needle = filter.trim().to_ascii_lowercase();
    let rows: Vec<FieldRow> = match run.as_value() {
        Value::Object(m) => m
            .iter()
            .map(|(k, v)| FieldRow {
                key: k.clone(),
                value: display_value(v),
            })
            .collect(),
        other => vec![FieldRow {
            key: "value".to_string(),
            value: display_value(other),
        }],
    };
    let mut rows: Vec<FieldRow> = rows
        .into_iter()
        .filter(|r| needle.is_empty() || r.key.to_ascii_lowercase().contains(&needle))
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}

fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse the selector's `<option value>` back into a run index.
pub fn parse_run_index(value: &str, available_runs: usize) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&i| i < available_runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_prefer_name_then_id() {
        let named = RunDescriptor::new(json!({ "name": "TK", "id": "run-1" }));
        let with_id = RunDescriptor::new(json!({ "id": "run-1" }));
        let bare = RunDescriptor::new(json!({ "score_type": "knrm" }));
        assert_eq!(run_label(&named, 0), "TK");
        assert_eq!(run_label(&with_id, 3), "run-1");
        assert_eq!(run_label(&bare, 1), "run #2");
        assert_eq!(current_run_label(&RunDescriptor::empty()), None);
        assert_eq!(current_run_label(&with_id).as_deref(), Some("run-1"));
    }

    #[test]
    fn splash_status_covers_missing_runs() {
        let empty = RunDescriptor::empty();
        let run = RunDescriptor::new(json!({ "id": "run-1" }));
        assert_eq!(SplashStatus::evaluate(0, &empty), SplashStatus::NoRuns);
        assert_eq!(SplashStatus::evaluate(0, &run), SplashStatus::NoRuns);
        assert_eq!(SplashStatus::evaluate(2, &empty), SplashStatus::WaitingForRun);
        assert_eq!(SplashStatus::evaluate(2, &run), SplashStatus::Ready);
        assert!(!SplashStatus::NoRuns.can_continue());
        assert!(SplashStatus::Ready.can_continue());
        assert!(!SplashStatus::NoRuns.message().is_empty());
    }

    #[test]
    fn fields_are_sorted_and_filtered() {
        let run = RunDescriptor::new(json!({
            "score_type": "tk",
            "name": "TK",
            "kernels_mus": [1.0, 0.9],
            "rest-kernels-last": 5
        }));
        let all = run_fields(&run, "");
        let keys: Vec<&str> = all.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["kernels_mus", "name", "rest-kernels-last", "score_type"]);
        assert_eq!(all[1].value, "TK");
        assert_eq!(all[0].value, "[1.0,0.9]");

        let kern = run_fields(&run, " KERN");
        assert_eq!(kern.len(), 2);

        let scalar = run_fields(&RunDescriptor::new(json!(42)), "");
        assert_eq!(scalar, vec![FieldRow { key: "value".into(), value: "42".into() }]);
    }

    #[test]
    fn option_values_parse_within_bounds() {
        assert_eq!(parse_run_index("1", 2), Some(1));
        assert_eq!(parse_run_index("2", 2), None);
        assert_eq!(parse_run_index("x", 2), None);
    }
}
