use leptos::prelude::*;
use neural_ir_explorer::run::RunDescriptor;

use crate::ui_model::{parse_run_index, run_label};

/// Run selector. Emits `run-changed` on every selection and once on mount
/// with the first configured run.
#[component]
pub(super) fn RunInfoBox(
    runs: StoredValue<Vec<RunDescriptor>>,
    on_run_changed: Callback<RunDescriptor>,
) -> impl IntoView {
    let (selected, set_selected) = signal(0usize);

    Effect::new(move |_| {
        if let Some(first) = runs.with_value(|r| r.first().cloned()) {
            on_run_changed.run(first);
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        let count = runs.with_value(Vec::len);
        if let Some(i) = parse_run_index(&event_target_value(&ev), count) {
            set_selected.set(i);
            if let Some(run) = runs.with_value(|r| r.get(i).cloned()) {
                on_run_changed.run(run);
            }
        }
    };

    if runs.with_value(Vec::is_empty) {
        return view! { <span class="run-info-box subtle">"no runs"</span> }.into_any();
    }

    let options = runs.with_value(|r| {
        r.iter()
            .enumerate()
            .map(|(i, run)| {
                let label = run_label(run, i);
                view! {
                    <option value=i.to_string() selected=move || selected.get() == i>
                        {label}
                    </option>
                }
            })
            .collect_view()
    });

    view! {
        <span class="run-info-box">
            <select class="run-select" on:change=on_change>
                {options}
            </select>
        </span>
    }
    .into_any()
}
