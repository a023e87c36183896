use leptos::prelude::*;
use neural_ir_explorer::run::RunDescriptor;

use crate::ui_model::{current_run_label, SplashStatus};

/// Landing screen. Emits `all-done` when the user continues with a selected
/// run. With no runs configured it shows why and never emits.
#[component]
pub(super) fn SplashScreen(
    run_info: Signal<RunDescriptor>,
    available_runs: usize,
    on_all_done: Callback<()>,
) -> impl IntoView {
    let status = Memo::new(move |_| run_info.with(|r| SplashStatus::evaluate(available_runs, r)));
    let run_label = move || run_info.with(current_run_label).unwrap_or_default();

    view! {
        <section class="splash-screen">
            <h2>"Inspect neural IR model runs"</h2>
            <p class=move || {
                if status.get() == SplashStatus::NoRuns { "splash-status error" } else { "splash-status" }
            }>
                {move || status.get().message()}
            </p>
            <Show when=move || status.get().can_continue()>
                <p class="splash-run">"Selected: "<strong>{run_label}</strong></p>
                <button class="btn" on:click=move |_| on_all_done.run(())>
                    "Explore"
                </button>
            </Show>
        </section>
    }
}
