use leptos::prelude::*;
use neural_ir_explorer::prelude::*;

mod explore_view;
mod host;
mod run_info_box;
mod shell;
mod splash_screen;

use explore_view::ExploreView;
use run_info_box::RunInfoBox;
use shell::{Footer, Header};
use splash_screen::SplashScreen;

pub fn start() {
    let config = host::read_config();
    let mount_selector = config.mount_selector.clone();

    match host::mount_element(&mount_selector) {
        Ok(el) => leptos::mount::mount_to(el, move || view! { <App config=config /> }).forget(),
        Err(e) => {
            host::console_error(&format!("{e}; mounting on <body>"));
            mount_to_body(move || view! { <App config=config /> });
        }
    }
}

#[component]
fn App(config: ShellConfig) -> impl IntoView {
    let state = RwSignal::new(ShellState::new());

    // Handlers run to completion on the main thread, one signal at a time.
    let dispatch = move |signal: ShellSignal| {
        let mut transition = None;
        state.update(|s| transition = Some(s.apply(signal)));
        if let Some(t) = transition.filter(Transition::changes_view) {
            host::console_log(&t.to_string());
        }
    };

    let on_run_changed = Callback::new(move |run: RunDescriptor| {
        dispatch(ShellSignal::RunChanged { run })
    });
    let on_all_done = Callback::new(move |()| dispatch(ShellSignal::AllDone));

    let layout = Memo::new(move |_| state.with(ShellLayout::from_state));
    let run_info = Signal::derive(move || state.with(|s| s.current_run().clone()));

    let runs = StoredValue::new(config.runs.clone());
    let title = config.title.clone();
    let footer = config.footer.clone();

    view! {
        <div class="app">
            <Header title=title>
                <RunInfoBox runs=runs on_run_changed=on_run_changed />
            </Header>

            // Unmounted outside `splash`: leaving it drops the splash screen's state.
            <Show when=move || layout.get().splash.is_mounted()>
                <SplashScreen
                    run_info=run_info
                    available_runs=runs.with_value(Vec::len)
                    on_all_done=on_all_done
                />
            </Show>

            // Always mounted; only its display follows the view state.
            <div
                class="explore-slot"
                style=move || format!("display: {};", layout.get().explore.display())
            >
                <ExploreView run_info=run_info />
            </div>

            <Footer text=footer />
        </div>
    }
}
