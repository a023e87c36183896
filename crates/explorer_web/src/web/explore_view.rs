use leptos::prelude::*;
use neural_ir_explorer::run::RunDescriptor;

use crate::ui_model::{current_run_label, run_fields, FieldRow};

#[component]
pub(super) fn ExploreView(run_info: Signal<RunDescriptor>) -> impl IntoView {
    // Local state; kept while the view is hidden.
    let (filter, set_filter) = signal(String::new());

    let rows = Memo::new(move |_| {
        let f = filter.get();
        run_info.with(|r| run_fields(r, &f))
    });
    let heading = move || {
        run_info
            .with(current_run_label)
            .unwrap_or_else(|| "no run selected".to_string())
    };

    view! {
        <section class="explore-view">
            <div class="explore-toolbar">
                <h2>{heading}</h2>
                <input
                    type="search"
                    placeholder="filter fields"
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
            </div>
            <table class="run-fields">
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row: &FieldRow| (row.key.clone(), row.value.clone())
                        children=move |row| {
                            view! {
                                <tr>
                                    <th>{row.key}</th>
                                    <td>{row.value}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
