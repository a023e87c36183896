use leptos::prelude::*;

#[component]
pub(super) fn Header(title: String, children: Children) -> impl IntoView {
    view! {
        <header>
            <div class="inner-header">
                <span class="brand-icon" aria-hidden="true">"🔍"</span>
                " "{title}" – "
                {children()}
            </div>
        </header>
    }
}

#[component]
pub(super) fn Footer(text: String) -> impl IntoView {
    view! {
        <footer>
            <div class="inner-footer">{text}</div>
        </footer>
    }
}
