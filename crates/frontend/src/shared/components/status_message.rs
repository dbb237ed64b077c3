use leptos::prelude::*;

/// Centred message replacing a screen's content (read failures, empty lists)
#[component]
pub fn StatusMessage(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="status-message">
            <h2 class="status-message__text">{text}</h2>
        </div>
    }
}
