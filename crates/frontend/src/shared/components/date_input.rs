use leptos::prelude::*;

/// DateInput component with native date picker
///
/// Bound to a `yyyy-mm-dd` string signal; clearing the picker stores "".
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    #[prop(optional)] min: Option<String>,
    #[prop(optional)] max: Option<String>,
    #[prop(optional, into)] invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            class:date-input--invalid=move || invalid.get()
            min=min
            max=max
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
