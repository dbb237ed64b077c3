use leptos::prelude::*;

/// Labelled form row with the inline validation hint underneath
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(optional)] required: bool,
    /// Hint shown while the field is invalid
    #[prop(into)]
    hint: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || hint.get().is_some()>
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            {children()}
            {move || hint.get().map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}
