use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::api_base;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    log::info!("data api: {}", api_base());

    view! {
        <AppRoutes />
    }
}
