use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use thaw::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    log::error!("no route for {}", location.pathname.get_untracked());

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="error-page">
                <h1 class="error-page__title">"Lo sentimos, parece que ha ocurrido un error"</h1>
                <p class="error-page__text">"La página solicitada no existe."</p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigate("/", Default::default())
                >
                    "Volver al inicio"
                </Button>
            </div>
        </PageFrame>
    }
}
