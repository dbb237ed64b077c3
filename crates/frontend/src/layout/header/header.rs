use crate::layout::header::mega_menu::MegaMenuBar;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header no-print">
            <div class="header__content">
                <A href="/" attr:class="header__home">
                    {icon("home")}
                    <span class="header__title">"Ordenanzas municipales"</span>
                </A>
                <MegaMenuBar />
            </div>
        </header>
    }
}
