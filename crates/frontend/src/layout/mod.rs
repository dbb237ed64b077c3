pub mod header;

use header::Header;
use leptos::prelude::*;

/// Application shell
///
/// ```text
/// +------------------------------------------+
/// |        Header (title + mega menu)         |
/// +------------------------------------------+
/// |              routed page                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
