use contracts::shared::dialog::Dialog as ResultMessage;
use leptos::prelude::*;
use thaw::*;

/// Blocking dialog showing the outcome of a write operation
///
/// Open while `message` holds a value; closing it (button, mask or Esc)
/// runs `on_close` once.
#[component]
pub fn ResultDialog(
    #[prop(into)] message: Signal<Option<ResultMessage>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    Effect::new(move |_| {
        open.set(message.with(|m| m.is_some()));
    });

    Effect::new(move |prev: Option<bool>| {
        let is_open = open.get();
        if prev == Some(true) && !is_open && message.with_untracked(|m| m.is_some()) {
            on_close.run(());
        }
        is_open
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || message.with(|m| m.as_ref().map(|d| d.title()).unwrap_or_default())}
                    </DialogTitle>
                    <DialogContent>
                        {move || message.get().map(|d| {
                            let class = if d.is_success() {
                                "result-dialog__message result-dialog__message--success"
                            } else {
                                "result-dialog__message result-dialog__message--error"
                            };
                            view! { <div class=class>{d.message}</div> }
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| open.set(false)
                        >
                            "Aceptar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
