use crate::domain::a002_ordenanza::ui::list::OrdenanzaTable;
use crate::shared::components::{DateInput, FilterPanel, PageHeader, ResultDialog, StatusMessage};
use crate::shared::export::download_table_pdf;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_municipio::Municipio;
use contracts::domain::a002_ordenanza::{Ordenanza, OrdenanzaFilter};
use contracts::shared::list::LoadState;
use leptos::prelude::*;
use thaw::*;

/// Ordenanza table narrowed by vigencia, approval date and municipio
///
/// The municipio list is fetched alongside the ordenanzas to fill the
/// municipio select.
#[component]
#[allow(non_snake_case)]
pub fn OrdenanzaFilterList() -> impl IntoView {
    let vm = ListViewModel::<Ordenanza>::new();
    let municipios = ListViewModel::<Municipio>::new();

    let vigente = RwSignal::new(String::new());
    let aprobada_desde = RwSignal::new(String::new());
    let municipio = RwSignal::new(String::new());
    let is_expanded = RwSignal::new(true);
    let export_error = RwSignal::new(None::<String>);

    let filter = Memo::new(move |_| OrdenanzaFilter {
        vigente: vigente.get(),
        aprobada_desde: aprobada_desde.get(),
        municipio: municipio.get(),
    });

    let visible = move || filter.with(|f| vm.visible(&f.to_list_filter()));

    let clear = Callback::new(move |_| {
        vigente.set(String::new());
        aprobada_desde.set(String::new());
        municipio.set(String::new());
    });

    let export_pdf = move |_| {
        let rows = visible();
        match download_table_pdf("Listado de ordenanzas", &rows, "ordenanzas_filtradas") {
            Ok(()) => export_error.set(None),
            Err(e) => {
                log::warn!("pdf export skipped: {}", e);
                export_error.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="a002_ordenanza--filter" category=PAGE_CAT_LIST>
            <PageHeader title="Listado de ordenanzas con filtros">
                <Button appearance=ButtonAppearance::Secondary on_click=export_pdf>
                    {icon("download")}
                    " Descargar PDF"
                </Button>
            </PageHeader>

            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=Signal::derive(move || filter.with(|f| f.active_count()))
                on_clear=clear
            >
                <div class="details-grid--3col">
                    <div class="form__group">
                        <label class="form__label">"Vigencia"</label>
                        <Select value=vigente>
                            <option value="">"Todas"</option>
                            <option value="true">"Vigentes"</option>
                            <option value="false">"No vigentes"</option>
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Fecha aprobación desde"</label>
                        <DateInput value=aprobada_desde />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Municipio"</label>
                        <Select value=municipio>
                            <option value="">"Todos los municipios"</option>
                            {move || municipios.items().into_iter().map(|m| {
                                let value = m.id.to_string();
                                let selected = municipio.get_untracked() == value;
                                view! { <option value=value selected=selected>{m.nombre}</option> }
                            }).collect_view()}
                        </Select>
                    </div>
                </div>
            </FilterPanel>

            {move || export_error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="page__content">
                {move || match vm.load_state() {
                    LoadState::Loading => view! { <Spinner /> }.into_any(),
                    LoadState::Failed(message) => view! { <StatusMessage text=message /> }.into_any(),
                    LoadState::Ready => {
                        let rows = visible();
                        if rows.is_empty() {
                            return view! { <StatusMessage text="No hay ordenanzas que cumplan los filtros" /> }.into_any();
                        }
                        view! {
                            <div class="table-summary">{format!("{} ordenanzas", rows.len())}</div>
                            <OrdenanzaTable rows=rows vm=vm />
                        }.into_any()
                    }
                }}
            </div>

            <ResultDialog
                message=Signal::derive(move || vm.dialog())
                on_close=Callback::new(move |_| vm.dismiss_dialog())
            />
        </PageFrame>
    }
}
