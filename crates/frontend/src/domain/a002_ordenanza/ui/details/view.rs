use super::view_model::OrdenanzaDetailsVm;
use crate::shared::components::{DateInput, FormField, PageHeader, ResultDialog};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_ordenanza::form::{FECHA, MUNICIPIO, NOMBRE, VOTO};
use contracts::domain::a002_ordenanza::OrdenanzaId;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn OrdenanzaDetails(id: Option<OrdenanzaId>) -> impl IntoView {
    let vm = OrdenanzaDetailsVm::new(id);
    vm.load();

    let navigate = use_navigate();
    let fields = vm.fields;
    let form = vm.form;

    let on_close = Callback::new(move |_| {
        if let Some(route) = form.dismiss_dialog() {
            navigate(&route, Default::default());
        }
    });

    view! {
        <PageFrame page_id="a002_ordenanza--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=vm.title()>
                {()}
            </PageHeader>

            <div class="page__content">
                <Card class="details-card">
                    <div class="details-form">
                        <FormField label="Nombre" required=true hint=Signal::derive(move || form.hint(NOMBRE))>
                            <Input value=fields.nombre placeholder="Nombre de la ordenanza" />
                        </FormField>

                        <FormField
                            label="Fecha de aprobación"
                            required=true
                            hint=Signal::derive(move || form.hint(FECHA))
                        >
                            <DateInput
                                value=fields.fecha
                                invalid=Signal::derive(move || form.hint(FECHA).is_some())
                            />
                        </FormField>

                        <FormField label="% Votos a favor" required=true hint=Signal::derive(move || form.hint(VOTO))>
                            <Input value=fields.voto input_type=InputType::Number placeholder="0 - 100" />
                        </FormField>

                        <FormField label="Municipio" required=true hint=Signal::derive(move || form.hint(MUNICIPIO))>
                            {move || {
                                if vm.municipios_unavailable() {
                                    view! {
                                        <div class="form__hint">"No hay municipios disponibles"</div>
                                    }.into_any()
                                } else {
                                    view! {
                                        <Select value=fields.municipio>
                                            <option value="">"Seleccione un municipio..."</option>
                                            {vm.municipio_options().into_iter().map(|(value, label)| {
                                                let selected = fields.municipio.get_untracked() == value;
                                                view! { <option value=value selected=selected>{label}</option> }
                                            }).collect_view()}
                                        </Select>
                                    }.into_any()
                                }
                            }}
                        </FormField>

                        <div class="form__group">
                            <Checkbox checked=fields.vigente label="Ordenanza vigente" />
                        </div>
                    </div>

                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_command()
                            disabled=vm.is_save_disabled()
                        >
                            {icon("save")}
                            {move || if form.is_in_flight() { " Guardando..." } else { " Guardar" }}
                        </Button>
                    </div>
                </Card>
            </div>

            <ResultDialog message=Signal::derive(move || form.dialog()) on_close=on_close />
        </PageFrame>
    }
}
