//! Tab content registry - única fuente de verdad para el mapeo
//! tab.key → View. Cada módulo queda detrás del mismo permiso que filtra
//! su entrada en el sidebar.

use contracts::system::auth::Permiso;
use leptos::prelude::*;

use crate::domain::a004_tarifa::ui::list::TarifasList;
use crate::domain::a005_tarifa_rango::ui::list::TarifasRangoList;
use crate::projections::p900_tarifas_historicas::ui::TarifasHistoricasList;
use crate::projections::p901_tarifas_por_vencer::ui::TarifasPorVencerList;
use crate::projections::p902_valores_prep::ui::ValoresPrepList;
use crate::system::auth::guard::RequierePermiso;
use crate::usecases::u501_actualizacion_masiva::view::ActualizacionMasivaWidget;
use crate::usecases::u502_reporte_tarifario::view::ReporteTarifarioWidget;

/// Renderiza el contenido de un tab por su clave.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a004_tarifa" => view! {
            <RequierePermiso permiso=Permiso::Tarifas>
                <TarifasList />
            </RequierePermiso>
        }
        .into_any(),

        "a005_tarifa_rango" => view! {
            <RequierePermiso permiso=Permiso::TarifasPorRango>
                <TarifasRangoList />
            </RequierePermiso>
        }
        .into_any(),

        "p901_tarifas_por_vencer" => view! {
            <RequierePermiso permiso=Permiso::TarifasPorVencer>
                <TarifasPorVencerList />
            </RequierePermiso>
        }
        .into_any(),

        "u501_actualizacion_masiva" => view! {
            <RequierePermiso permiso=Permiso::ActualizacionTarifas>
                <ActualizacionMasivaWidget />
            </RequierePermiso>
        }
        .into_any(),

        "p900_tarifas_historicas" => view! {
            <RequierePermiso permiso=Permiso::TarifasHistoricas>
                <TarifasHistoricasList />
            </RequierePermiso>
        }
        .into_any(),

        "u502_reporte_tarifario" => view! {
            <RequierePermiso permiso=Permiso::Reportes>
                <ReporteTarifarioWidget />
            </RequierePermiso>
        }
        .into_any(),

        "p902_valores_prep" => view! {
            <RequierePermiso permiso=Permiso::ValorPorKilo>
                <ValoresPrepList />
            </RequierePermiso>
        }
        .into_any(),

        _ => {
            leptos::logging::log!("Clave de tab desconocida: {}", key);
            view! { <div style="padding: 20px; color: #666;">"Módulo no disponible"</div> }
                .into_any()
        }
    }
}
