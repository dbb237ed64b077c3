use crate::shared::api_utils::api_client;
use contracts::dashboards::d001_municipio_graph::{GraphSlice, GRAPH_PATH};

/// Fetch the chart series; the error is already the user-facing message
pub async fn fetch_graph() -> Result<Vec<GraphSlice>, String> {
    api_client()
        .read::<Vec<GraphSlice>>(GRAPH_PATH)
        .await
        .map_err(|e| e.user_message("No se pudo conectar al servidor"))
}
