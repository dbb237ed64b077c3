use crate::domain::common::wire::number_or_string;
use serde::{Deserialize, Serialize};

/// API path of the chart data
pub const GRAPH_PATH: &str = "/directors/graph";

/// Owner label of one slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLabel {
    #[serde(default)]
    pub name: String,
}

/// One row of `GET /directors/graph`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSlice {
    #[serde(deserialize_with = "number_or_string")]
    pub total: f64,

    #[serde(rename = "id_director_director", default)]
    pub owner: Option<GraphLabel>,
}

impl GraphSlice {
    /// Legend text of the slice; "Sin nombre" when the owner is missing
    pub fn label(&self) -> &str {
        self.owner
            .as_ref()
            .map(|o| o.name.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or("Sin nombre")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rows() {
        let json = r#"[{"total":"4","id_director_director":{"name":"Ana"}},{"total":2}]"#;
        let rows: Vec<GraphSlice> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].total, 4.0);
        assert_eq!(rows[0].label(), "Ana");
        assert_eq!(rows[1].label(), "Sin nombre");
    }
}
