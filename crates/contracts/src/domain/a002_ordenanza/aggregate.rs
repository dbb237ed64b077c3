use crate::domain::a001_municipio::MunicipioId;
use crate::domain::common::wire::{bool_or_string, integral_as_int, number_or_string};
use crate::domain::common::Entity;
use crate::shared::export::PdfExportable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned ordenanza identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrdenanzaId(pub i64);

impl fmt::Display for OrdenanzaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrdenanzaId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(OrdenanzaId)
            .map_err(|e| format!("Invalid ordenanza id '{}': {}", s, e))
    }
}

impl From<i64> for OrdenanzaId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Summary of the owning municipio embedded in list responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipioRef {
    #[serde(alias = "id_municipio")]
    pub id: MunicipioId,
    pub nombre: String,
}

/// Ordenanza (municipal bylaw) as returned by the data API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ordenanza {
    pub id_ordenanza: OrdenanzaId,

    pub nombre: String,

    pub fecha_aprobacion: NaiveDate,

    /// Share of favourable votes, 0..=100
    #[serde(deserialize_with = "number_or_string")]
    pub voto_favorable: f64,

    #[serde(deserialize_with = "bool_or_string")]
    pub vigente: bool,

    #[serde(default, alias = "municipio_id")]
    pub id_municipio: Option<MunicipioId>,

    #[serde(default)]
    pub municipio: Option<MunicipioRef>,
}

impl Ordenanza {
    /// Identifier of the owning municipio, from the key or the embedded summary
    pub fn municipio_id(&self) -> Option<MunicipioId> {
        self.id_municipio
            .or_else(|| self.municipio.as_ref().map(|m| m.id))
    }

    /// Owning municipio name for display, "—" when unknown
    pub fn municipio_nombre(&self) -> &str {
        self.municipio
            .as_ref()
            .map(|m| m.nombre.as_str())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("—")
    }

    pub fn vigente_label(&self) -> &'static str {
        if self.vigente {
            "Sí"
        } else {
            "No"
        }
    }

    pub fn fecha_display(&self) -> String {
        self.fecha_aprobacion.format("%d/%m/%Y").to_string()
    }
}

impl Entity for Ordenanza {
    type Id = OrdenanzaId;

    fn id(&self) -> OrdenanzaId {
        self.id_ordenanza
    }

    fn collection_name() -> &'static str {
        "ordenanzas"
    }

    fn definite_name() -> &'static str {
        "la ordenanza"
    }

    fn list_path() -> String {
        "/ordenanzas/".to_string()
    }
}

impl PdfExportable for Ordenanza {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Nombre", "Aprobación", "% Votos", "Vigente", "Municipio"]
    }

    fn to_pdf_row(&self) -> Vec<String> {
        vec![
            self.id_ordenanza.to_string(),
            self.nombre.clone(),
            self.fecha_display(),
            format!("{}", self.voto_favorable),
            self.vigente_label().to_string(),
            self.municipio_nombre().to_string(),
        ]
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Body of create (POST) and full replace (PUT) requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdenanzaDto {
    pub nombre: String,
    pub fecha_aprobacion: NaiveDate,
    #[serde(serialize_with = "integral_as_int")]
    pub voto_favorable: f64,
    pub vigente: bool,
    pub id_municipio: MunicipioId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_embedded_municipio() {
        let json = r#"{"id_ordenanza":8,"nombre":"Ruido","fecha_aprobacion":"2020-02-02",
            "voto_favorable":"61.5","vigente":"false","municipio_id":3,
            "municipio":{"id_municipio":3,"nombre":"Graus"}}"#;
        let o: Ordenanza = serde_json::from_str(json).unwrap();
        assert_eq!(o.id(), OrdenanzaId(8));
        assert_eq!(o.voto_favorable, 61.5);
        assert!(!o.vigente);
        assert_eq!(o.municipio_id(), Some(MunicipioId(3)));
        assert_eq!(o.municipio_nombre(), "Graus");
    }

    #[test]
    fn test_missing_municipio_reads_as_dash() {
        let json = r#"{"id_ordenanza":1,"nombre":"Tasas","fecha_aprobacion":"2021-01-01",
            "voto_favorable":50,"vigente":true}"#;
        let o: Ordenanza = serde_json::from_str(json).unwrap();
        assert_eq!(o.municipio_id(), None);
        assert_eq!(o.municipio_nombre(), "—");
    }

    #[test]
    fn test_paths() {
        assert_eq!(Ordenanza::list_path(), "/ordenanzas/");
        assert_eq!(Ordenanza::create_path(), "/ordenanzas/");
        assert_eq!(Ordenanza::item_path(OrdenanzaId(4)), "/ordenanzas/4");
        assert_eq!(
            Ordenanza::delete_error_message(),
            "Error al eliminar la ordenanza"
        );
    }
}
