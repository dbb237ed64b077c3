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

/// Server-assigned municipio identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MunicipioId(pub i64);

impl fmt::Display for MunicipioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MunicipioId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(MunicipioId)
            .map_err(|e| format!("Invalid municipio id '{}': {}", s, e))
    }
}

impl From<i64> for MunicipioId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Municipio as returned by the data API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipio {
    #[serde(alias = "id_municipio")]
    pub id: MunicipioId,

    pub nombre: String,

    #[serde(rename = "densidadPoblacion", deserialize_with = "number_or_string")]
    pub densidad_poblacion: f64,

    pub fundacion: NaiveDate,

    #[serde(rename = "gobiernoCoalicion", deserialize_with = "bool_or_string")]
    pub gobierno_coalicion: bool,
}

impl Municipio {
    /// "Sí"/"No" label of the coalition flag
    pub fn coalicion_label(&self) -> &'static str {
        if self.gobierno_coalicion {
            "Sí"
        } else {
            "No"
        }
    }

    /// Foundation date as `dd/mm/yyyy`
    pub fn fundacion_display(&self) -> String {
        self.fundacion.format("%d/%m/%Y").to_string()
    }
}

impl Entity for Municipio {
    type Id = MunicipioId;

    fn id(&self) -> MunicipioId {
        self.id
    }

    fn collection_name() -> &'static str {
        "municipios"
    }

    fn definite_name() -> &'static str {
        "el municipio"
    }
}

impl PdfExportable for Municipio {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Nombre", "Densidad", "Fundación", "Coalición"]
    }

    fn to_pdf_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            format!("{:.2}", self.densidad_poblacion),
            self.fundacion_display(),
            self.coalicion_label().to_string(),
        ]
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Body of create (POST) and full replace (PUT) requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipioDto {
    pub nombre: String,

    #[serde(rename = "densidadPoblacion", serialize_with = "integral_as_int")]
    pub densidad_poblacion: f64,

    pub fundacion: NaiveDate,

    #[serde(rename = "gobiernoCoalicion")]
    pub gobierno_coalicion: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lenient_wire_values() {
        let json = r#"{"id_municipio":4,"nombre":"Soria","densidadPoblacion":"8.75","fundacion":"1900-05-06","gobiernoCoalicion":1}"#;
        let m: Municipio = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, MunicipioId(4));
        assert_eq!(m.densidad_poblacion, 8.75);
        assert!(m.gobierno_coalicion);
        assert_eq!(m.fundacion_display(), "06/05/1900");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("12".parse::<MunicipioId>(), Ok(MunicipioId(12)));
        assert!("x".parse::<MunicipioId>().is_err());
    }

    #[test]
    fn test_routes() {
        assert_eq!(Municipio::item_path(MunicipioId(5)), "/municipios/5");
        assert_eq!(Municipio::create_path(), "/municipios/");
        assert_eq!(Municipio::edit_route(MunicipioId(5)), "/municipios/edit/5");
        assert_eq!(
            Municipio::fetch_error_message(),
            "Error al recuperar los datos del municipio"
        );
    }
}
