use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};

/// Trait for a record kind served by the data API
///
/// Defines the identity of a record and the static metadata every screen
/// needs: API paths and the fallback messages used when the server does
/// not supply one.
pub trait Entity: DeserializeOwned + Clone + Debug {
    /// Server-assigned identifier type
    type Id: Copy + Eq + Display + Debug;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Get the record identifier
    fn id(&self) -> Self::Id;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// API collection name (e.g. "municipios")
    fn collection_name() -> &'static str;

    /// Singular name with its definite article, used inside messages
    /// (e.g. "el municipio", "la ordenanza")
    fn definite_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Path of the collection listing (GET)
    fn list_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Path used to create a record (POST)
    fn create_path() -> String {
        format!("/{}/", Self::collection_name())
    }

    /// Path of one record (GET/PUT/DELETE)
    fn item_path(id: Self::Id) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }

    /// Client route of the listing screen
    fn list_route() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Client route of the edit screen for one record
    fn edit_route(id: Self::Id) -> String {
        format!("/{}/edit/{}", Self::collection_name(), id)
    }

    /// Fallback shown when a read fails without a server message
    fn load_error_message() -> &'static str {
        "No se pudo conectar al servidor"
    }

    /// Fallback shown when a delete fails without a server message
    fn delete_error_message() -> String {
        format!("Error al eliminar {}", Self::definite_name())
    }

    /// Fallback shown when fetching one record for editing fails
    fn fetch_error_message() -> String {
        format!("Error al recuperar los datos {}", with_de(Self::definite_name()))
    }
}

/// "de" + article, contracting "de el" into "del"
fn with_de(definite: &str) -> String {
    match definite.strip_prefix("el ") {
        Some(rest) => format!("del {}", rest),
        None => format!("de {}", definite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_de_contracts_masculine_article() {
        assert_eq!(with_de("el municipio"), "del municipio");
        assert_eq!(with_de("la ordenanza"), "de la ordenanza");
    }
}
