use super::aggregate::Ordenanza;
use crate::domain::a001_municipio::MunicipioId;
use crate::shared::form::parse_date;
use crate::shared::list::ListFilter;

/// Raw inputs of the ordenanza filter panel
///
/// `vigente` is `"true"`, `"false"` or empty (any). Empty or unparsable
/// inputs are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdenanzaFilter {
    pub vigente: String,
    /// Approved on or after (`YYYY-MM-DD`)
    pub aprobada_desde: String,
    /// Owning municipio id
    pub municipio: String,
}

impl OrdenanzaFilter {
    fn vigente_value(&self) -> Option<bool> {
        match self.vigente.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn municipio_value(&self) -> Option<MunicipioId> {
        self.municipio.parse::<MunicipioId>().ok()
    }

    pub fn to_list_filter(&self) -> ListFilter<Ordenanza> {
        ListFilter::new()
            .with_active("vigente", self.vigente_value(), |o: &Ordenanza, v| {
                o.vigente == *v
            })
            .with_active("aprobada_desde", parse_date(&self.aprobada_desde), |o: &Ordenanza, d| {
                o.fecha_aprobacion >= *d
            })
            .with_active("municipio", self.municipio_value(), |o: &Ordenanza, id| {
                o.municipio_id() == Some(*id)
            })
    }

    pub fn apply(&self, items: &[Ordenanza]) -> Vec<Ordenanza> {
        self.to_list_filter().apply(items)
    }

    pub fn active_count(&self) -> usize {
        self.to_list_filter().len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_ordenanza::OrdenanzaId;
    use chrono::NaiveDate;

    fn ordenanza(id: i64, fecha: &str, vigente: bool, municipio: i64) -> Ordenanza {
        Ordenanza {
            id_ordenanza: OrdenanzaId(id),
            nombre: format!("O{}", id),
            fecha_aprobacion: NaiveDate::parse_from_str(fecha, "%Y-%m-%d").unwrap(),
            voto_favorable: 60.0,
            vigente,
            id_municipio: Some(MunicipioId(municipio)),
            municipio: None,
        }
    }

    fn ids(items: &[Ordenanza]) -> Vec<i64> {
        items.iter().map(|o| o.id_ordenanza.0).collect()
    }

    #[test]
    fn test_vigente_and_date_filter() {
        let data = vec![
            ordenanza(1, "2020-01-01", true, 1),
            ordenanza(2, "2021-01-01", false, 1),
            ordenanza(3, "2022-01-01", true, 2),
        ];
        let filter = OrdenanzaFilter {
            vigente: "true".into(),
            aprobada_desde: "2021-01-01".into(),
            municipio: String::new(),
        };
        assert_eq!(ids(&filter.apply(&data)), vec![3]);
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn test_vigente_only_filter() {
        let data = vec![
            ordenanza(1, "2020-01-01", true, 1),
            ordenanza(2, "2021-01-01", false, 1),
            ordenanza(3, "2022-01-01", true, 2),
        ];
        let mut filter = OrdenanzaFilter {
            vigente: "true".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&data)), vec![1, 3]);
        assert_eq!(filter.active_count(), 1);

        filter.vigente = "false".into();
        assert_eq!(ids(&filter.apply(&data)), vec![2]);
    }

    #[test]
    fn test_municipio_filter_and_clear() {
        let data = vec![
            ordenanza(1, "2020-01-01", true, 1),
            ordenanza(2, "2021-01-01", false, 2),
        ];
        let mut filter = OrdenanzaFilter {
            municipio: "2".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&data)), vec![2]);

        filter.clear();
        assert_eq!(filter.apply(&data), data);
    }

    #[test]
    fn test_unknown_vigente_value_is_inactive() {
        let filter = OrdenanzaFilter {
            vigente: "quizás".into(),
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 0);
    }
}
