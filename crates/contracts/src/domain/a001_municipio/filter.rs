use super::aggregate::Municipio;
use crate::shared::form::{parse_date, parse_number};
use crate::shared::list::ListFilter;

/// Raw inputs of the municipio filter panel
///
/// Empty or unparsable inputs are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MunicipioFilter {
    /// Minimum population density (inclusive)
    pub densidad_min: String,
    /// Founded on or after (`YYYY-MM-DD`)
    pub fundacion_desde: String,
    /// Founded on or before (`YYYY-MM-DD`)
    pub fundacion_hasta: String,
}

impl MunicipioFilter {
    pub fn to_list_filter(&self) -> ListFilter<Municipio> {
        ListFilter::new()
            .with_active("densidad_min", parse_number(&self.densidad_min), |m: &Municipio, min| {
                m.densidad_poblacion >= *min
            })
            .with_active("fundacion_desde", parse_date(&self.fundacion_desde), |m: &Municipio, d| {
                m.fundacion >= *d
            })
            .with_active("fundacion_hasta", parse_date(&self.fundacion_hasta), |m: &Municipio, d| {
                m.fundacion <= *d
            })
    }

    pub fn apply(&self, items: &[Municipio]) -> Vec<Municipio> {
        self.to_list_filter().apply(items)
    }

    /// Number of inputs currently contributing a predicate
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
    use crate::domain::a001_municipio::MunicipioId;
    use chrono::NaiveDate;

    fn municipio(id: i64, densidad: f64, fundacion: &str) -> Municipio {
        Municipio {
            id: MunicipioId(id),
            nombre: format!("M{}", id),
            densidad_poblacion: densidad,
            fundacion: NaiveDate::parse_from_str(fundacion, "%Y-%m-%d").unwrap(),
            gobierno_coalicion: false,
        }
    }

    fn sample() -> Vec<Municipio> {
        vec![
            municipio(1, 10.0, "1850-01-01"),
            municipio(2, 50.0, "1900-06-15"),
            municipio(3, 120.0, "1950-03-03"),
            municipio(4, 50.0, "2001-12-31"),
        ]
    }

    fn ids(items: &[Municipio]) -> Vec<i64> {
        items.iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let data = sample();
        assert_eq!(MunicipioFilter::default().apply(&data), data);
        assert_eq!(MunicipioFilter::default().active_count(), 0);
    }

    #[test]
    fn test_density_and_date_range_commute() {
        let data = sample();
        let density = MunicipioFilter {
            densidad_min: "50".into(),
            ..Default::default()
        };
        let range = MunicipioFilter {
            fundacion_desde: "1890-01-01".into(),
            fundacion_hasta: "1960-01-01".into(),
            ..Default::default()
        };

        let density_first = range.apply(&density.apply(&data));
        let range_first = density.apply(&range.apply(&data));
        assert_eq!(ids(&density_first), vec![2, 3]);
        assert_eq!(density_first, range_first);

        let combined = MunicipioFilter {
            densidad_min: "50".into(),
            ..range
        };
        assert_eq!(combined.apply(&data), density_first);
        assert_eq!(combined.active_count(), 3);
    }

    #[test]
    fn test_unparsable_inputs_are_inactive_and_clear_resets() {
        let mut filter = MunicipioFilter {
            densidad_min: "mucho".into(),
            fundacion_desde: "ayer".into(),
            fundacion_hasta: "1900-06-15".into(),
        };
        assert_eq!(filter.active_count(), 1);
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2]);

        filter.clear();
        assert_eq!(filter, MunicipioFilter::default());
    }
}
