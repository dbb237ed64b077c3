/// Named predicate of a list filter
struct NamedPredicate<T> {
    name: &'static str,
    test: Box<dyn Fn(&T) -> bool>,
}

/// AND-combination of named predicates over an in-memory collection
///
/// An empty filter is the identity. Predicates are independent, so the
/// order in which they are added does not change the result set.
pub struct ListFilter<T> {
    predicates: Vec<NamedPredicate<T>>,
}

impl<T> Default for ListFilter<T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<T: 'static> ListFilter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate
    pub fn with(mut self, name: &'static str, test: impl Fn(&T) -> bool + 'static) -> Self {
        self.predicates.push(NamedPredicate {
            name,
            test: Box::new(test),
        });
        self
    }

    /// Add a predicate only when its input is active (`Some`)
    pub fn with_active<V: 'static>(
        self,
        name: &'static str,
        input: Option<V>,
        test: impl Fn(&T, &V) -> bool + 'static,
    ) -> Self {
        match input {
            Some(value) => self.with(name, move |item| test(item, &value)),
            None => self,
        }
    }

    pub fn active_names(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|p| p.name).collect()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| (p.test)(item))
    }

    /// Items passing every predicate, in source order
    pub fn apply(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_is_identity() {
        let data = vec![1, 2, 3];
        assert_eq!(ListFilter::new().apply(&data), data);
    }

    #[test]
    fn test_predicates_are_and_combined() {
        let data: Vec<i32> = (1..=10).collect();
        let filter = ListFilter::new()
            .with("even", |n: &i32| n % 2 == 0)
            .with("big", |n: &i32| *n > 5);
        assert_eq!(filter.apply(&data), vec![6, 8, 10]);
        assert_eq!(filter.active_names(), vec!["even", "big"]);
    }

    #[test]
    fn test_inactive_input_adds_nothing() {
        let filter: ListFilter<i32> = ListFilter::new()
            .with_active("min", None::<i32>, |n, m| n >= m)
            .with_active("max", Some(3), |n, m| n <= m);
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.apply(&[1, 2, 3, 4]), vec![1, 2, 3]);
    }
}
