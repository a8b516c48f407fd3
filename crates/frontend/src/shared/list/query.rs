//! Loading / error / data state of one remote read

use serde::de::DeserializeOwned;
use serde_json::Value;

/// State of a remote read
///
/// `loading` is derived from a counter so overlapping fetches keep the
/// spinner until the last one settles. Each settled fetch replaces the data.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<D> {
    data: D,
    in_flight: usize,
    error: Option<String>,
    loaded: bool,
}

impl<D: Default> Default for QueryState<D> {
    fn default() -> Self {
        Self {
            data: D::default(),
            in_flight: 0,
            error: None,
            loaded: false,
        }
    }
}

impl<D> QueryState<D> {
    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    pub fn succeed(&mut self, data: D) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.data = data;
        self.error = None;
        self.loaded = true;
    }

    /// Keeps the previous data; only the message is user facing
    pub fn fail(&mut self, message: impl Into<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Decodes a collection body; anything that is not a JSON array is empty
pub fn coerce_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, serde_json::Error> {
    match value {
        Value::Array(_) => serde_json::from_value(value),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_loading_tracks_overlapping_fetches() {
        let mut q: QueryState<Vec<i64>> = QueryState::default();
        q.begin();
        q.begin();
        q.succeed(vec![1]);
        assert!(q.loading());
        q.succeed(vec![1, 2]);
        assert!(!q.loading());
        assert_eq!(q.data(), &vec![1, 2]);
    }

    #[test]
    fn test_failure_keeps_data() {
        let mut q: QueryState<Vec<i64>> = QueryState::default();
        q.begin();
        q.succeed(vec![7]);
        q.begin();
        q.fail("Erro ao carregar rotas. Tente novamente.");
        assert_eq!(q.data(), &vec![7]);
        assert_eq!(q.error(), Some("Erro ao carregar rotas. Tente novamente."));
        q.begin();
        assert_eq!(q.error(), None);
    }

    #[test]
    fn test_dismissed_error_keeps_data() {
        let mut q: QueryState<Vec<i64>> = QueryState::default();
        q.begin();
        q.succeed(vec![3, 4]);
        q.begin();
        q.fail("Erro ao carregar escolas. Tente novamente.");
        q.dismiss_error();
        assert_eq!(q.error(), None);
        assert_eq!(q.data(), &vec![3, 4]);
        assert!(!q.loading());
    }

    #[test]
    fn test_coerce_non_array_to_empty() {
        let rows: Vec<Row> = coerce_list(serde_json::json!({"erro": "x"})).unwrap();
        assert!(rows.is_empty());
        let rows: Vec<Row> = coerce_list(Value::Null).unwrap();
        assert!(rows.is_empty());
        let rows: Vec<Row> = coerce_list(serde_json::json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }
}
