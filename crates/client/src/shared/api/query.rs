/// Ordered query-string builder.
///
/// Parameters keep insertion order so built URLs are deterministic;
/// empty values are omitted entirely, mirroring how the backend
/// treats an absent parameter.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. An empty value is skipped, not sent as `name=`.
    pub fn set(&mut self, name: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((name.to_string(), value));
        }
        self
    }

    /// Add an optional parameter. `None` and `Some("")` are skipped.
    pub fn set_opt(&mut self, name: &str, value: Option<impl ToString>) -> &mut Self {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render `k=v&k=v` with percent-encoded values, insertion order.
    pub fn build(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_omits_empty() {
        let mut params = QueryParams::new();
        params.set("a", 1);
        params.set_opt("b", None::<String>);
        params.set("c", "");
        params.set("d", "x");
        assert_eq!(params.build(), "a=1&d=x");
    }

    #[test]
    fn encodes_values() {
        let mut params = QueryParams::new();
        params.set("DesSKU", "taladro 20V & brocas");
        assert_eq!(params.build(), "DesSKU=taladro%2020V%20%26%20brocas");
    }

    #[test]
    fn allows_repeated_names() {
        let mut params = QueryParams::new();
        params.set("CATID", "CAT-1");
        params.set("CATID", "CAT-2");
        assert_eq!(params.build(), "CATID=CAT-1&CATID=CAT-2");
    }

    #[test]
    fn empty_builder_renders_empty_string() {
        assert_eq!(QueryParams::new().build(), "");
        assert!(QueryParams::new().is_empty());
    }
}
