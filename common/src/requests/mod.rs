use serde::Deserialize;

/// Form payload of `POST /venues/search` and `POST /artists/search`.
///
/// A submission without `search_term` searches for the empty term, which
/// matches every record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}
