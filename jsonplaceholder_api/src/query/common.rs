//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by all filter builders. Each filter is sent as a plain
/// query parameter; the upstream service matches it against the field of the
/// same name.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// True when no filter is set, in which case no query string is added.
    fn is_empty(&self) -> bool;
}

pub(crate) fn append_pair(url: &mut Url, key: &str, value: impl ToString) {
    url.query_pairs_mut().append_pair(key, &value.to_string());
}
