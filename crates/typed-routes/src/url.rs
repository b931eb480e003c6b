// File: src/url.rs
// Purpose: Builds concrete URLs from route templates, parameters and search queries

use std::fmt;

use crate::error::{Result, RouteError};
use crate::template::{tokenize, RouteKind, RouteTemplate, Token};

/// Parameter values for a parametric template, in insertion order
///
/// # Examples
///
/// ```
/// use typed_routes::RouteParams;
///
/// let params = RouteParams::new().with("id", "123");
/// assert_eq!(params.get("id"), Some("123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(String, String)>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any earlier value for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (name, value)| params.with(name, value))
    }
}

/// A search-query value
#[derive(Debug, Clone, PartialEq)]
pub enum SearchValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for SearchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchValue::Text(text) => f.write_str(text),
            SearchValue::Integer(n) => write!(f, "{n}"),
            SearchValue::Bool(b) => write!(f, "{b}"),
            SearchValue::Float(n) if n.is_nan() => f.write_str("NaN"),
            SearchValue::Float(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            SearchValue::Float(n) if *n == 0.0 => f.write_str("0"),
            SearchValue::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for SearchValue {
    fn from(value: &str) -> Self {
        SearchValue::Text(value.to_string())
    }
}

impl From<String> for SearchValue {
    fn from(value: String) -> Self {
        SearchValue::Text(value)
    }
}

impl From<bool> for SearchValue {
    fn from(value: bool) -> Self {
        SearchValue::Bool(value)
    }
}

impl From<f64> for SearchValue {
    fn from(value: f64) -> Self {
        SearchValue::Float(value)
    }
}

impl From<f32> for SearchValue {
    fn from(value: f32) -> Self {
        SearchValue::Float(f64::from(value))
    }
}

macro_rules! integer_search_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SearchValue {
                fn from(value: $ty) -> Self {
                    SearchValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_search_value!(i8, i16, i32, i64, u8, u16, u32);

/// Search query, serialized in insertion order
///
/// Absent values keep their key in the mapping but are never serialized.
///
/// # Examples
///
/// ```
/// use typed_routes::SearchParams;
///
/// let search = SearchParams::new()
///     .with("sort", "asc")
///     .with_opt("cursor", None::<&str>)
///     .with("page", 2);
/// assert_eq!(search.to_query_string(), "sort=asc&page=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    entries: Vec<(String, Option<SearchValue>)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, keeping its position if it was already present
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<SearchValue>>) {
        let key = key.into();
        let value: Option<SearchValue> = value.map(Into::into);
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SearchValue>) {
        self.insert_opt(key, Some(value));
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<SearchValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl Into<SearchValue>>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Form-encoded `key=value` pairs joined by `&`; absent values skipped
    ///
    /// A space becomes `+`; only alphanumerics and `*-._` are left as is.
    pub fn to_query_string(&self) -> String {
        let mut query = ::url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            if let Some(value) = value {
                query.append_pair(key, &value.to_string());
            }
        }
        query.finish()
    }
}

impl<K: Into<String>, V: Into<SearchValue>> FromIterator<(K, Option<V>)> for SearchParams {
    fn from_iter<T: IntoIterator<Item = (K, Option<V>)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |search, (key, value)| search.with_opt(key, value))
    }
}

impl RouteTemplate {
    /// Builds a URL from this template
    ///
    /// Static templates build to themselves. Parametric templates need a value
    /// for every parameter; values are inserted verbatim, without encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_routes::{RouteParams, RouteTemplate, SearchParams};
    ///
    /// let route = RouteTemplate::parse("/user/[id]").unwrap();
    /// let params = RouteParams::new().with("id", "123");
    /// let search = SearchParams::new().with("sort", "asc").with("filter", "active");
    ///
    /// assert_eq!(
    ///     route.build(Some(&params), Some(&search)).unwrap(),
    ///     "/user/123?sort=asc&filter=active"
    /// );
    /// assert!(route.build(None, None).is_err());
    /// ```
    pub fn build(
        &self,
        params: Option<&RouteParams>,
        search: Option<&SearchParams>,
    ) -> Result<String> {
        let mut url = match self.kind() {
            RouteKind::Static => self.as_str().to_string(),
            RouteKind::Parametric(_) => self.interpolate(params)?,
        };

        if let Some(query) = search.map(SearchParams::to_query_string) {
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }

        Ok(url)
    }

    fn interpolate(&self, params: Option<&RouteParams>) -> Result<String> {
        let mut url = String::with_capacity(self.as_str().len());
        for token in tokenize(self.as_str()) {
            match token {
                Token::Literal(text) => url.push_str(text),
                Token::Param(name) => {
                    let value = params.and_then(|p| p.get(name)).ok_or_else(|| {
                        RouteError::MissingParameter {
                            parameter: name.to_string(),
                            template: self.as_str().to_string(),
                        }
                    })?;
                    url.push_str(value);
                }
            }
        }
        Ok(url)
    }
}

/// Builds a URL from an unchecked template string
///
/// The template is validated first, so malformed templates and repeated
/// parameter names fail here rather than producing a half-filled URL.
///
/// # Examples
///
/// ```
/// use typed_routes::{build, RouteError, RouteParams, SearchParams};
///
/// assert_eq!(build("/about", None, None).unwrap(), "/about");
/// assert_eq!(
///     build("/about", None, Some(&SearchParams::new().with("tab", "info"))).unwrap(),
///     "/about?tab=info"
/// );
/// assert!(matches!(
///     build("/user/[id]", Some(&RouteParams::new()), None),
///     Err(RouteError::MissingParameter { .. })
/// ));
/// ```
pub fn build(
    template: &str,
    params: Option<&RouteParams>,
    search: Option<&SearchParams>,
) -> Result<String> {
    RouteTemplate::parse(template)?.build(params, search)
}
