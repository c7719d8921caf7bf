//! Path parameters.
//!
//! A route path such as `/users/{id:int}/posts/{post_id}` declares its
//! parameters inline. [`PathTemplate::parse`] extracts them into ordered
//! [`PathParameter`] descriptors; resolution later captures the raw segment
//! values and hands both to a [`ParamParser`] to build [`PathParams`].

use crate::error::{BoxError, ConfigError};

/// Reserved trie key standing in for any templated segment.
pub const WILDCARD: &str = "*";

/// Type tag used when a parameter is written without one (`{name}`).
pub const DEFAULT_PARAM_TYPE: &str = "str";

/// A single templated parameter as declared in a route path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathParameter {
    /// Parameter name, e.g. `id`.
    pub name: String,
    /// Declared type, e.g. `int`.
    pub type_tag: String,
    /// The exact text between the braces, e.g. `id:int`.
    pub full: String,
}

impl PathParameter {
    /// Create a typed parameter; `full` is `name:type_tag`.
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        let name = name.into();
        let type_tag = type_tag.into();
        let full = format!("{name}:{type_tag}");
        Self {
            name,
            type_tag,
            full,
        }
    }

    /// Parse the text between braces.
    fn from_token(path: &str, token: &str) -> Result<Self, ConfigError> {
        let (name, type_tag) = match token.split_once(':') {
            Some((name, type_tag)) => (name.trim(), type_tag.trim()),
            None => (token.trim(), DEFAULT_PARAM_TYPE),
        };
        if name.is_empty() {
            return Err(ConfigError::invalid_template(path, "empty parameter name"));
        }
        if type_tag.is_empty() {
            return Err(ConfigError::invalid_template(
                path,
                format!("empty type for parameter '{name}'"),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            type_tag: type_tag.to_string(),
            full: token.to_string(),
        })
    }
}

/// A parsed route path with its ordered parameters.
///
/// # Example
///
/// ```rust
/// use trellis_core::PathTemplate;
///
/// let template = PathTemplate::parse("/users/{id:int}/posts/{post_id}").unwrap();
/// assert_eq!(template.parameters().len(), 2);
/// assert_eq!(template.parameters()[1].type_tag, "str");
/// assert_eq!(template.wildcard_path(), "/users/*/posts/*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    path: String,
    parameters: Vec<PathParameter>,
}

impl PathTemplate {
    /// Parse a route path.
    ///
    /// Parameters must occupy a whole segment and names must be unique
    /// within the path. A literal `*` segment parses here; the route map
    /// rejects it on paths that go into the trie.
    pub fn parse(path: impl Into<String>) -> Result<Self, ConfigError> {
        let path = path.into();
        let mut parameters: Vec<PathParameter> = Vec::new();

        for segment in path.split('/') {
            let Some(token) = param_token(segment) else {
                if segment.contains(['{', '}']) {
                    return Err(ConfigError::invalid_template(
                        &path,
                        format!("malformed parameter segment '{segment}'"),
                    ));
                }
                continue;
            };
            let parameter = PathParameter::from_token(&path, token)?;
            if parameters.iter().any(|p| p.name == parameter.name) {
                return Err(ConfigError::invalid_template(
                    &path,
                    format!("duplicate parameter '{}'", parameter.name),
                ));
            }
            parameters.push(parameter);
        }

        Ok(Self { path, parameters })
    }

    /// The literal path as registered.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters in left-to-right order.
    pub fn parameters(&self) -> &[PathParameter] {
        &self.parameters
    }

    /// Returns true if the path declares at least one parameter.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// The path with every parameter segment replaced by [`WILDCARD`].
    pub fn wildcard_path(&self) -> String {
        if !self.has_parameters() {
            return self.path.clone();
        }
        self.path
            .split('/')
            .map(|segment| match param_token(segment) {
                Some(_) => WILDCARD,
                None => segment,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Split into the path and its parameters.
    pub fn into_parts(self) -> (String, Vec<PathParameter>) {
        (self.path, self.parameters)
    }
}

/// Returns the text between braces if `segment` is a well-formed parameter.
fn param_token(segment: &str) -> Option<&str> {
    let inner = segment.strip_prefix('{')?.strip_suffix('}')?;
    if inner.contains(['{', '}']) {
        return None;
    }
    Some(inner)
}

/// Parameter values bound during resolution, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    /// Create an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing an earlier binding of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a value by parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Get the number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no parameters are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Turns captured segment values into [`PathParams`].
///
/// Descriptor `i` binds captured value `i`. Implementations are free to
/// convert or reject values according to each parameter's `type_tag`;
/// rejections surface as [`ResolveError::InvalidParameters`].
///
/// Closures with the matching signature implement this trait.
///
/// [`ResolveError::InvalidParameters`]: crate::ResolveError::InvalidParameters
pub trait ParamParser: Send + Sync {
    /// Bind captured values to their descriptors.
    fn parse(&self, parameters: &[PathParameter], raw: &[&str]) -> Result<PathParams, BoxError>;
}

impl<F> ParamParser for F
where
    F: Fn(&[PathParameter], &[&str]) -> Result<PathParams, BoxError> + Send + Sync,
{
    fn parse(&self, parameters: &[PathParameter], raw: &[&str]) -> Result<PathParams, BoxError> {
        (self)(parameters, raw)
    }
}

/// A [`ParamParser`] that binds captured values unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawParams;

impl ParamParser for RawParams {
    fn parse(&self, parameters: &[PathParameter], raw: &[&str]) -> Result<PathParams, BoxError> {
        Ok(parameters
            .iter()
            .zip(raw)
            .map(|(p, value)| (p.name.as_str(), *value))
            .collect())
    }
}
