//! Cache keys and their on-disk file names.

use std::fmt;

/// Which upstream service a cached payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheSource {
    /// The registry-index service.
    Index,
    /// The instance's own REST API.
    Native,
}

impl CacheSource {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Native => "native",
        }
    }
}

/// Identifies one cached upstream payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub instance: String,
    pub gene: Option<String>,
    pub source: CacheSource,
}

impl CacheKey {
    pub fn new(instance: impl Into<String>, gene: Option<&str>, source: CacheSource) -> Self {
        Self {
            instance: instance.into(),
            gene: gene.map(str::to_string),
            source,
        }
    }

    /// File name for this key inside the cache directory.
    ///
    /// Components are escaped so that distinct keys never share a file and no
    /// key can name a path outside the directory.
    pub fn file_name(&self) -> String {
        let mut name = escape_component(&self.instance);
        if let Some(gene) = &self.gene {
            name.push('_');
            name.push_str(&escape_component(gene));
        }
        name.push('_');
        name.push_str(self.source.tag());
        name.push_str(".json");
        name
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.gene {
            Some(gene) => write!(f, "{}/{} ({})", self.instance, gene, self.source.tag()),
            None => write!(f, "{} ({})", self.instance, self.source.tag()),
        }
    }
}

/// Keep ASCII alphanumerics, `-` and `.`; everything else becomes `%XX`.
fn escape_component(component: &str) -> String {
    let mut escaped = String::with_capacity(component.len());
    for byte in component.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'.' {
            escaped.push(byte as char);
        } else {
            escaped.push_str(&format!("%{:02X}", byte));
        }
    }
    escaped
}
