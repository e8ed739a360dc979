//! Request path normalisation.

/// A cleaned request path split into its routing parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestPath {
    /// Top-level resource name (`""` for the service root).
    pub resource: String,

    /// Remaining non-empty segments.
    pub segments: Vec<String>,
}

impl RequestPath {
    /// Normalise a decoded URL path.
    ///
    /// Backslashes count as separators, empty and `.` segments are dropped,
    /// `..` removes the preceding segment (and is ignored at the start), and
    /// a leading API version segment such as `v1` is stripped.
    pub fn parse(raw: &str) -> Self {
        let mut cleaned: Vec<String> = Vec::new();
        for segment in raw.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    cleaned.pop();
                }
                other => cleaned.push(other.to_string()),
            }
        }

        if cleaned.first().is_some_and(|s| is_version_segment(s)) {
            cleaned.remove(0);
        }

        Self::from_segments(cleaned)
    }

    /// Split already-normalised segments into resource name and the rest.
    pub fn from_segments(mut segments: Vec<String>) -> Self {
        if segments.is_empty() {
            return Self::default();
        }
        let resource = segments.remove(0);
        Self { resource, segments }
    }

    /// The path as it would appear in a URL, without leading slash.
    pub fn display(&self) -> String {
        std::iter::once(self.resource.as_str())
            .chain(self.segments.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn is_version_segment(segment: &str) -> bool {
    segment.len() > 1
        && segment.starts_with('v')
        && segment[1..].chars().all(|c| c.is_ascii_digit())
}
