//! Path patterns for the route table.
//!
//! A pattern is a `/`-separated list of segments. `(:any)` matches any
//! non-empty segment, `(:num)` matches a segment made only of ASCII digits,
//! everything else is a literal compared case-insensitively.

const ANY: &str = "(:any)";
const NUM: &str = "(:num)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Any,
    Num,
}

impl Segment {
    fn parse(raw: &'static str) -> Self {
        match raw {
            ANY => Segment::Any,
            NUM => Segment::Num,
            literal => Segment::Literal(literal),
        }
    }

    fn capture<'p>(&self, value: &'p str) -> Option<Option<&'p str>> {
        match self {
            Segment::Literal(literal) => literal.eq_ignore_ascii_case(value).then_some(None),
            Segment::Any => Some(Some(value)),
            Segment::Num => value.bytes().all(|b| b.is_ascii_digit()).then_some(Some(value)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: &'static str,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(source: &'static str) -> Self {
        let segments = source
            .trim_matches('/')
            .split('/')
            .filter(|raw| !raw.is_empty())
            .map(Segment::parse)
            .collect();

        Self { source, segments }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match a request path (leading/trailing slashes ignored) and return the
    /// wildcard captures left to right. An empty path never matches.
    pub fn captures(&self, path: &str) -> Option<Vec<String>> {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return None;
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captured = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            if part.is_empty() {
                return None;
            }
            if let Some(value) = segment.capture(part)? {
                captured.push(value.to_string());
            }
        }

        Some(captured)
    }

    /// Path as shown in the documentation listing, e.g. `/constructionStages/{id}`
    pub fn display_path(&self) -> String {
        let rendered: Vec<&str> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => *literal,
                Segment::Num => "{id}",
                Segment::Any => "{param}",
            })
            .collect();

        format!("/{}", rendered.join("/"))
    }
}
