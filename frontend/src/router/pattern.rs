//! Path templates with typed captures.
//!
//! A template is a `/`-separated list of segments. Each segment is either a
//! literal (`problems`), an untyped capture (`:name`) or a numeric capture
//! (`:name(\d+)`).

use leptos_router::ParamsMap;
use thiserror::Error;

const NUMERIC: &str = r"\d+";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern `{0}` must start with `/`")]
    NotAbsolute(String),
    #[error("pattern `{0}` has an empty segment")]
    EmptySegment(String),
    #[error("capture in `{0}` has no name")]
    UnnamedCapture(String),
    #[error("unsupported constraint `{constraint}` in `{pattern}`")]
    UnsupportedConstraint { pattern: String, constraint: String },
    #[error("capture `{name}` appears twice in `{pattern}`")]
    DuplicateCapture { pattern: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Any(String),
    /// Decimal digits only, value must fit in a non-negative `i64`
    Numeric(String),
}

impl Segment {
    /// Returns the captured value, `Some("")` for a matching literal.
    fn capture<'a>(&self, part: &'a str) -> Option<&'a str> {
        match self {
            Segment::Literal(literal) => {
                literal.eq_ignore_ascii_case(part).then_some("")
            }
            Segment::Any(_) => Some(part),
            Segment::Numeric(_) => is_numeric(part).then_some(part),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Any(name) | Segment::Numeric(name) => Some(name),
        }
    }
}

/// Digits only and within the 63-bit range.
pub fn is_numeric(part: &str) -> bool {
    !part.is_empty()
        && part.bytes().all(|b| b.is_ascii_digit())
        && part.parse::<i64>().is_ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: &'static str,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(raw: &'static str) -> Result<Self, PatternError> {
        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| PatternError::NotAbsolute(raw.to_owned()))?;

        let mut segments: Vec<Segment> = Vec::new();
        for part in split_segments(rest) {
            let segment = parse_segment(raw, part)?;
            if let Some(name) = segment.name() {
                if segments.iter().any(|s| s.name() == Some(name)) {
                    return Err(PatternError::DuplicateCapture {
                        pattern: raw.to_owned(),
                        name: name.to_owned(),
                    });
                }
            }
            segments.push(segment);
        }
        if segments.iter().any(|s| matches!(s, Segment::Literal(l) if l.is_empty()))
        {
            return Err(PatternError::EmptySegment(raw.to_owned()));
        }

        Ok(Self { raw, segments })
    }

    pub fn raw(&self) -> &'static str {
        self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Structural match against a path without query or fragment.
    pub fn matches(&self, path: &str) -> Option<ParamsMap> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = split_segments(rest).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = ParamsMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            let value = segment.capture(part)?;
            if let Some(name) = segment.name() {
                params.insert(name.to_owned(), value.to_owned());
            }
        }
        Some(params)
    }
}

/// Split the part after the leading `/`, tolerating one trailing slash.
fn split_segments(rest: &str) -> impl Iterator<Item = &str> {
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    // `/` itself has no segments
    rest.split('/').filter(move |_| !rest.is_empty())
}

fn parse_segment(raw: &str, part: &str) -> Result<Segment, PatternError> {
    let Some(capture) = part.strip_prefix(':') else {
        return Ok(Segment::Literal(part.to_owned()));
    };
    let (name, constraint) = match capture.split_once('(') {
        Some((name, constraint)) => (name, constraint.strip_suffix(')')),
        None => (capture, None),
    };
    if name.is_empty() {
        return Err(PatternError::UnnamedCapture(raw.to_owned()));
    }
    match (capture.contains('('), constraint) {
        (false, _) => Ok(Segment::Any(name.to_owned())),
        (true, Some(NUMERIC)) => Ok(Segment::Numeric(name.to_owned())),
        (true, constraint) => Err(PatternError::UnsupportedConstraint {
            pattern: raw.to_owned(),
            constraint: constraint.unwrap_or(capture).to_owned(),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_segments() {
        let pattern =
            RoutePattern::parse(r"/contest/:contestId(\d+)/problem/:id(\d+)")
                .unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("contest".into()),
                Segment::Numeric("contestId".into()),
                Segment::Literal("problem".into()),
                Segment::Numeric("id".into()),
            ]
        );
        assert!(RoutePattern::parse("/").unwrap().segments().is_empty());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            RoutePattern::parse("problems"),
            Err(PatternError::NotAbsolute(_))
        ));
        assert!(matches!(
            RoutePattern::parse("/a//b"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            RoutePattern::parse(r"/:(\d+)"),
            Err(PatternError::UnnamedCapture(_))
        ));
        assert!(matches!(
            RoutePattern::parse(r"/:id([a-z]+)"),
            Err(PatternError::UnsupportedConstraint { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/:id/:id"),
            Err(PatternError::DuplicateCapture { .. })
        ));
    }

    #[test]
    fn numeric_segment() {
        let pattern = RoutePattern::parse(r"/problem/:id(\d+)").unwrap();
        let params = pattern.matches("/problem/7").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("7"));

        for path in [
            "/problem/12a",
            "/problem/a12",
            "/problem/-1",
            "/problem/+1",
            "/problem/1.5",
            "/problem/",
            "/problem/１２",
        ] {
            assert!(pattern.matches(path).is_none(), "{path} should not match");
        }
    }

    #[test]
    fn numeric_bound() {
        assert!(is_numeric("9223372036854775807"));
        assert!(!is_numeric("9223372036854775808"));
        assert!(is_numeric("007"));
    }

    #[test]
    fn literal_and_trailing_slash() {
        let pattern = RoutePattern::parse("/problems").unwrap();
        assert!(pattern.matches("/problems").is_some());
        assert!(pattern.matches("/problems/").is_some());
        assert!(pattern.matches("/Problems").is_some());
        assert!(pattern.matches("/problems//").is_none());
        assert!(pattern.matches("/problems/1").is_none());

        let root = RoutePattern::parse("/").unwrap();
        assert!(root.matches("/").is_some());
        assert!(root.matches("/problems").is_none());
    }
}
