//! The route table of the client.
//!
//! Entries are tried in declaration order and the first structural match
//! wins. Nothing detects two entries matching the same concrete path, so new
//! entries must be placed so that the intended one comes first.

use std::sync::OnceLock;

use leptos_router::ParamsMap;

use super::{
    params::parse_query,
    pattern::{PatternError, RoutePattern},
};

/// Page views a route can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    ProblemList,
    ProblemSubmission,
    SubmissionList,
    SubmissionStatus,
    ContestList,
    ContestPage,
    RankList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub name: Option<&'static str>,
    pub page: Page,
    /// Pass captured segments to the page as props
    pub forward_params: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub page: Page,
    pub name: Option<&'static str>,
    pub params: ParamsMap,
    pub query: ParamsMap,
    forward_params: bool,
}

impl ResolvedRoute {
    /// Captured segments if the entry forwards them, otherwise empty.
    pub fn props(&self) -> ParamsMap {
        if self.forward_params {
            self.params.clone()
        } else {
            ParamsMap::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedRoute),
    NotFound(String),
}

impl Resolution {
    pub fn page(&self) -> Option<Page> {
        match self {
            Resolution::Found(route) => Some(route.page),
            Resolution::NotFound(_) => None,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            Resolution::Found(route) => route.name,
            Resolution::NotFound(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Resolve a location such as `/contest/3/submissions?user_id=1`.
    pub fn resolve(&self, location: &str) -> Resolution {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };
        let path = if path.is_empty() { "/" } else { path };

        let found = self.entries.iter().find_map(|entry| {
            entry.pattern.matches(path).map(|params| (entry, params))
        });
        let Some((entry, params)) = found else {
            return Resolution::NotFound(location.to_owned());
        };

        let query = parse_query(query).unwrap_or_else(|err| {
            tracing::warn!(%err, location, "ignoring malformed query");
            ParamsMap::new()
        });
        Resolution::Found(ResolvedRoute {
            page: entry.page,
            name: entry.name,
            params,
            query,
            forward_params: entry.forward_params,
        })
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
    error: Option<PatternError>,
}

impl RouteTableBuilder {
    fn push(
        mut self,
        pattern: &'static str,
        name: Option<&'static str>,
        page: Page,
        forward_params: bool,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        match RoutePattern::parse(pattern) {
            Ok(pattern) => self.entries.push(RouteEntry {
                pattern,
                name,
                page,
                forward_params,
            }),
            Err(err) => self.error = Some(err),
        }
        self
    }

    pub fn named(self, name: &'static str, pattern: &'static str, page: Page) -> Self {
        self.push(pattern, Some(name), page, false)
    }

    /// An unnamed entry forwarding its captures as props.
    pub fn with_props(self, pattern: &'static str, page: Page) -> Self {
        self.push(pattern, None, page, true)
    }

    pub fn build(self) -> Result<RouteTable, PatternError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(RouteTable {
                entries: self.entries,
            }),
        }
    }
}

fn build_route_table() -> Result<RouteTable, PatternError> {
    RouteTable::builder()
        .named("Home", "/", Page::Home)
        .named("Problems", "/problems", Page::ProblemList)
        .with_props(r"/problem/:id(\d+)", Page::ProblemSubmission)
        .named("Submissions", "/submissions", Page::SubmissionList)
        .with_props(r"/submission/:id(\d+)", Page::SubmissionStatus)
        .named("Contests", "/contests", Page::ContestList)
        .with_props(r"/contest/:id(\d+)", Page::ContestPage)
        .with_props(
            r"/contest/:contestId(\d+)/problem/:id(\d+)",
            Page::ProblemSubmission,
        )
        .with_props(
            r"/contest/:contestId(\d+)/submissions",
            Page::SubmissionList,
        )
        .named("Rank List", "/ranklist", Page::RankList)
        .build()
}

static ROUTE_TABLE: OnceLock<RouteTable> = OnceLock::new();

/// The application's route table, built on first use.
pub fn route_table() -> &'static RouteTable {
    ROUTE_TABLE.get_or_init(|| {
        build_route_table().expect("route table patterns are static")
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn resolve(path: &str) -> Resolution {
        route_table().resolve(path)
    }

    fn params(route: &ResolvedRoute) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = ["contestId", "id"]
            .into_iter()
            .filter_map(|key| {
                route.props().get(key).map(|v| (key.to_owned(), v.clone()))
            })
            .collect();
        pairs.sort();
        pairs
    }

    fn found(path: &str) -> ResolvedRoute {
        match resolve(path) {
            Resolution::Found(route) => route,
            Resolution::NotFound(path) => panic!("{path} did not resolve"),
        }
    }

    #[test]
    fn table_shape() {
        let table = route_table();
        let raw: Vec<_> = table.entries().iter().map(|e| e.pattern.raw()).collect();
        assert_eq!(
            raw,
            vec![
                "/",
                "/problems",
                r"/problem/:id(\d+)",
                "/submissions",
                r"/submission/:id(\d+)",
                "/contests",
                r"/contest/:id(\d+)",
                r"/contest/:contestId(\d+)/problem/:id(\d+)",
                r"/contest/:contestId(\d+)/submissions",
                "/ranklist",
            ]
        );
        for entry in table.entries() {
            assert_eq!(entry.name.is_some(), !entry.forward_params);
        }
    }

    #[test]
    fn problem_page() {
        let route = found("/problem/7");
        assert_eq!(route.page, Page::ProblemSubmission);
        assert_eq!(route.name, None);
        assert_eq!(params(&route), vec![("id".to_owned(), "7".to_owned())]);
    }

    #[test]
    fn contest_problem_page() {
        let route = found("/contest/3/problem/7");
        assert_eq!(route.page, Page::ProblemSubmission);
        assert_eq!(
            params(&route),
            vec![
                ("contestId".to_owned(), "3".to_owned()),
                ("id".to_owned(), "7".to_owned()),
            ]
        );
    }

    #[test]
    fn shared_prefix() {
        assert_eq!(found("/contest/3").page, Page::ContestPage);
        let route = found("/contest/3/submissions");
        assert_eq!(route.page, Page::SubmissionList);
        assert_eq!(
            params(&route),
            vec![("contestId".to_owned(), "3".to_owned())]
        );
        assert_eq!(
            resolve("/contest/3/ranklist"),
            Resolution::NotFound("/contest/3/ranklist".to_owned())
        );
    }

    #[test]
    fn named_routes() {
        for (path, page, name) in [
            ("/", Page::Home, "Home"),
            ("", Page::Home, "Home"),
            ("/problems", Page::ProblemList, "Problems"),
            ("/submissions", Page::SubmissionList, "Submissions"),
            ("/contests", Page::ContestList, "Contests"),
            ("/ranklist", Page::RankList, "Rank List"),
        ] {
            let route = found(path);
            assert_eq!(route.page, page);
            assert_eq!(route.name, Some(name));
            assert_eq!(route.props(), ParamsMap::new());
        }
    }

    #[test]
    fn non_digit_never_matches() {
        for path in [
            "/problem/12a",
            "/submission/x",
            "/contest/1a",
            "/contest/a/problem/1",
            "/contest/1/problem/b",
            "/contest/c/submissions",
            "/problem/99999999999999999999",
        ] {
            assert_eq!(
                resolve(path),
                Resolution::NotFound(path.to_owned()),
                "{path}"
            );
        }
    }

    #[test]
    fn unknown_path() {
        assert_eq!(
            resolve("/nonexistent"),
            Resolution::NotFound("/nonexistent".to_owned())
        );
    }

    #[test]
    fn query_is_split_off() {
        let route = found("/submissions?user_id=2&problem_id=5");
        assert_eq!(route.page, Page::SubmissionList);
        assert_eq!(route.query.get("user_id").map(String::as_str), Some("2"));
        assert_eq!(route.query.get("problem_id").map(String::as_str), Some("5"));
    }

    #[test]
    fn first_match_wins() {
        let table = RouteTable::builder()
            .with_props("/contest/:name", Page::ContestList)
            .with_props(r"/contest/:id(\d+)", Page::ContestPage)
            .build()
            .unwrap();
        assert_eq!(table.resolve("/contest/3").page(), Some(Page::ContestList));

        let table = RouteTable::builder()
            .with_props(r"/contest/:id(\d+)", Page::ContestPage)
            .with_props("/contest/:name", Page::ContestList)
            .build()
            .unwrap();
        assert_eq!(table.resolve("/contest/3").page(), Some(Page::ContestPage));
        assert_eq!(table.resolve("/contest/x").page(), Some(Page::ContestList));
    }

    #[test]
    fn builder_reports_bad_pattern() {
        let err = RouteTable::builder()
            .named("Home", "/", Page::Home)
            .with_props("problem/:id", Page::ProblemSubmission)
            .build()
            .unwrap_err();
        assert_eq!(err, PatternError::NotAbsolute("problem/:id".to_owned()));
    }
}
