//! Front-end routes: which view a URL shows and with which parameters.

use itertools::Itertools;
use tracing::debug;

use crate::model::MatchKind;

/// The views of the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum View {
    TournamentList,
    New,
    Tournament,
    Join,
    Match,
}

/// URL patterns in match order. `:name` segments capture a parameter.
const ROUTES: &[(&str, View)] = &[
    ("/towerfall/", View::TournamentList),
    ("/towerfall/new/", View::New),
    ("/towerfall/:tournament/", View::Tournament),
    ("/towerfall/:tournament/join/", View::Join),
    ("/towerfall/:tournament/:kind/:match/", View::Match),
];

const REDIRECTS: &[(&str, &str)] = &[("/", "/towerfall/")];

/// A resolved route with its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    TournamentList,
    New,
    Tournament {
        tournament: String,
    },
    Join {
        tournament: String,
    },
    Match {
        tournament: String,
        kind: MatchKind,
        index: usize,
    },
}

impl Route {
    /// Resolve a URL path, following redirects. Query strings and fragments
    /// are ignored; the trailing slash is optional.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = REDIRECTS
            .iter()
            .find(|(from, _)| same_path(from, path))
            .map_or(path, |(_, to)| *to);
        let segments = segments(path);

        ROUTES.iter().find_map(|(pattern, view)| {
            let params = capture(pattern, &segments)?;
            Route::from_params(*view, &params)
        })
    }

    fn from_params(view: View, params: &[(&str, &str)]) -> Option<Route> {
        let param = |name: &str| {
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        };
        let route = match view {
            View::TournamentList => Route::TournamentList,
            View::New => Route::New,
            View::Tournament => Route::Tournament {
                tournament: param("tournament")?,
            },
            View::Join => Route::Join {
                tournament: param("tournament")?,
            },
            View::Match => Route::Match {
                tournament: param("tournament")?,
                kind: MatchKind::from(param("kind")?),
                index: parse_index(&param("match")?)?,
            },
        };
        Some(route)
    }

    pub fn view(&self) -> View {
        match self {
            Route::TournamentList => View::TournamentList,
            Route::New => View::New,
            Route::Tournament { .. } => View::Tournament,
            Route::Join { .. } => View::Join,
            Route::Match { .. } => View::Match,
        }
    }

    /// The canonical URL path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::TournamentList => "/towerfall/".to_string(),
            Route::New => "/towerfall/new/".to_string(),
            Route::Tournament { tournament } => format!("/towerfall/{tournament}/"),
            Route::Join { tournament } => format!("/towerfall/{tournament}/join/"),
            Route::Match {
                tournament,
                kind,
                index,
            } => format!("/towerfall/{tournament}/{kind}/{index}/"),
        }
    }
}

/// Plain decimal digits only, so that `Route::path` reproduces the URL.
fn parse_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect_vec()
}

fn same_path(a: &str, b: &str) -> bool {
    segments(a) == segments(b)
}

fn capture<'a>(pattern: &'a str, segments: &[&'a str]) -> Option<Vec<(&'a str, &'a str)>> {
    let pattern = self::segments(pattern);
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (expected, actual) in pattern.into_iter().zip(segments) {
        match expected.strip_prefix(':') {
            Some(name) => params.push((name, *actual)),
            None if expected == *actual => {}
            None => return None,
        }
    }
    Some(params)
}

/// Runs before every successful navigation.
pub trait NavigationHook {
    fn before_each(&self, route: &Route);
}

impl<F> NavigationHook for F
where
    F: Fn(&Route),
{
    fn before_each(&self, route: &Route) {
        self(route)
    }
}

/// Resolves paths and notifies the registered hooks.
///
/// The front-end registers a scroll reset and a data refresh; both are
/// idempotent, so hooks run on every navigation including repeated ones.
#[derive(Default)]
pub struct Router {
    hooks: Vec<Box<dyn NavigationHook>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook; hooks run in registration order.
    pub fn before_each(mut self, hook: impl NavigationHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Resolve `path` and run the hooks. Unknown paths run no hooks.
    pub fn navigate(&self, path: &str) -> Option<Route> {
        let Some(route) = Route::resolve(path) else {
            debug!(path, "no route");
            return None;
        };
        debug!(path, view = %route.view(), hooks = self.hooks.len(), "navigating");
        for hook in &self.hooks {
            hook.before_each(&route);
        }
        Some(route)
    }
}
