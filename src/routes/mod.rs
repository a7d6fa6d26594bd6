// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page route table.
//!
//! Static mapping from URL paths to pages and the layout wrapping them.
//! Rendering is out of scope; this only answers "which page is this path".

use std::fmt;
use std::str::FromStr;

/// Shell a page renders inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Login, signup and account pages
    Auth,
    /// Everything else
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    Account,
    Home,
    Session,
    ExerciseList,
    ExerciseCompletion,
}

/// One row of the route table. `:id` segments match numeric IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub layout: Layout,
    pub page: Page,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: "/auth/login",
        layout: Layout::Auth,
        page: Page::Login,
    },
    RouteEntry {
        pattern: "/auth/signup",
        layout: Layout::Auth,
        page: Page::Signup,
    },
    RouteEntry {
        pattern: "/auth/account",
        layout: Layout::Auth,
        page: Page::Account,
    },
    RouteEntry {
        pattern: "/",
        layout: Layout::Main,
        page: Page::Home,
    },
    RouteEntry {
        pattern: "/session/:id",
        layout: Layout::Main,
        page: Page::Session,
    },
    RouteEntry {
        pattern: "/exercises",
        layout: Layout::Main,
        page: Page::ExerciseList,
    },
    RouteEntry {
        pattern: "/exercise-completion/:id",
        layout: Layout::Main,
        page: Page::ExerciseCompletion,
    },
];

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl RouteEntry {
    fn match_path(&self, path: &[&str]) -> Option<Route> {
        let pattern = segments(self.pattern);
        if pattern.len() != path.len() {
            return None;
        }

        let mut id = None;
        for (expected, actual) in pattern.iter().zip(path) {
            if expected.starts_with(':') {
                id = Some(actual.parse::<u64>().ok()?);
            } else if expected != actual {
                return None;
            }
        }

        Route::from_page(self.page, id)
    }
}

/// A resolved page location with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Account,
    Home,
    Session { id: u64 },
    Exercises,
    ExerciseCompletion { id: u64 },
}

impl Route {
    /// Match a path against the table. Query string, fragment and trailing
    /// slashes are ignored.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = segments(path);
        ROUTES.iter().find_map(|entry| entry.match_path(&path))
    }

    fn from_page(page: Page, id: Option<u64>) -> Option<Route> {
        match (page, id) {
            (Page::Login, None) => Some(Route::Login),
            (Page::Signup, None) => Some(Route::Signup),
            (Page::Account, None) => Some(Route::Account),
            (Page::Home, None) => Some(Route::Home),
            (Page::Session, Some(id)) => Some(Route::Session { id }),
            (Page::ExerciseList, None) => Some(Route::Exercises),
            (Page::ExerciseCompletion, Some(id)) => Some(Route::ExerciseCompletion { id }),
            _ => None,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::Login => Page::Login,
            Route::Signup => Page::Signup,
            Route::Account => Page::Account,
            Route::Home => Page::Home,
            Route::Session { .. } => Page::Session,
            Route::Exercises => Page::ExerciseList,
            Route::ExerciseCompletion { .. } => Page::ExerciseCompletion,
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Route::Login | Route::Signup | Route::Account => Layout::Auth,
            _ => Layout::Main,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/auth/login".to_string(),
            Route::Signup => "/auth/signup".to_string(),
            Route::Account => "/auth/account".to_string(),
            Route::Home => "/".to_string(),
            Route::Session { id } => format!("/session/{id}"),
            Route::Exercises => "/exercises".to_string(),
            Route::ExerciseCompletion { id } => format!("/exercise-completion/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("No route matches {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::resolve(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}
