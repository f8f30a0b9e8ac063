//! Linear forward/back navigation between screens

use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "category", rename_all = "lowercase")]
pub enum Route {
    Splash,
    Home,
    List(Category),
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Splash => f.write_str("/"),
            Route::Home => f.write_str("/home"),
            Route::List(category) => write!(f, "/{category}"),
        }
    }
}

/// Navigation stack. Never empty: the root screen cannot be popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Splash)
    }
}

impl Navigator {
    #[must_use]
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        // stack is never empty
        self.stack[self.stack.len() - 1]
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        debug!("Navigating {} -> {}", self.current(), route);
        self.stack.push(route);
    }

    /// Pop the current screen. Returns false on the root screen.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let left = self.stack.pop();
        debug!("Back from {:?} to {}", left, self.current());
        true
    }

    /// Swap the current screen for `route`, leaving no way back to it.
    pub fn replace(&mut self, route: Route) {
        debug!("Replacing {} with {}", self.current(), route);
        let last = self.stack.len() - 1;
        self.stack[last] = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut nav = Navigator::new(Route::Home);
        nav.push(Route::List(Category::Cafes));
        assert_eq!(nav.current(), Route::List(Category::Cafes));
        assert_eq!(nav.depth(), 2);

        assert!(nav.back());
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_back_on_root_keeps_root() {
        let mut nav = Navigator::default();
        assert!(!nav.back());
        assert_eq!(nav.current(), Route::Splash);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_replace_splash_with_home() {
        let mut nav = Navigator::default();
        nav.replace(Route::Home);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.back());
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::List(Category::Temples).to_string(), "/temples");
        assert_eq!(Route::Home.to_string(), "/home");
    }
}
