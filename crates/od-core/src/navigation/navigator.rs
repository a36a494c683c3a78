use super::{Route, Screen};

/// Result of a navigation: the screen that lost focus and the one that
/// gained it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Route,
    pub to: Route,
    /// Routes removed from the stack by this transition, top first.
    pub popped: Vec<Route>,
}

impl Transition {
    /// Whether `screen` was removed from the stack (unmounted).
    pub fn unmounted(&self, screen: Screen) -> bool {
        self.popped.iter().any(|route| route.screen() == screen)
    }
}

/// Stack navigator.
///
/// The bottom of the stack is always the orphanages map.
/// 栈底永远是地图页。
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::OrphanagesMap],
        }
    }

    pub fn current(&self) -> &Route {
        // The root route is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Navigates forward to `route`.
    ///
    /// If a route for the same screen is already on the stack, everything
    /// above it is popped and its parameters are replaced; otherwise the
    /// route is pushed.
    pub fn navigate(&mut self, route: Route) -> Transition {
        let from = self.current().clone();
        let screen = route.screen();
        let mut popped = Vec::new();

        if let Some(index) = self.stack.iter().position(|r| r.screen() == screen) {
            while self.stack.len() > index + 1 {
                if let Some(top) = self.stack.pop() {
                    popped.push(top);
                }
            }
            self.stack[index] = route;
        } else {
            self.stack.push(route);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(from = %from, to = %self.current(), popped = popped.len(), "navigate");

        Transition {
            from,
            to: self.current().clone(),
            popped,
        }
    }

    /// Pops the current screen. Returns `None` on the root screen.
    pub fn go_back(&mut self) -> Option<Transition> {
        if !self.can_go_back() {
            return None;
        }
        let from = self.stack.pop()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(from = %from, to = %self.current(), "go back");

        Some(Transition {
            to: self.current().clone(),
            popped: vec![from.clone()],
            from,
        })
    }
}
