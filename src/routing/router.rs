//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Look up the action for a parsed request head
//! - Return an explicit fallback rather than a silent default branch
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - The table replaces manual method/path string dispatch so adding a
//!   trigger is one entry, not another nested branch

use crate::http::RequestHead;
use crate::routing::matcher::{AndMatcher, ExactPathMatcher, Matcher, MethodMatcher};

/// The one recognized trigger: method of the mock chat-completions call.
pub const TRIGGER_METHOD: &str = "POST";

/// The one recognized trigger: path of the mock chat-completions call.
pub const TRIGGER_PATH: &str = "/v1/chat/completions";

/// What the responder should write for a matched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    /// Write the preloaded reply buffer.
    ServeReply,
    /// Write the constant fallback payload.
    Fallback,
}

/// A single named route entry.
#[derive(Debug)]
struct Route {
    name: &'static str,
    matcher: Box<dyn Matcher>,
    action: RouteAction,
}

/// Immutable table mapping (method, path) conditions to actions.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the standard table: the single chat-completions trigger.
    pub fn standard() -> Self {
        Self {
            routes: vec![Route {
                name: "chat-completions",
                matcher: Box::new(AndMatcher::new(vec![
                    Box::new(MethodMatcher::new(TRIGGER_METHOD)),
                    Box::new(ExactPathMatcher::new(TRIGGER_PATH)),
                ])),
                action: RouteAction::ServeReply,
            }],
        }
    }

    /// Look up the action for a request head. First match wins; anything
    /// unmatched gets the fallback action.
    pub fn match_head(&self, head: &RequestHead) -> (&'static str, RouteAction) {
        for route in &self.routes {
            if route.matcher.matches(head) {
                return (route.name, route.action);
            }
        }
        ("fallback", RouteAction::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head(method: &str, path: &str) -> RequestHead {
        RequestHead {
            method: method.to_string(),
            path: path.to_string(),
            host: None,
        }
    }

    #[test]
    fn trigger_serves_reply() {
        let table = RouteTable::standard();
        let (name, action) = table.match_head(&head("POST", "/v1/chat/completions"));
        assert_eq!(name, "chat-completions");
        assert_eq!(action, RouteAction::ServeReply);
    }

    #[test]
    fn everything_else_falls_back() {
        let table = RouteTable::standard();
        for (method, path) in [
            ("GET", "/v1/chat/completions"),
            ("POST", "/v1/completions"),
            ("POST", "/"),
            ("DELETE", "/v1/chat/completions"),
            ("POST", "/V1/CHAT/COMPLETIONS"),
        ] {
            let (_, action) = table.match_head(&head(method, path));
            assert_eq!(action, RouteAction::Fallback, "{method} {path}");
        }
    }
}
