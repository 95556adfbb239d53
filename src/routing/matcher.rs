//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request method (exact, case-sensitive)
//! - Match the request path (exact, case-sensitive)
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - No prefix or wildcard matching; the trigger contract is exact
//! - No query-string handling and no path normalization
//! - No regex, matching is a handful of string comparisons

use crate::http::RequestHead;

/// Trait for matching request heads against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request head matches this condition.
    fn matches(&self, head: &RequestHead) -> bool;
}

/// Matches the request method exactly.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    expected: String,
}

impl MethodMatcher {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            expected: method.into(),
        }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, head: &RequestHead) -> bool {
        head.method == self.expected
    }
}

/// Matches the request path exactly.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    expected: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            expected: path.into(),
        }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, head: &RequestHead) -> bool {
        head.path == self.expected
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, head: &RequestHead) -> bool {
        self.matchers.iter().all(|m| m.matches(head))
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
    fn method_matcher_is_case_sensitive() {
        let matcher = MethodMatcher::new("POST");
        assert!(matcher.matches(&head("POST", "/")));
        assert!(!matcher.matches(&head("post", "/")));
        assert!(!matcher.matches(&head("GET", "/")));
    }

    #[test]
    fn path_matcher_is_exact() {
        let matcher = ExactPathMatcher::new("/v1/chat/completions");
        assert!(matcher.matches(&head("POST", "/v1/chat/completions")));
        // Prefix, suffix, and query variants must not match.
        assert!(!matcher.matches(&head("POST", "/v1/chat")));
        assert!(!matcher.matches(&head("POST", "/v1/chat/completions/extra")));
        assert!(!matcher.matches(&head("POST", "/v1/chat/completions?stream=true")));
    }

    #[test]
    fn and_matcher_requires_all_conditions() {
        let matcher = AndMatcher::new(vec![
            Box::new(MethodMatcher::new("POST")),
            Box::new(ExactPathMatcher::new("/v1/chat/completions")),
        ]);
        assert!(matcher.matches(&head("POST", "/v1/chat/completions")));
        assert!(!matcher.matches(&head("GET", "/v1/chat/completions")));
        assert!(!matcher.matches(&head("POST", "/v1/embeddings")));
    }
}
