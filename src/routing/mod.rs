//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Parsed request head (method, path)
//!     → router.rs (route table lookup)
//!     → matcher.rs (evaluate match conditions)
//!     → Return: RouteAction (serve reply, or fallback)
//! ```
//!
//! # Design Decisions
//! - Route table built at startup, immutable at runtime
//! - Exact, case-sensitive matching only; no normalization, no query handling
//! - First match wins; everything unmatched falls back explicitly

pub mod matcher;
pub mod router;

pub use router::{RouteAction, RouteTable};
