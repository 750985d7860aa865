//! console-core: shared plumbing for the subscription console.
pub mod middleware;
pub mod observability;
