//! The three navigation policies.
//!
//! Each module exposes a `run` function with the same shape as
//! [`run_strategy`](crate::run_strategy) minus the selector. They are
//! public so callers can hold a policy as a plain function pointer.

pub mod commit;
pub mod replan;
pub mod risk_aware;
