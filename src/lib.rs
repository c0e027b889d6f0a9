//! Real-root finding over a bounded interval.
//!
//! [`root_finding`] provides three independent solvers
//! ([`bisection`](root_finding::bisection::bisection),
//! [`newton`](root_finding::newton::newton),
//! [`secant`](root_finding::secant::secant)) and a [`scan`](root_finding::scan)
//! driver that tries each sign-change window of a range.

pub mod root_finding;
