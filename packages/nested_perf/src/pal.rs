//! Platform abstraction layer for clock access.
//!
//! Elapsed time and timestamps are read through this layer so that tests can substitute
//! a fake clock that only moves when told to.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
