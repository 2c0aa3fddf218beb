//! Authentication backends
//!
//! There is no server; the only implementation sleeps for a configured
//! delay and then answers locally.

mod simulated;
mod traits;

pub use simulated::SimulatedBackend;
pub use traits::AuthBackend;

#[cfg(test)]
pub use traits::MockAuthBackend;
