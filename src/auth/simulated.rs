//! Fixed-delay stand-in for a network round trip

use super::AuthBackend;
use crate::config::AppConfig;
use crate::state::{FieldValues, FlowKind, SubmitError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Default simulated latency
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Backend that waits `delay`, then succeeds unless the flow is configured to
/// be rejected.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    rejections: HashMap<FlowKind, String>,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rejections: HashMap::new(),
        }
    }

    /// Build from user configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let mut backend = Self::new(config.submit_delay());
        for (flow, message) in &config.remote_rejections {
            backend = backend.with_rejection(*flow, message);
        }
        backend
    }

    /// Make every request for `flow` fail with `message` after the delay
    pub fn with_rejection(mut self, flow: FlowKind, message: &str) -> Self {
        self.rejections.insert(flow, message.to_string());
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl AuthBackend for SimulatedBackend {
    async fn submit(&self, flow: FlowKind, values: FieldValues) -> Result<String, SubmitError> {
        tracing::debug!("Simulating {flow} request ({} ms)", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;

        match self.rejections.get(&flow) {
            Some(message) => Err(SubmitError::RemoteRejected {
                message: message.clone(),
            }),
            None => Ok(flow.success_message(&values)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn email(value: &str) -> FieldValues {
        let mut values = FieldValues::new();
        values.insert("email".to_string(), value.to_string());
        values
    }

    #[test]
    fn test_default_delay_is_two_seconds() {
        assert_eq!(SimulatedBackend::default().delay(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_delay() {
        let backend = SimulatedBackend::new(Duration::from_millis(500));
        let start = Instant::now();

        let result = backend.submit(FlowKind::Login, email("a@b.com")).await;

        assert_eq!(result, Ok("Signed in as a@b.com".to_string()));
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_flow_is_rejected() {
        let backend = SimulatedBackend::new(Duration::from_millis(10))
            .with_rejection(FlowKind::Recover, "No account for that email");

        let rejected = backend.submit(FlowKind::Recover, email("a@b.com")).await;
        assert_eq!(
            rejected,
            Err(SubmitError::RemoteRejected {
                message: "No account for that email".to_string()
            })
        );

        let accepted = backend.submit(FlowKind::Login, email("a@b.com")).await;
        assert!(accepted.is_ok());
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig {
            submit_delay_ms: Some(250),
            ..Default::default()
        };
        config
            .remote_rejections
            .insert(FlowKind::Login, "Invalid credentials".to_string());

        let backend = SimulatedBackend::from_config(&config);
        assert_eq!(backend.delay(), Duration::from_millis(250));
        assert_eq!(
            backend.rejections.get(&FlowKind::Login).map(String::as_str),
            Some("Invalid credentials")
        );
    }

    #[tokio::test]
    async fn test_pending_until_delay_elapses() {
        tokio::time::pause();
        let backend = SimulatedBackend::new(Duration::from_secs(2));
        let mut request =
            tokio_test::task::spawn(backend.submit(FlowKind::Login, email("a@b.com")));

        tokio_test::assert_pending!(request.poll());
        tokio::time::advance(Duration::from_millis(1999)).await;
        tokio_test::assert_pending!(request.poll());
        // sleep deadlines are rounded up to the next millisecond tick
        tokio::time::advance(Duration::from_millis(2)).await;
        tokio_test::assert_ready_ok!(request.poll());
    }
}
