use std::time::Duration;

/// Simulated transport delay for sending, resending, and checking codes.
pub const GATEWAY_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("کد وارد شده صحیح نیست")]
    IncorrectCode,
}

/// Collaborator that sends and checks one-time codes. Implementations
/// own the expected code; client state never sees it. A production
/// gateway performs the check server-side.
pub trait SmsGateway {
    /// Request a code for the given mobile number.
    fn send_code(&mut self, mobile: &str);

    /// Check a submitted code.
    fn submit_code(&mut self, code: &str) -> Result<(), VerifyError>;

    /// Delay before either outcome is delivered.
    fn latency(&self) -> Duration {
        GATEWAY_DELAY
    }
}

/// Demo gateway: accepts one fixed code and never actually sends
/// anything.
#[derive(Debug, Clone)]
pub struct SimulatedSmsGateway {
    expected: String,
}

impl SimulatedSmsGateway {
    /// The code the demo gateway accepts.
    pub const DEMO_CODE: &'static str = "12345";

    pub fn new() -> Self {
        Self {
            expected: Self::DEMO_CODE.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_expected(expected: &str) -> Self {
        Self {
            expected: expected.to_string(),
        }
    }
}

impl Default for SimulatedSmsGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SmsGateway for SimulatedSmsGateway {
    fn send_code(&mut self, mobile: &str) {
        tracing::info!("simulated code send to {mobile}");
    }

    fn submit_code(&mut self, code: &str) -> Result<(), VerifyError> {
        if code == self.expected {
            Ok(())
        } else {
            Err(VerifyError::IncorrectCode)
        }
    }
}
