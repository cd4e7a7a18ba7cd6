//! Single-flight guard for recognition submits.

use serde::{Deserialize, Serialize};

/// When a honored submit stops blocking further submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingleFlightPolicy {
    /// Only a refresh trigger releases the guard, so each clipboard image
    /// is submitted at most once, even when its request failed.
    #[default]
    UntilRefresh,
    /// Delivery of the result also releases the guard.
    UntilComplete,
}

/// Counts honored submits since the last refresh.
///
/// A submit is honored only while the count is zero.
#[derive(Debug, Clone, Default)]
pub struct SingleFlightGuard {
    count: u32,
    policy: SingleFlightPolicy,
}

impl SingleFlightGuard {
    pub fn new(policy: SingleFlightPolicy) -> Self {
        Self { count: 0, policy }
    }

    pub fn policy(&self) -> SingleFlightPolicy {
        self.policy
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_held(&self) -> bool {
        self.count > 0
    }

    /// Take the guard for a submit. False when it is already held.
    pub fn try_acquire(&mut self) -> bool {
        if self.count != 0 {
            return false;
        }
        self.count = 1;
        true
    }

    /// A refresh trigger fired.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// A dispatched request delivered its result.
    pub fn on_complete(&mut self) {
        if self.policy == SingleFlightPolicy::UntilComplete {
            self.count = 0;
        }
    }

    /// The submit that took the guard was debounced or found no image.
    ///
    /// Under [`SingleFlightPolicy::UntilRefresh`] the guard stays held;
    /// otherwise nothing is in flight and it is released.
    pub fn release_unused(&mut self) {
        if self.policy == SingleFlightPolicy::UntilComplete {
            self.count = 0;
        }
    }
}
