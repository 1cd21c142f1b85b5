//! Client fetcher lifecycle: the reset submission and the success gate.
//!
//! A fetcher is the client-side handle of one mutation. After it reports a
//! successful result and settles back to idle, the client shows a
//! notification once and submits an empty form to [`FETCHER_RESET_PATH`] so
//! the fetcher forgets the result.

use serde::{Deserialize, Serialize};

/// Address of the no-op endpoint that clears a fetcher's transient result.
pub const FETCHER_RESET_PATH: &str = "/api/v1/resources/reset-fetcher";

/// HTTP method used by fetcher submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmitMethod {
    Post,
}

/// Request a fetcher makes when it submits a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetcherSubmission {
    method: SubmitMethod,
    action: &'static str,
    encoding: &'static str,
    form: Vec<(String, String)>,
}

impl FetcherSubmission {
    /// Empty form-encoded POST to the reset endpoint.
    ///
    /// Every call yields an equal value.
    ///
    /// # Examples
    /// ```
    /// use till::domain::{FETCHER_RESET_PATH, FetcherSubmission};
    ///
    /// let reset = FetcherSubmission::reset();
    /// assert_eq!(reset.action(), FETCHER_RESET_PATH);
    /// assert!(reset.form().is_empty());
    /// assert_eq!(reset, FetcherSubmission::reset());
    /// ```
    #[must_use]
    pub fn reset() -> Self {
        Self {
            method: SubmitMethod::Post,
            action: FETCHER_RESET_PATH,
            encoding: "application/x-www-form-urlencoded",
            form: Vec::new(),
        }
    }

    pub fn method(&self) -> SubmitMethod {
        self.method
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn encoding(&self) -> &'static str {
        self.encoding
    }

    pub fn form(&self) -> &[(String, String)] {
        &self.form
    }
}

/// Network phase of a fetcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetcherState {
    #[default]
    Idle,
    Submitting,
    Loading,
}

/// Result payload an action returned to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetcherResult {
    Success { message: String },
    Failure { message: String },
}

/// What to do after the gate fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessNotice {
    pub message: String,
    pub reset: FetcherSubmission,
}

/// Single-shot trigger for the success notification.
///
/// [`SuccessGate::observe`] is called on every render commit with the
/// fetcher's current state and result. It fires only when the result is a
/// success *and* the fetcher is idle, and only once for that result. The
/// gate re-arms once any other result is observed: the reset submission
/// clearing it, or a failure replacing it.
#[derive(Debug, Default)]
pub struct SuccessGate {
    fired: Option<String>,
}

impl SuccessGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one observed snapshot; returns a notice at most once per success.
    pub fn observe(
        &mut self,
        state: FetcherState,
        result: Option<&FetcherResult>,
    ) -> Option<SuccessNotice> {
        let Some(FetcherResult::Success { message }) = result else {
            self.fired = None;
            return None;
        };
        if state != FetcherState::Idle || self.fired.as_deref() == Some(message.as_str()) {
            return None;
        }
        self.fired = Some(message.clone());
        Some(SuccessNotice {
            message: message.clone(),
            reset: FetcherSubmission::reset(),
        })
    }

    /// Whether the current success result has already been announced.
    pub fn has_fired(&self) -> bool {
        self.fired.is_some()
    }
}
