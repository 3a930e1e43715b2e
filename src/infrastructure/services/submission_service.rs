//! Submission service driving one validate-then-request cycle

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, instrument};

use crate::domain::{
    validate_features, CancelSignal, DomainError, FeatureSet, ModelInfo, PredictionProvider,
    PredictionResult, RawFeatureInput, RequestError, SubmissionTracker,
};

/// Submission service configuration
#[derive(Debug, Clone)]
pub struct SubmissionServiceConfig {
    /// Upper bound on a single call to the prediction service
    pub timeout: Duration,
}

impl Default for SubmissionServiceConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl SubmissionServiceConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Validates raw input and forwards it to a [`PredictionProvider`]
#[derive(Debug)]
pub struct SubmissionService<P: PredictionProvider> {
    provider: Arc<P>,
    config: SubmissionServiceConfig,
}

impl<P: PredictionProvider> SubmissionService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            config: SubmissionServiceConfig::default(),
        }
    }

    pub fn with_config(provider: Arc<P>, config: SubmissionServiceConfig) -> Self {
        Self { provider, config }
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Run one submission cycle
    ///
    /// The tracker must be Idle on entry and is always Idle again on return.
    /// Invalid input never reaches the provider. The request is issued once,
    /// bounded by the configured timeout, and abandoned if `cancel` fires.
    #[instrument(skip_all, fields(submission_id = %uuid::Uuid::new_v4()))]
    pub async fn submit(
        &self,
        tracker: &mut SubmissionTracker,
        input: &RawFeatureInput,
        cancel: CancelSignal,
    ) -> Result<PredictionResult, DomainError> {
        tracker.begin()?;

        let features = match validate_features(input) {
            Ok(features) => features,
            Err(e) => {
                debug!(invalid = ?e.invalid_fields(), "Rejected feature input");
                tracker.fail(e.to_string())?;
                return Err(e.into());
            }
        };

        tracker.start_request()?;

        match self.request(&features, cancel).await {
            Ok(result) => {
                tracker.complete()?;
                info!(prediction = result.prediction, "Prediction received");
                Ok(result)
            }
            Err(e) => {
                info!(error = %e, "Prediction request failed");
                tracker.fail(e.to_string())?;
                Err(e.into())
            }
        }
    }

    /// Fetch the model description, bounded by the same timeout
    #[instrument(skip(self))]
    pub async fn model_info(&self) -> Result<ModelInfo, DomainError> {
        match timeout(self.config.timeout, self.provider.model_info()).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(RequestError::timeout(self.timeout_ms()).into()),
        }
    }

    async fn request(
        &self,
        features: &FeatureSet,
        cancel: CancelSignal,
    ) -> Result<PredictionResult, RequestError> {
        let call = timeout(self.config.timeout, self.provider.predict(features));

        match cancel.guard(call).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(RequestError::timeout(self.timeout_ms())),
            Err(_) => {
                debug!("Prediction request cancelled");
                Err(RequestError::Cancelled)
            }
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::MockPredictionProvider;
    use crate::domain::{cancellation, SubmissionState, INVALID_FEATURES_MESSAGE};
    use async_trait::async_trait;
    use tokio_test::{assert_err, assert_ok};

    fn expected_features() -> FeatureSet {
        FeatureSet::new(1.5, -2.0, 3.25).unwrap()
    }

    fn valid_input() -> RawFeatureInput {
        RawFeatureInput::new("1.5", "-2.0", "3.25")
    }

    async fn submit<P: PredictionProvider>(
        service: &SubmissionService<P>,
        tracker: &mut SubmissionTracker,
        input: &RawFeatureInput,
    ) -> Result<PredictionResult, DomainError> {
        let (_handle, signal) = cancellation();
        service.submit(tracker, input, signal).await
    }

    /// Provider that never answers in time
    #[derive(Debug)]
    struct SlowProvider {
        delay: Duration,
    }

    #[async_trait]
    impl PredictionProvider for SlowProvider {
        async fn predict(&self, features: &FeatureSet) -> Result<PredictionResult, RequestError> {
            tokio::time::sleep(self.delay).await;
            Ok(PredictionResult::new(1.0, *features))
        }

        async fn model_info(&self) -> Result<ModelInfo, RequestError> {
            tokio::time::sleep(self.delay).await;
            Err(RequestError::network("unreachable"))
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut mock = MockPredictionProvider::new();
        mock.expect_predict()
            .times(1)
            .returning(|features| Ok(PredictionResult::new(0.8734, *features)));

        let service = SubmissionService::new(Arc::new(mock));
        let mut tracker = SubmissionTracker::new();

        let result = submit(&service, &mut tracker, &valid_input()).await.unwrap();

        assert_eq!(result, PredictionResult::new(0.8734, expected_features()));
        assert_eq!(tracker.state(), SubmissionState::Idle);
        assert_eq!(tracker.last_error(), None);
    }

    #[tokio::test]
    async fn test_invalid_input_sends_no_request() {
        let mut mock = MockPredictionProvider::new();
        mock.expect_predict().times(0);

        let service = SubmissionService::new(Arc::new(mock));
        let mut tracker = SubmissionTracker::new();
        let input = RawFeatureInput::new("abc", "2", "3");

        let err = submit(&service, &mut tracker, &input).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), INVALID_FEATURES_MESSAGE);
        assert_eq!(tracker.state(), SubmissionState::Idle);
        assert_eq!(tracker.last_error(), Some(INVALID_FEATURES_MESSAGE));
    }

    #[tokio::test]
    async fn test_request_failure_restores_idle() {
        let mut mock = MockPredictionProvider::new();
        mock.expect_predict()
            .times(1)
            .returning(|_| Err(RequestError::network("connection refused")));

        let service = SubmissionService::new(Arc::new(mock));
        let mut tracker = SubmissionTracker::new();

        let err = submit(&service, &mut tracker, &valid_input()).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::Request(RequestError::network("connection refused"))
        );
        assert!(!tracker.is_busy());
        assert_eq!(tracker.last_error(), Some("Network error: connection refused"));
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let mut mock = MockPredictionProvider::new();
        let mut calls = 0;
        mock.expect_predict().times(2).returning(move |features| {
            calls += 1;
            if calls == 1 {
                Err(RequestError::status(500, "Internal Server Error"))
            } else {
                Ok(PredictionResult::new(0.25, *features))
            }
        });

        let service = SubmissionService::new(Arc::new(mock));
        let mut tracker = SubmissionTracker::new();

        assert_err!(submit(&service, &mut tracker, &valid_input()).await);
        assert!(tracker.last_error().is_some());

        let result = assert_ok!(submit(&service, &mut tracker, &valid_input()).await);
        assert_eq!(result.prediction, 0.25);
        assert_eq!(tracker.last_error(), None);
    }

    #[tokio::test]
    async fn test_submit_rejected_while_busy() {
        let mut mock = MockPredictionProvider::new();
        mock.expect_predict().times(0);

        let service = SubmissionService::new(Arc::new(mock));
        let mut tracker = SubmissionTracker::new();
        tracker.begin().unwrap();
        tracker.start_request().unwrap();

        let err = submit(&service, &mut tracker, &valid_input()).await.unwrap_err();

        assert_eq!(err, DomainError::busy(SubmissionState::Requesting));
        assert_eq!(tracker.state(), SubmissionState::Requesting);
    }

    #[tokio::test]
    async fn test_same_input_twice_yields_equal_results() {
        let mut mock = MockPredictionProvider::new();
        mock.expect_predict().times(2).returning(|features| {
            let prediction = features.feature1() * 0.5 + features.feature3();
            Ok(PredictionResult::new(prediction, *features))
        });

        let service = SubmissionService::new(Arc::new(mock));
        let mut tracker = SubmissionTracker::new();

        let first = submit(&service, &mut tracker, &valid_input()).await.unwrap();
        let second = submit(&service, &mut tracker, &valid_input()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let provider = SlowProvider {
            delay: Duration::from_secs(10),
        };
        let service = SubmissionService::with_config(
            Arc::new(provider),
            SubmissionServiceConfig::with_timeout(Duration::from_millis(50)),
        );
        let mut tracker = SubmissionTracker::new();

        let err = submit(&service, &mut tracker, &valid_input()).await.unwrap_err();

        assert_eq!(err, DomainError::Request(RequestError::timeout(50)));
        assert_eq!(tracker.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_cancel_in_flight_request() {
        let provider = SlowProvider {
            delay: Duration::from_secs(10),
        };
        let service = SubmissionService::new(Arc::new(provider));
        let mut tracker = SubmissionTracker::new();
        let input = valid_input();
        let (handle, signal) = cancellation();

        let (result, _) = tokio::join!(service.submit(&mut tracker, &input, signal), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.cancel();
        });

        assert_eq!(
            result.unwrap_err(),
            DomainError::Request(RequestError::Cancelled)
        );
        assert_eq!(tracker.state(), SubmissionState::Idle);
        assert_eq!(tracker.last_error(), Some("Request cancelled"));
    }

    #[tokio::test]
    async fn test_model_info_timeout() {
        let provider = SlowProvider {
            delay: Duration::from_secs(10),
        };
        let service = SubmissionService::with_config(
            Arc::new(provider),
            SubmissionServiceConfig::with_timeout(Duration::from_millis(20)),
        );

        let err = service.model_info().await.unwrap_err();
        assert_eq!(err, DomainError::Request(RequestError::timeout(20)));
    }
}
