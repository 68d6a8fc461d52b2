use crate::core::history::ResultHistory;
use crate::core::validator;
use crate::domain::model::{SpecificityInput, SpecificityResult};
use crate::domain::ports::Calculator;
use crate::utils::error::Result;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// Input failed validation; nothing was sent.
    Blocked,
    Recorded(SpecificityResult),
}

/// Guards submissions on validity, calls the calculator and records successes.
///
/// `submit` takes `&self`, so several submissions may be in flight at once.
/// Each one prepends its result when it completes, so the history reflects
/// arrival order rather than submission order.
pub struct RequestCoordinator<C: Calculator> {
    calculator: C,
    history: Mutex<ResultHistory>,
}

impl<C: Calculator> RequestCoordinator<C> {
    pub fn new(calculator: C) -> Self {
        Self::with_history(calculator, ResultHistory::new())
    }

    pub fn with_history(calculator: C, history: ResultHistory) -> Self {
        Self {
            calculator,
            history: Mutex::new(history),
        }
    }

    pub async fn submit(&self, input: SpecificityInput) -> Result<SubmitOutcome> {
        if !validator::validate(&input) {
            tracing::debug!("Submission blocked, input out of order: {:?}", input);
            return Ok(SubmitOutcome::Blocked);
        }

        tracing::debug!("Submitting {:?}", input);
        let output = match self.calculator.calculate(&input).await {
            Ok(output) => output,
            Err(e) => {
                tracing::error!("Calculation failed: {}", e);
                return Err(e);
            }
        };
        tracing::info!(
            "Host rank: {}, host index: {}",
            output.host_rank,
            output.host_index
        );

        let result = SpecificityResult::merge(input, output);
        let mut history = self.history.lock().await;
        history.push(result);
        tracing::debug!("History now holds {} results", history.len());

        Ok(SubmitOutcome::Recorded(result))
    }

    pub async fn history(&self) -> Vec<SpecificityResult> {
        self.history.lock().await.to_vec()
    }

    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }
}
