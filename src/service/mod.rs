//! Orchestration of the plan-generation pipeline.

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::info;

use crate::error::ServiceError;
use crate::generator::PlanGenerator;
use crate::plan::{GoalSpec, Language, Plan, PlanWindow};
use crate::prompt::build_prompt;
use crate::store::{GoalStore, PersistedCounts};

/// Inbound plan-generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "goalId")]
    pub goal_id: String,
    pub goal: GoalSpec,
    #[serde(rename = "targetDate")]
    pub target_date: NaiveDate,
    #[serde(default)]
    pub language: Language,
}

/// Runs a request through compute-window → build-prompt → generate →
/// validate → resolve-owner → persist and returns the inserted counts.
///
/// The plan body itself is discarded after persistence; callers only ever
/// see the counts. Caller-input problems are rejected before any network
/// call is made.
pub struct PlanService<S> {
    generator: PlanGenerator,
    store: S,
}

impl<S: GoalStore> PlanService<S> {
    pub fn new(generator: PlanGenerator, store: S) -> Self {
        Self { generator, store }
    }

    /// Like [`generate`](Self::generate), but first checks that the goal id
    /// addressed by the caller matches the payload's `goalId`.
    pub async fn generate_for_goal(
        &self,
        goal_id: &str,
        request: &GenerateRequest,
    ) -> Result<PersistedCounts, ServiceError> {
        if goal_id != request.goal_id {
            return Err(ServiceError::GoalIdMismatch);
        }
        self.generate(request).await
    }

    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<PersistedCounts, ServiceError> {
        ensure_scale("importance_level", request.goal.importance_level)?;
        ensure_scale("effort_estimated", request.goal.effort_estimated)?;

        let today = Local::now().date_naive();
        let days_until_target = (request.target_date - today).num_days();
        if days_until_target <= 0 {
            return Err(ServiceError::TargetDateNotFuture);
        }

        let prompt = build_prompt(
            &request.goal,
            request.target_date,
            days_until_target,
            request.language,
        );

        let raw = self.generator.generate(&prompt).await?;

        let window = PlanWindow {
            start: today,
            end: request.target_date,
        };
        let plan = Plan::from_model_json(&raw, &window)?;

        let owner = self
            .store
            .goal_owner(&request.goal_id)
            .await?
            .ok_or_else(|| ServiceError::GoalNotFound {
                goal_id: request.goal_id.clone(),
            })?;

        info!(
            goal_id = %request.goal_id,
            milestones = plan.milestone_count(),
            tasks = plan.task_count(),
            "persisting generated plan"
        );
        let counts = self.store.persist_plan(&request.goal_id, &owner, &plan).await?;
        Ok(counts)
    }
}

fn ensure_scale(field: &'static str, value: u8) -> Result<(), ServiceError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(ServiceError::ScaleOutOfRange { field, value })
    }
}
