//! Plan data contracts and validation of raw model output.

mod types;

pub use types::{GoalSpec, Language, Milestone, Plan, PlanWindow, Priority, Task};

use crate::error::PlanParseError;

impl Plan {
    /// Parses the extracted JSON text into a plan and validates it as one
    /// atomic unit. A single malformed task fails the whole plan; nothing
    /// partially valid ever reaches a store.
    pub fn from_model_json(raw: &str, window: &PlanWindow) -> Result<Plan, PlanParseError> {
        let plan: Plan = serde_json::from_str(raw)?;
        plan.ensure_valid(window)?;
        Ok(plan)
    }

    fn ensure_valid(&self, window: &PlanWindow) -> Result<(), PlanParseError> {
        for task in &self.tasks {
            if task.estimated_duration == 0 {
                return Err(PlanParseError::NonPositiveDuration {
                    title: task.title.clone(),
                });
            }
            if task.due_date < window.start || task.due_date > window.end {
                return Err(PlanParseError::DueDateOutOfWindow {
                    title: task.title.clone(),
                    due_date: task.due_date,
                    start: window.start,
                    end: window.end,
                });
            }
        }
        Ok(())
    }

    pub fn milestone_count(&self) -> usize {
        self.milestones.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests;
