//! Deterministic prompt construction for goal breakdown.
//!
//! Two language variants, selected by pure lookup. The prompt carries the
//! goal framing, the generation rules, and a literal JSON-shape example the
//! model must mimic; everything downstream assumes exactly this shape.

use chrono::NaiveDate;

use crate::plan::{GoalSpec, Language};

const NO_DESCRIPTION_EN: &str = "No description";
const NO_DESCRIPTION_PT: &str = "Sem descrição";

pub fn build_prompt(
    goal: &GoalSpec,
    target_date: NaiveDate,
    days_until_target: i64,
    language: Language,
) -> String {
    match language {
        Language::En => english_prompt(goal, target_date, days_until_target),
        Language::Pt => portuguese_prompt(goal, target_date, days_until_target),
    }
}

fn english_prompt(goal: &GoalSpec, target_date: NaiveDate, days_until_target: i64) -> String {
    let description = goal.description.as_deref().unwrap_or(NO_DESCRIPTION_EN);
    let deadline = target_date.format("%m/%d/%Y");

    format!(
        r#"As a planning expert, break the goal below into daily tasks.

GOAL: {title}
DESCRIPTION: {description}
DEADLINE: {days} days (until {deadline})
IMPORTANCE: {importance}/5
ESTIMATED EFFORT: {effort}/5

Rules:
- Balance tasks across {days} days.
- Each task MUST include due_date (yyyy-mm-dd) between today and the deadline.
- priority must be "high" | "medium" | "low".
- estimated_duration in minutes (> 0).
- Include milestones around 25/50/75/100%.

Respond ONLY with valid JSON:
{{
  "milestones": [{{"title":"Milestone 1 (25%)","description":"...","order_sequence":1}}],
  "tasks": [{{
    "title":"...","description":"...","priority":"high|medium|low",
    "estimated_duration":60,"due_date":"2025-12-01","prerequisites":["..."],"order_sequence":1
  }}]
}}
"#,
        title = goal.title,
        description = description,
        days = days_until_target,
        deadline = deadline,
        importance = goal.importance_level,
        effort = goal.effort_estimated,
    )
}

fn portuguese_prompt(goal: &GoalSpec, target_date: NaiveDate, days_until_target: i64) -> String {
    let description = goal.description.as_deref().unwrap_or(NO_DESCRIPTION_PT);
    let deadline = target_date.format("%d/%m/%Y");

    format!(
        r#"Como especialista em planejamento, quebre a meta abaixo em tarefas diárias.

META: {title}
DESCRIÇÃO: {description}
PRAZO: {days} dias (até {deadline})
IMPORTÂNCIA: {importance}/5
ESFORÇO ESTIMADO: {effort}/5

Regras:
- Distribua o plano ao longo dos {days} dias.
- Toda tarefa DEVE ter due_date no formato yyyy-mm-dd entre hoje e o prazo.
- priority: "high" | "medium" | "low" (minúsculas).
- estimated_duration em minutos (> 0).
- Inclua marcos em ~25/50/75/100%.

Responda APENAS com JSON válido:
{{
  "milestones": [{{"title":"Marco 1 (25%)","description":"...","order_sequence":1}}],
  "tasks": [{{
    "title":"...","description":"...","priority":"high|medium|low",
    "estimated_duration":60,"due_date":"2025-12-01","prerequisites":["..."],"order_sequence":1
  }}]
}}
"#,
        title = goal.title,
        description = description,
        days = days_until_target,
        deadline = deadline,
        importance = goal.importance_level,
        effort = goal.effort_estimated,
    )
}
