use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::client::GeminiClient;
use crate::config::Config;
use crate::discovery::ModelCatalog;
use crate::generator::PlanGenerator;
use crate::plan::{GoalSpec, Language, Plan, PlanWindow, Priority};
use crate::prompt::build_prompt;

use super::args::{Cli, Command, PlanArgs};

pub(crate) async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Command::Plan(args) => handle_plan(args, &config).await,
        Command::Models => handle_models(&config).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "stride=debug" } else { "stride=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn handle_plan(args: PlanArgs, config: &Config) -> Result<()> {
    let target_date = NaiveDate::parse_from_str(&args.target_date, "%Y-%m-%d").with_context(
        || format!("Invalid target date '{}', expected yyyy-mm-dd", args.target_date),
    )?;
    let language = args.language.parse::<Language>()?;

    if !(1..=5).contains(&args.importance) {
        bail!("--importance must be between 1 and 5");
    }
    if !(1..=5).contains(&args.effort) {
        bail!("--effort must be between 1 and 5");
    }

    let today = Local::now().date_naive();
    let days_until_target = (target_date - today).num_days();
    if days_until_target <= 0 {
        bail!("Target date must be in the future");
    }

    let goal = GoalSpec {
        title: args.title,
        description: args.description,
        importance_level: args.importance,
        effort_estimated: args.effort,
    };

    let client = GeminiClient::new(&config.gemini)?;
    let catalog = Arc::new(ModelCatalog::new(
        client.clone(),
        Duration::from_secs(config.discovery.cache_ttl_secs),
    ));
    let generator = PlanGenerator::new(client, catalog, config.gemini.default_model.clone());

    println!("🎯 {} ({} days until {})", goal.title.bold(), days_until_target, target_date);

    let prompt = build_prompt(&goal, target_date, days_until_target, language);
    let raw = generator.generate(&prompt).await?;

    let window = PlanWindow {
        start: today,
        end: target_date,
    };
    let plan = Plan::from_model_json(&raw, &window)?;

    print_plan(&plan);
    Ok(())
}

async fn handle_models(config: &Config) -> Result<()> {
    let client = GeminiClient::new(&config.gemini)?;
    let catalog = ModelCatalog::new(
        client,
        Duration::from_secs(config.discovery.cache_ttl_secs),
    );

    let models = catalog.list_models().await?;
    if models.is_empty() {
        println!("No generation-capable models available.");
        return Ok(());
    }

    println!("🤖 Generation-capable models:");
    for model in models {
        println!("  • {model}");
    }
    Ok(())
}

fn print_plan(plan: &Plan) {
    if !plan.milestones.is_empty() {
        println!("\n{}", "Milestones".bold());
        for milestone in &plan.milestones {
            println!(
                "  {}. {} - {}",
                milestone.order_sequence,
                milestone.title.green(),
                milestone.description
            );
        }
    }

    if !plan.tasks.is_empty() {
        println!("\n{}", "Tasks".bold());
        for task in &plan.tasks {
            println!(
                "  {}. [{}] {} ({} min, due {})",
                task.order_sequence,
                priority_label(task.priority),
                task.title,
                task.estimated_duration,
                task.due_date
            );
            if let Some(prerequisites) = &task.prerequisites {
                if !prerequisites.is_empty() {
                    println!("       requires: {}", prerequisites.join(", "));
                }
            }
        }
    }

    println!(
        "\n✅ {} milestones, {} tasks",
        plan.milestone_count(),
        plan.task_count()
    );
}

fn priority_label(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => "high".red(),
        Priority::Medium => "medium".yellow(),
        Priority::Low => "low".blue(),
    }
}
