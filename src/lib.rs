//! Goal-to-plan generation pipeline.
//!
//! `stride` turns a goal description into a structured execution plan
//! (milestones plus dated tasks) by prompting a generative text model,
//! validating its output, and handing the validated plan to an atomic
//! persistence collaborator. The pipeline is resilient by construction:
//! model discovery is time-cached, generation falls back across an ordered
//! candidate list, and nothing unvalidated ever reaches a store.

pub mod cli;
pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod plan;
pub mod prompt;
pub mod service;
pub mod store;
