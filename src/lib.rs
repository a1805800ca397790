//! Construction workflow scheduling.
//!
//! Turns a project descriptor (type, square footage, complexity tier) into a
//! sequenced construction workflow: the task list for the project type,
//! predecessor edges from declarative sequencing rules, parametric day
//! estimates, dependency waves, the critical path, and the compression
//! gained by running same-wave tasks with separate crews.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `ProjectRequest`, `Timeline`,
//!   `Workflow`, `Phase`
//! - **`catalog`**: Task lists per project type with a generic fallback
//! - **`rules`**: Task → predecessor rule table
//! - **`estimator`**: `max(1, ceil((base + per_sq_ft × area) × multiplier))`
//! - **`graph`**: Attaches rule edges to a project's task list
//! - **`analysis`**: Levels, parallel groups, durations, critical path, CPM
//! - **`phases`**: Presentation grouping of tasks
//! - **`config`**: Validated, immutable engine configuration (TOML)
//! - **`validation`**: Configuration checks, including rule-cycle detection
//! - **`engine`**: `WorkflowEngine`, the end-to-end pipeline
//!
//! # Example
//!
//! ```
//! use u_construct::WorkflowEngine;
//!
//! let engine = WorkflowEngine::builtin().unwrap();
//! let workflow = engine.generate_for("home-addition", 1000.0, "medium").unwrap();
//!
//! assert_eq!(workflow.timeline.level_of("foundation-footings"), Some(0));
//! assert!(workflow.optimized_duration() < workflow.standard_duration());
//! ```
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - RSMeans, "Building Construction Costs" (crew-day productivity tables)

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod graph;
pub mod models;
pub mod phases;
pub mod rules;
pub mod validation;

pub use config::EngineConfig;
pub use engine::WorkflowEngine;
pub use error::{AnalysisError, Result, WorkflowError};
pub use models::{Complexity, ProjectRequest, Task, Timeline, Workflow};
