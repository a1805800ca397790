//! Construction workflow domain models.
//!
//! Provides the data types exchanged between the catalog, the estimator,
//! the analyzer and the callers that render or price a workflow.
//!
//! # Domain Mappings
//!
//! | u-construct | General scheduling | Output document |
//! |-------------|--------------------|-----------------|
//! | Task | Activity | `tasks[]` |
//! | `Task::dependencies` | Precedence (AND-join) | `tasks[].dependencies` |
//! | Timeline | Schedule | `standard_duration`, `critical_path`, ... |
//! | PhaseGrouping | Report grouping | `phases` |

mod phase;
mod project;
mod task;
mod timeline;
mod workflow;

pub use phase::{Phase, PhaseGrouping};
pub use project::{normalize_project_type, ProjectRequest};
pub use task::{Complexity, EstimationMethod, Task, TaskCategory, TaskStatus};
pub use timeline::{CpmSchedule, TaskTiming, Timeline, TimelineSummary};
pub use workflow::{DroppedDependency, Workflow};
