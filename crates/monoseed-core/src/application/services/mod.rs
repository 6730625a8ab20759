pub mod emitter;
pub mod project_tree;
pub mod setup_service;

pub use emitter::FileEmitter;
pub use project_tree::{ProjectTree, SERVICE_DIRS};
pub use setup_service::{SetupReport, SetupService};
