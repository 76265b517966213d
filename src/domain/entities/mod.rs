//! Domain Entities
//!
//! - `Task` - immutable per-host list of rendered remote commands
//! - `HostTarget` - a task plus the artifacts and entry command for one host
//! - `GeneratedFile` - a script or data file to be written locally

mod generated_file;
mod host_target;
mod task;

pub use generated_file::GeneratedFile;
pub use host_target::{HostTarget, InvocationTemplate};
pub use task::{RenderedCommand, Task, DEFAULT_SUPERVISOR};
