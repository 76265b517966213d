//! Domain Layer
//!
//! Pure command building and script assembly. The only I/O here is the
//! local existence check a push performs before rendering.
//!
//! ## Structure
//!
//! - `value_objects/` - validated values (TaskName, HostName, EnvVars)
//! - `templates` - push / exec / clean shell templates
//! - `sanitize` - advisory scan of exec command text
//! - `entities/` - Task, HostTarget, GeneratedFile
//! - `script` - run / clean script assembly
//! - `ports/` - interfaces implemented by infrastructure

pub mod entities;
pub mod ports;
pub mod sanitize;
pub mod script;
pub mod templates;
pub mod value_objects;
