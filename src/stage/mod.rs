//! Pipeline stages.
//!
//! Each stage is a free function taking the build context, its external
//! collaborator (when it has one), and the reporter. Compiler-level problems
//! are converted to log output inside the stage; only filesystem failures
//! outside the compiler boundary escape as `io::Error`.

mod bundle;
mod clean;
mod script;
mod style;

pub use bundle::bundle;
pub use clean::clean;
pub use script::{build_script, discover_sources};
pub use style::build_style;
