//! CLI command implementations.
//!
//! Each submodule owns one or more `Commands` variants:
//!
//! | Module   | Commands handled |
//! |----------|------------------|
//! | `run`    | `Run`            |
//! | `status` | `Status`, `Next` |

pub mod run;
pub mod status;

pub use run::cmd_run;
pub use status::{cmd_next, cmd_status};
