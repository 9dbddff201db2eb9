// NOTE: CLI Architecture Rationale
//
// Why a CLI at all, for a pure engine?
// - The engine deliberately owns no I/O: it takes an in-memory collection
//   plus a facet selection and returns fresh values. Something has to play
//   the caller. In production that is the dashboard UI; here it is this
//   binary, which keeps the same contract (load once, evaluate per query).
// - Keeping load/parse/render concerns out of the engine means a malformed
//   export fails loudly here with file context, while the engine itself
//   never has an error path.

mod args;
mod commands;
mod handlers;
mod input;
mod output;

pub use args::{Cli, Commands, FacetArgs, OutputFormat};
pub use commands::run;
