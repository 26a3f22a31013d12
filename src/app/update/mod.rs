use preview_core::ScrollRequest;
use std::path::PathBuf;

mod appearance;
mod core;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    ScrollTo(ScrollRequest),
    LoadDocument { path: PathBuf, generation: u64 },
    QuitSafely,
}
