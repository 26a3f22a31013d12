//! Core state machine for the paginated document preview.
//!
//! Nothing in here touches a window or a clock. Every operation that depends
//! on time takes an explicit `now: Instant`, and the host decides when to
//! call [`PreviewSession::tick`]. That keeps the whole session testable
//! without a UI runtime.

pub mod cancellation;
pub mod config;
pub mod layout;
pub mod navigation;
pub mod policy;
pub mod scroll;
pub mod session;
pub mod timer;
pub mod zoom;

pub use cancellation::CancellationToken;
pub use config::PreviewTuning;
pub use layout::{PageLayout, PageRect, width_band};
pub use navigation::{JumpRequest, NavMode, NavigationController};
pub use policy::{DEFAULT_PREVIEW_PAGE_CAP, PreviewAccess, visible_page_limit};
pub use scroll::{
    PageCandidate, ScrollSample, ScrollTracker, most_visible_page, scroll_progress_percent,
};
pub use session::{
    LoadState, LoadStatus, PreviewSession, PreviewSnapshot, ScrollRequest, SessionCommand,
    SessionEvent,
};
pub use timer::Timer;
pub use zoom::ZoomController;
