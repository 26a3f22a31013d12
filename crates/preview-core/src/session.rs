use crate::cancellation::CancellationToken;
use crate::config::PreviewTuning;
use crate::layout::{PageLayout, PageRect};
use crate::navigation::{JumpRequest, NavigationController};
use crate::policy::PreviewAccess;
use crate::scroll::{ScrollSample, ScrollTracker};
use crate::timer::Timer;
use crate::zoom::ZoomController;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Where the document behind an open session is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        timeout: Timer,
    },
    Ready,
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Closed,
    Loading,
    Ready,
    Failed,
}

/// Observable state for rendering the preview.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreviewSnapshot {
    pub is_open: bool,
    pub status: LoadStatus,
    pub error: Option<String>,
    pub current_page: u32,
    pub pending_page_input: String,
    pub visible_page_limit: u32,
    pub total_page_count: Option<u32>,
    pub scroll_progress_percent: u8,
    pub scale: f32,
    pub page_width: f32,
    pub nav_mode: &'static str,
    pub is_limited_preview: bool,
}

/// Vertical offset the host should scroll its page column to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub page: u32,
    pub offset_y: f32,
}

#[derive(Debug, Clone)]
pub enum SessionCommand {
    GetSnapshot,
    Open,
    Close,
    NextPage,
    PrevPage,
    GoToPage { page: i64 },
    SetPageInput { text: String },
    SubmitPageInput,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    SetZoom { scale: f32 },
}

impl SessionCommand {
    pub fn action(&self) -> &'static str {
        match self {
            Self::GetSnapshot => "preview_get_snapshot",
            Self::Open => "preview_open",
            Self::Close => "preview_close",
            Self::NextPage => "preview_next_page",
            Self::PrevPage => "preview_prev_page",
            Self::GoToPage { .. } => "preview_go_to_page",
            Self::SetPageInput { .. } => "preview_set_page_input",
            Self::SubmitPageInput => "preview_submit_page_input",
            Self::ZoomIn => "preview_zoom_in",
            Self::ZoomOut => "preview_zoom_out",
            Self::ResetZoom => "preview_reset_zoom",
            Self::SetZoom { .. } => "preview_set_zoom",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub action: &'static str,
    pub snapshot: PreviewSnapshot,
    pub scroll_request: Option<ScrollRequest>,
}

/// One open instance of the document preview.
///
/// Owns the navigation controller, scroll tracker and zoom controller, plus
/// every timer they use. Closing the session (explicitly or by dropping it)
/// cancels all of them along with the loader's token. Document callbacks
/// carrying an old generation are ignored, and nothing but `open()` changes
/// a closed session.
#[derive(Debug)]
pub struct PreviewSession {
    tuning: PreviewTuning,
    layout: PageLayout,
    access: PreviewAccess,
    is_open: bool,
    generation: u64,
    load: LoadState,
    loader: Option<CancellationToken>,
    total_pages: Option<u32>,
    visible_limit: u32,
    nav: NavigationController,
    scroll: ScrollTracker,
    zoom: ZoomController,
}

impl PreviewSession {
    pub fn new(tuning: PreviewTuning, layout: PageLayout, access: PreviewAccess) -> Self {
        Self {
            tuning: tuning.sanitized(),
            layout: layout.sanitized(),
            access,
            is_open: false,
            generation: 0,
            load: LoadState::Idle,
            loader: None,
            total_pages: None,
            visible_limit: 0,
            nav: NavigationController::new(),
            scroll: ScrollTracker::new(),
            zoom: ZoomController::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn current_page(&self) -> u32 {
        self.nav.current_page()
    }

    pub fn pending_page_input(&self) -> &str {
        self.nav.pending_input()
    }

    pub fn total_page_count(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn visible_page_limit(&self) -> u32 {
        self.visible_limit
    }

    pub fn scroll_progress_percent(&self) -> u8 {
        self.scroll.progress_percent()
    }

    pub fn most_visible_candidate(&self) -> Option<u32> {
        self.scroll.candidate()
    }

    pub fn scale(&self) -> f32 {
        self.zoom.scale()
    }

    pub fn page_width(&self) -> f32 {
        self.zoom.page_width()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn access(&self) -> PreviewAccess {
        self.access
    }

    pub fn is_programmatic_jump(&self) -> bool {
        self.nav.is_programmatic()
    }

    /// Start a session and wait for the document. Returns the generation the
    /// loader must echo back. Opening an open session starts over.
    pub fn open(&mut self, now: Instant) -> u64 {
        if self.is_open {
            self.close();
        }
        self.nav.reset();
        self.scroll.reset();
        self.zoom.reset();
        self.is_open = true;
        self.generation = self.generation.wrapping_add(1);
        self.loader = Some(CancellationToken::for_generation(self.generation));
        let mut timeout = Timer::new();
        timeout.arm(now, self.tuning.load_timeout());
        self.load = LoadState::Loading { timeout };
        info!(generation = self.generation, "Preview opened");
        self.generation
    }

    /// Token for the load the current generation is waiting on.
    pub fn load_token(&self) -> Option<CancellationToken> {
        self.loader.clone()
    }

    /// Loader success callback. Returns false when the result was discarded.
    pub fn on_document_loaded(&mut self, generation: u64, page_count: u32) -> bool {
        if !self.accepts_load_result(generation) {
            debug!(generation, page_count, "Discarded stale document load");
            return false;
        }
        self.loader = None;
        if page_count == 0 {
            self.fail_load("document contains no pages".to_string());
            return true;
        }
        self.total_pages = Some(page_count);
        self.visible_limit = self.access.limit_for(page_count);
        self.nav.reset();
        self.load = LoadState::Ready;
        info!(
            generation,
            total_pages = page_count,
            visible_limit = self.visible_limit,
            available_online = self.access.available_online,
            "Preview document loaded"
        );
        true
    }

    /// Loader failure callback. No automatic retry; reopening retries.
    pub fn on_document_error(&mut self, generation: u64, reason: impl Into<String>) -> bool {
        if !self.accepts_load_result(generation) {
            debug!(generation, "Discarded stale document error");
            return false;
        }
        self.loader = None;
        self.fail_load(reason.into());
        true
    }

    /// Tear the session down. Safe to call any number of times.
    pub fn close(&mut self) {
        if !self.is_open && matches!(self.load, LoadState::Idle) {
            return;
        }
        self.cancel_loader();
        self.is_open = false;
        self.load = LoadState::Idle;
        self.total_pages = None;
        self.visible_limit = 0;
        self.nav.reset();
        self.scroll.reset();
        self.zoom.reset();
        info!(generation = self.generation, "Preview closed");
    }

    pub fn on_scroll(&mut self, sample: ScrollSample, now: Instant) {
        if !self.is_open {
            return;
        }
        self.scroll.on_scroll(sample, now, self.tuning.scroll_debounce());
    }

    /// Window width change. Debounced while open; applied directly otherwise
    /// so a closed session never holds an armed timer.
    pub fn on_resize(&mut self, viewport_width: f32, now: Instant) {
        if !self.is_open {
            self.zoom.set_viewport_width(viewport_width);
            return;
        }
        self.zoom.on_resize(viewport_width, now, self.tuning.resize_debounce());
    }

    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.zoom.set_viewport_width(viewport_width);
    }

    /// Fire whatever timers are due. May ask the host to re-anchor the
    /// current page after a committed resize.
    pub fn tick(&mut self, now: Instant) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }

        let timed_out = match &mut self.load {
            LoadState::Loading { timeout } => timeout.fire_if_due(now),
            _ => false,
        };
        if timed_out {
            let reason = format!(
                "document did not finish loading within {:.0} s",
                self.tuning.load_timeout().as_secs_f32()
            );
            warn!(generation = self.generation, "Preview load timed out");
            self.fail_load(reason);
        }

        let mut request = None;
        if self.zoom.settle_resize(now) && self.is_ready() {
            request = Some(self.scroll_request_for(self.nav.current_page()));
        }

        if let Some(sample) = self.scroll.take_settled(now) {
            if self.is_ready() {
                let rects = self.page_rects();
                if let Some(candidate) = self.scroll.evaluate(&sample, &rects) {
                    self.nav.accept_scroll_candidate(
                        candidate,
                        self.visible_limit,
                        self.tuning.min_visible_overlap_px,
                    );
                }
            }
        }

        self.nav.settle(now);
        request
    }

    pub fn go_to_page(&mut self, page: i64, now: Instant) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }
        let jump = self
            .nav
            .go_to_page(page, self.visible_limit, now, self.tuning.jump_settle());
        self.jump_to_scroll(jump)
    }

    pub fn next_page(&mut self, now: Instant) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }
        let jump = self
            .nav
            .next_page(self.visible_limit, now, self.tuning.jump_settle());
        self.jump_to_scroll(jump)
    }

    pub fn prev_page(&mut self, now: Instant) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }
        let jump = self
            .nav
            .prev_page(self.visible_limit, now, self.tuning.jump_settle());
        self.jump_to_scroll(jump)
    }

    pub fn set_page_input(&mut self, text: impl Into<String>) {
        if !self.is_open {
            return;
        }
        self.nav.set_input(text);
    }

    pub fn submit_page_input(&mut self, now: Instant) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }
        let jump = self
            .nav
            .submit_input(self.visible_limit, now, self.tuning.jump_settle());
        self.jump_to_scroll(jump)
    }

    pub fn zoom_in(&mut self) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }
        self.zoom.zoom_in();
        self.anchor_current_page()
    }

    pub fn zoom_out(&mut self) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }
        self.zoom.zoom_out();
        self.anchor_current_page()
    }

    pub fn reset_zoom(&mut self) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }
        self.zoom.reset_zoom();
        self.anchor_current_page()
    }

    /// Set the scale directly; clamped and snapped like the step buttons.
    pub fn set_zoom(&mut self, scale: f32) -> Option<ScrollRequest> {
        if !self.is_open {
            return None;
        }
        self.zoom.set_scale(scale);
        self.anchor_current_page()
    }

    /// Boxes of the pages this session renders, at the current page width.
    pub fn page_rects(&self) -> Vec<PageRect> {
        self.layout.page_rects(self.visible_limit, self.zoom.page_width())
    }

    pub fn content_height(&self) -> f32 {
        self.layout.content_height(self.visible_limit, self.zoom.page_width())
    }

    pub fn has_pending_timers(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Earliest armed timer across all owned concerns.
    pub fn next_deadline(&self) -> Option<Instant> {
        let load = match &self.load {
            LoadState::Loading { timeout } => timeout.deadline(),
            _ => None,
        };
        [
            load,
            self.zoom.deadline(),
            self.scroll.deadline(),
            self.nav.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        let (status, error) = if !self.is_open {
            (LoadStatus::Closed, None)
        } else {
            match &self.load {
                LoadState::Idle | LoadState::Loading { .. } => (LoadStatus::Loading, None),
                LoadState::Ready => (LoadStatus::Ready, None),
                LoadState::Failed { reason } => (LoadStatus::Failed, Some(reason.clone())),
            }
        };
        PreviewSnapshot {
            is_open: self.is_open,
            status,
            error,
            current_page: self.nav.current_page(),
            pending_page_input: self.nav.pending_input().to_string(),
            visible_page_limit: self.visible_limit,
            total_page_count: self.total_pages,
            scroll_progress_percent: self.scroll.progress_percent(),
            scale: self.zoom.scale(),
            page_width: self.zoom.page_width(),
            nav_mode: self.nav.mode().label(),
            is_limited_preview: self
                .total_pages
                .map(|total| self.visible_limit < total)
                .unwrap_or(false),
        }
    }

    pub fn apply_command(&mut self, command: SessionCommand, now: Instant) -> SessionEvent {
        let action = command.action();
        let scroll_request = match command {
            SessionCommand::GetSnapshot => None,
            SessionCommand::Open => {
                self.open(now);
                None
            }
            SessionCommand::Close => {
                self.close();
                None
            }
            SessionCommand::NextPage => self.next_page(now),
            SessionCommand::PrevPage => self.prev_page(now),
            SessionCommand::GoToPage { page } => self.go_to_page(page, now),
            SessionCommand::SetPageInput { text } => {
                self.set_page_input(text);
                None
            }
            SessionCommand::SubmitPageInput => self.submit_page_input(now),
            SessionCommand::ZoomIn => self.zoom_in(),
            SessionCommand::ZoomOut => self.zoom_out(),
            SessionCommand::ResetZoom => self.reset_zoom(),
            SessionCommand::SetZoom { scale } => self.set_zoom(scale),
        };
        SessionEvent {
            action,
            snapshot: self.snapshot(),
            scroll_request,
        }
    }

    fn is_ready(&self) -> bool {
        matches!(self.load, LoadState::Ready)
    }

    fn accepts_load_result(&self, generation: u64) -> bool {
        self.is_open
            && generation == self.generation
            && matches!(self.load, LoadState::Loading { .. })
    }

    fn fail_load(&mut self, reason: String) {
        warn!(generation = self.generation, %reason, "Preview document failed to load");
        self.cancel_loader();
        self.total_pages = None;
        self.visible_limit = 0;
        self.load = LoadState::Failed { reason };
    }

    fn cancel_loader(&mut self) {
        if let Some(token) = self.loader.take() {
            debug!(generation = token.generation(), "Cancelling document loader");
            token.cancel();
        }
    }

    fn jump_to_scroll(&self, jump: Option<JumpRequest>) -> Option<ScrollRequest> {
        jump.map(|jump| self.scroll_request_for(jump.page))
    }

    fn anchor_current_page(&self) -> Option<ScrollRequest> {
        if self.is_open && self.is_ready() {
            Some(self.scroll_request_for(self.nav.current_page()))
        } else {
            None
        }
    }

    fn scroll_request_for(&self, page: u32) -> ScrollRequest {
        ScrollRequest {
            page,
            offset_y: self.layout.page_top(page, self.zoom.page_width()) - self.layout.padding_px,
        }
    }
}

impl Drop for PreviewSession {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_access() -> PreviewAccess {
        PreviewAccess {
            available_online: false,
            preview_pages: None,
        }
    }

    fn layout() -> PageLayout {
        PageLayout {
            aspect_ratio: 1.5,
            gap_px: 0.0,
            padding_px: 0.0,
        }
    }

    /// Session with 45 pages loaded; page width 560 => page height 840.
    fn loaded_session(now: Instant) -> PreviewSession {
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        session.set_viewport_width(800.0);
        let generation = session.open(now);
        assert!(session.on_document_loaded(generation, 45));
        session
    }

    fn sample_at(scroll_top: f32) -> ScrollSample {
        ScrollSample {
            scroll_top,
            client_height: 600.0,
            scroll_height: 20.0 * 840.0,
        }
    }

    #[test]
    fn offline_book_is_limited_to_twenty_pages() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        assert_eq!(session.visible_page_limit(), 20);
        assert_eq!(session.total_page_count(), Some(45));

        assert!(session.go_to_page(25, now).is_none());
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.pending_page_input(), "1");

        let request = session.go_to_page(20, now).expect("page 20 is visible");
        assert_eq!(session.current_page(), 20);
        assert_eq!(request.offset_y, 19.0 * 840.0);
        assert!(session.snapshot().is_limited_preview);
    }

    #[test]
    fn scroll_inside_jump_window_is_ignored() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        session.go_to_page(10, now);

        // Scroll lands squarely on page 3 while the jump is still settling.
        session.on_scroll(sample_at(2.0 * 840.0), now + Duration::from_millis(10));
        session.tick(now + Duration::from_millis(400));
        assert_eq!(session.most_visible_candidate(), Some(3));
        assert_eq!(session.current_page(), 10);
        assert!(session.is_programmatic_jump());

        session.tick(now + Duration::from_millis(900));
        assert!(!session.is_programmatic_jump());
        assert_eq!(session.current_page(), 10);
    }

    #[test]
    fn settled_scroll_updates_page_and_input() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        session.on_scroll(sample_at(4.0 * 840.0 + 100.0), now);

        session.tick(now + Duration::from_millis(299));
        assert_eq!(session.current_page(), 1);

        session.tick(now + Duration::from_millis(300));
        assert_eq!(session.current_page(), 5);
        assert_eq!(session.pending_page_input(), "5");
    }

    #[test]
    fn small_overlaps_do_not_commit() {
        let now = Instant::now();
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        session.set_viewport_width(800.0);
        let generation = session.open(now);
        session.on_document_loaded(generation, 45);

        // A 150px-tall window straddling pages 1 and 2: 80px of page 1, 70px of page 2.
        let sample = ScrollSample {
            scroll_top: 760.0,
            client_height: 150.0,
            scroll_height: 20.0 * 840.0,
        };
        session.go_to_page(2, now);
        session.tick(now + Duration::from_secs(1));
        session.on_scroll(sample, now + Duration::from_secs(1));
        session.tick(now + Duration::from_secs(2));
        assert_eq!(session.most_visible_candidate(), Some(1));
        assert_eq!(session.current_page(), 2);
    }

    #[test]
    fn invalid_input_is_absorbed() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        session.set_page_input("abc");
        assert!(session.submit_page_input(now).is_none());
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.pending_page_input(), "1");

        session.set_page_input("7");
        assert!(session.submit_page_input(now).is_some());
        assert_eq!(session.current_page(), 7);
    }

    #[test]
    fn close_then_open_matches_fresh_session() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        session.go_to_page(12, now);
        session.zoom_in();
        session.on_scroll(sample_at(1500.0), now);
        assert!(session.scroll_progress_percent() > 0);

        session.close();
        session.close();
        assert!(!session.has_pending_timers());
        session.open(now);

        let mut fresh = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        fresh.set_viewport_width(800.0);
        fresh.open(now);
        assert_eq!(session.snapshot(), fresh.snapshot());
    }

    #[test]
    fn closed_session_ignores_zoom_and_input() {
        let now = Instant::now();
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        session.set_viewport_width(800.0);
        let generation = session.open(now);
        session.on_document_loaded(generation, 30);
        session.close();

        assert!(session.zoom_in().is_none());
        assert!(session.set_zoom(2.0).is_none());
        session.set_page_input("abc");
        assert!(session.go_to_page(3, now).is_none());
        assert!(session.submit_page_input(now).is_none());
        assert_eq!(session.scale(), 1.0);
        assert_eq!(session.pending_page_input(), "1");

        session.close();
        session.open(now);
        let mut fresh = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        fresh.set_viewport_width(800.0);
        fresh.open(now);
        assert_eq!(session.snapshot(), fresh.snapshot());
    }

    #[test]
    fn closed_session_arms_no_timers() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        session.close();

        session.on_scroll(sample_at(3000.0), now);
        session.on_resize(1200.0, now);
        assert!(!session.has_pending_timers());
        assert_eq!(session.scroll_progress_percent(), 0);
        assert!(session.tick(now + Duration::from_secs(5)).is_none());

        // The window width is still tracked for the next open.
        session.open(now);
        assert_eq!(session.page_width(), 720.0);
    }

    #[test]
    fn close_cancels_every_armed_timer() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        session.go_to_page(4, now);
        session.on_scroll(sample_at(900.0), now);
        session.on_resize(1200.0, now);
        assert!(session.has_pending_timers());

        session.close();
        assert!(!session.has_pending_timers());
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn dropping_open_session_cancels_loader() {
        let now = Instant::now();
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        session.open(now);
        let token = session.load_token().expect("loading session has a token");
        assert!(!token.is_cancelled());

        drop(session);
        assert!(token.is_cancelled());
    }

    #[test]
    fn reopening_cancels_previous_loader() {
        let now = Instant::now();
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        let first = session.open(now);
        let first_token = session.load_token().expect("first token");
        let second = session.open(now);
        let second_token = session.load_token().expect("second token");

        assert!(first_token.is_cancelled());
        assert_eq!(first_token.generation(), first);
        assert!(!second_token.is_cancelled());
        assert_eq!(second_token.generation(), second);

        assert!(session.on_document_loaded(second, 5));
        assert!(session.load_token().is_none());
        assert!(!second_token.is_cancelled());
    }

    #[test]
    fn load_timeout_cancels_loader() {
        let now = Instant::now();
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        session.open(now);
        let token = session.load_token().expect("token");
        session.tick(now + Duration::from_secs(20));
        assert!(token.is_cancelled());
        assert!(session.load_token().is_none());
    }

    #[test]
    fn stale_and_late_callbacks_are_noops() {
        let now = Instant::now();
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        let first = session.open(now);
        let second = session.open(now);
        assert!(!session.on_document_loaded(first, 10));
        assert!(session.on_document_loaded(second, 10));

        session.close();
        assert!(!session.on_document_error(second, "late"));
        assert!(session.tick(now + Duration::from_secs(60)).is_none());
        assert_eq!(session.snapshot().status, LoadStatus::Closed);
    }

    #[test]
    fn load_times_out_into_failure() {
        let now = Instant::now();
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        let generation = session.open(now);
        session.tick(now + Duration::from_secs(19));
        assert_eq!(session.snapshot().status, LoadStatus::Loading);

        session.tick(now + Duration::from_secs(20));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, LoadStatus::Failed);
        assert!(snapshot.error.is_some());
        assert!(!session.on_document_loaded(generation, 10));
    }

    #[test]
    fn empty_document_fails() {
        let now = Instant::now();
        let mut session = PreviewSession::new(PreviewTuning::default(), layout(), offline_access());
        let generation = session.open(now);
        session.on_document_loaded(generation, 0);
        assert_eq!(session.snapshot().status, LoadStatus::Failed);
        assert_eq!(session.visible_page_limit(), 0);
    }

    #[test]
    fn committed_resize_reanchors_current_page() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        session.go_to_page(3, now);
        session.tick(now + Duration::from_secs(1));

        session.on_resize(1200.0, now + Duration::from_secs(1));
        let request = session
            .tick(now + Duration::from_millis(1300))
            .expect("resize re-anchors");
        assert_eq!(request.page, 3);
        assert_eq!(request.offset_y, 2.0 * 720.0 * 1.5);
    }

    #[test]
    fn command_dispatch_reports_action_and_snapshot() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        let event = session.apply_command(SessionCommand::NextPage, now);
        assert_eq!(event.action, "preview_next_page");
        assert_eq!(event.snapshot.current_page, 2);
        assert_eq!(event.snapshot.nav_mode, "programmatic");
        assert_eq!(event.scroll_request.map(|r| r.page), Some(2));

        let event = session.apply_command(SessionCommand::ZoomIn, now);
        assert_eq!(event.snapshot.scale, 1.2);

        let json = serde_json::to_value(&event.snapshot).expect("snapshot serializes");
        assert_eq!(json["status"], "ready");
        assert_eq!(json["visible_page_limit"], 20);
    }

    #[test]
    fn set_zoom_clamps_and_snaps() {
        let now = Instant::now();
        let mut session = loaded_session(now);
        let event = session.apply_command(SessionCommand::SetZoom { scale: 1.333 }, now);
        assert_eq!(event.action, "preview_set_zoom");
        assert_eq!(event.snapshot.scale, 1.33);
        assert_eq!(event.scroll_request.map(|r| r.page), Some(1));

        session.set_zoom(9.0);
        assert_eq!(session.scale(), 2.5);
        session.set_zoom(f32::NAN);
        assert_eq!(session.scale(), 2.5);
    }
}
