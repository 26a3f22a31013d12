//! Page navigation: the single authority over the current page.
//!
//! Scroll detection and explicit navigation both want to write the current
//! page. [`NavMode`] decides who may: after a button or page-number jump the
//! controller is `ProgrammaticDriven` until its settle timer fires, and scroll
//! candidates are refused for that whole window.

use crate::scroll::PageCandidate;
use crate::timer::Timer;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavMode {
    #[default]
    UserDriven,
    ProgrammaticDriven { settle: Timer },
}

impl NavMode {
    pub fn label(&self) -> &'static str {
        match self {
            NavMode::UserDriven => "user",
            NavMode::ProgrammaticDriven { .. } => "programmatic",
        }
    }
}

/// Page the host should bring to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpRequest {
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    current_page: u32,
    pending_input: String,
    mode: NavMode,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            pending_input: "1".to_string(),
            mode: NavMode::UserDriven,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn mode(&self) -> &NavMode {
        &self.mode
    }

    pub fn is_programmatic(&self) -> bool {
        matches!(self.mode, NavMode::ProgrammaticDriven { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match &self.mode {
            NavMode::ProgrammaticDriven { settle } => settle.deadline(),
            NavMode::UserDriven => None,
        }
    }

    /// Store raw page-number typing; the current page is untouched.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Jump to page `n` if it lies in `1..=limit`; otherwise reset the input box.
    pub fn go_to_page(
        &mut self,
        n: i64,
        limit: u32,
        now: Instant,
        settle_delay: Duration,
    ) -> Option<JumpRequest> {
        if n < 1 || n > i64::from(limit) {
            debug!(requested = n, limit, current = self.current_page, "Rejected page jump");
            self.reset_input();
            return None;
        }
        let page = n as u32;
        self.current_page = page;
        self.reset_input();
        let mut settle = Timer::new();
        settle.arm(now, settle_delay);
        self.mode = NavMode::ProgrammaticDriven { settle };
        info!(page, limit, "Programmatic page jump");
        Some(JumpRequest { page })
    }

    pub fn next_page(
        &mut self,
        limit: u32,
        now: Instant,
        settle_delay: Duration,
    ) -> Option<JumpRequest> {
        self.go_to_page(i64::from(self.current_page) + 1, limit, now, settle_delay)
    }

    pub fn prev_page(
        &mut self,
        limit: u32,
        now: Instant,
        settle_delay: Duration,
    ) -> Option<JumpRequest> {
        self.go_to_page(i64::from(self.current_page) - 1, limit, now, settle_delay)
    }

    /// Parse the pending input and jump to it. Garbage resets the input.
    pub fn submit_input(
        &mut self,
        limit: u32,
        now: Instant,
        settle_delay: Duration,
    ) -> Option<JumpRequest> {
        match self.pending_input.trim().parse::<i64>() {
            Ok(n) => self.go_to_page(n, limit, now, settle_delay),
            Err(_) => {
                debug!(input = %self.pending_input, "Rejected non-numeric page input");
                self.reset_input();
                None
            }
        }
    }

    /// Apply a scroll-detected page. Refused while a programmatic jump is
    /// settling, when unchanged, out of range, or not visible enough.
    pub fn accept_scroll_candidate(
        &mut self,
        candidate: PageCandidate,
        limit: u32,
        min_overlap_px: f32,
    ) -> bool {
        if self.is_programmatic()
            || candidate.page == self.current_page
            || candidate.page < 1
            || candidate.page > limit
            || candidate.overlap_px <= min_overlap_px
        {
            return false;
        }
        debug!(
            from = self.current_page,
            to = candidate.page,
            overlap_px = candidate.overlap_px,
            "Scroll-driven page change"
        );
        self.current_page = candidate.page;
        self.reset_input();
        true
    }

    /// Return scroll detection its authority once the jump has settled.
    pub fn settle(&mut self, now: Instant) -> bool {
        let settled = match &mut self.mode {
            NavMode::ProgrammaticDriven { settle } => settle.fire_if_due(now),
            NavMode::UserDriven => false,
        };
        if settled {
            self.mode = NavMode::UserDriven;
            debug!(page = self.current_page, "Programmatic jump settled");
        }
        settled
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn reset_input(&mut self) {
        self.pending_input = self.current_page.to_string();
    }
}
