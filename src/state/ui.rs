// UI state - theme, toasts, announcements, accessibility flags

use std::time::{Duration, Instant};

use eframe::egui;

use crate::style::{self, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Info,
    Success,
    Error,
}

pub struct Notification {
    pub message: String,
    pub kind: NotifyKind,
    pub created: Instant,
}

impl Notification {
    fn timeout(&self) -> Duration {
        Duration::from_secs(match self.kind {
            NotifyKind::Info => style::MESSAGE_TIMEOUT_SECS,
            NotifyKind::Success => style::SUCCESS_TIMEOUT_SECS,
            NotifyKind::Error => style::ERROR_TIMEOUT_SECS,
        })
    }

    pub fn expired(&self) -> bool {
        self.created.elapsed() >= self.timeout()
    }
}

pub struct UiState {
    pub theme: Theme,
    pub notifications: Vec<Notification>,
    /// Screen-reader style announcement shown in the status bar.
    pub announcement: Option<(String, Instant)>,
    /// Set while the user navigates with Tab, cleared on pointer use.
    pub keyboard_navigation: bool,
    pub last_screen_size: egui::Vec2,
    pending_resize: Option<(egui::Vec2, Instant)>,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            notifications: Vec::new(),
            announcement: None,
            keyboard_navigation: false,
            last_screen_size: egui::Vec2::ZERO,
            pending_resize: None,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotifyKind) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created: Instant::now(),
        });
    }

    pub fn announce(&mut self, message: impl Into<String>) {
        self.announcement = Some((message.into(), Instant::now()));
    }

    pub fn expire_messages(&mut self) {
        self.notifications.retain(|n| !n.expired());
        if let Some((_, shown_at)) = &self.announcement {
            if shown_at.elapsed().as_secs() >= style::MESSAGE_TIMEOUT_SECS {
                self.announcement = None;
            }
        }
    }

    /// Debounced window-resize tracking; returns the settled size once the
    /// window has stopped changing for [`style::RESIZE_DEBOUNCE_MS`].
    pub fn track_resize(&mut self, size: egui::Vec2) -> Option<egui::Vec2> {
        if size != self.last_screen_size {
            self.last_screen_size = size;
            self.pending_resize = Some((size, Instant::now()));
            return None;
        }
        if let Some((settled, changed_at)) = self.pending_resize {
            if changed_at.elapsed() >= Duration::from_millis(style::RESIZE_DEBOUNCE_MS) {
                self.pending_resize = None;
                return Some(settled);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_carry_their_kind() {
        let mut ui = UiState::new(Theme::Dark);
        ui.notify("hola", NotifyKind::Success);
        ui.notify("error", NotifyKind::Error);
        assert_eq!(ui.notifications.len(), 2);
        assert_eq!(ui.notifications[0].kind, NotifyKind::Success);
        assert!(!ui.notifications[0].expired());
    }

    #[test]
    fn resize_reports_after_settling() {
        let mut ui = UiState::new(Theme::Dark);
        assert!(ui.track_resize(egui::vec2(800.0, 600.0)).is_none());
        // Same size again, but the debounce window has not elapsed yet.
        assert!(ui.track_resize(egui::vec2(800.0, 600.0)).is_none());
    }
}
