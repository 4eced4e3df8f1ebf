// Navigation history - the bounded trail and the session back/forward stack

use chrono::{DateTime, Utc};

use crate::router::{NavOptions, Page};

pub const TRAIL_MAX: usize = 50;
pub const TRAIL_KEEP: usize = 25;

#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub page: Page,
    pub options: Option<NavOptions>,
    pub timestamp: DateTime<Utc>,
}

/// Bounded trail of past navigations backing `go_back`.
///
/// Independent of the session stack: appended on every recorded navigation,
/// truncated to the most recent [`TRAIL_KEEP`] entries once it would exceed
/// [`TRAIL_MAX`].
#[derive(Default)]
pub struct NavigationTrail {
    entries: Vec<HistoryEntry>,
}

impl NavigationTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, page: Page, options: Option<NavOptions>) {
        self.entries.push(HistoryEntry {
            page,
            options,
            timestamp: Utc::now(),
        });
        if self.entries.len() > TRAIL_MAX {
            self.entries = self.entries.split_off(self.entries.len() - TRAIL_KEEP);
        }
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Clone, Debug)]
pub struct SessionEntry {
    pub page: Page,
    pub options: Option<NavOptions>,
}

/// Browser-style session stack: a cursor over past entries where pushing a
/// new page truncates the forward tail. Consecutive pushes of the page
/// already under the cursor are skipped.
pub struct SessionHistory {
    entries: Vec<SessionEntry>,
    index: usize,
}

impl SessionHistory {
    pub fn new(page: Page) -> Self {
        Self {
            entries: vec![SessionEntry {
                page,
                options: None,
            }],
            index: 0,
        }
    }

    pub fn replace_current(&mut self, page: Page, options: Option<NavOptions>) {
        self.entries[self.index] = SessionEntry { page, options };
    }

    pub fn push(&mut self, page: Page, options: Option<NavOptions>) {
        if self.entries[self.index].page == page {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(SessionEntry { page, options });
        self.index += 1;
    }

    pub fn back(&mut self) -> Option<SessionEntry> {
        if self.index > 0 {
            self.index -= 1;
            Some(self.entries[self.index].clone())
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<SessionEntry> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            Some(self.entries[self.index].clone())
        } else {
            None
        }
    }

    #[allow(dead_code)]
    pub fn current(&self) -> &SessionEntry {
        &self.entries[self.index]
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_truncates_to_recent_entries() {
        let mut trail = NavigationTrail::new();
        for _ in 0..TRAIL_MAX {
            trail.push(Page::Home, None);
        }
        assert_eq!(trail.len(), TRAIL_MAX);
        trail.push(Page::Services, None);
        assert_eq!(trail.len(), TRAIL_KEEP);
        assert_eq!(trail.last().unwrap().page, Page::Services);
    }

    #[test]
    fn session_push_skips_same_page() {
        let mut session = SessionHistory::new(Page::Home);
        session.push(Page::Home, None);
        assert_eq!(session.len(), 1);
        session.push(Page::Services, None);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn session_push_truncates_forward_tail() {
        let mut session = SessionHistory::new(Page::Home);
        session.push(Page::Services, None);
        session.push(Page::Projects, None);
        assert_eq!(session.back().unwrap().page, Page::Services);
        session.push(Page::Blog, None);
        assert_eq!(session.len(), 3);
        assert!(session.forward().is_none());
        assert_eq!(session.current().page, Page::Blog);
    }

    #[test]
    fn session_back_and_forward() {
        let mut session = SessionHistory::new(Page::Home);
        session.push(Page::Services, None);
        assert_eq!(session.back().unwrap().page, Page::Home);
        assert!(session.back().is_none());
        assert_eq!(session.forward().unwrap().page, Page::Services);
        assert!(session.forward().is_none());
    }
}
