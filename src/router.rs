// Page routing - the page registry, navigation operations, and history bookkeeping

use std::any::Any;
use std::collections::{BTreeMap, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{NavigationTrail, SessionHistory};
use crate::view::{
    BlogView, ContactView, HomeView, PageView, ProjectsView, ServicesView, TeamView,
};

/// Extra key/value data attached to a navigation request, passed through
/// unmodified to the target view's render step.
pub type NavOptions = BTreeMap<String, String>;

/// The closed set of navigable pages. Slugs are the original route tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    #[serde(rename = "inicio")]
    Home,
    #[serde(rename = "servicios")]
    Services,
    #[serde(rename = "proyectos")]
    Projects,
    #[serde(rename = "blog")]
    Blog,
    #[serde(rename = "equipo")]
    Team,
    #[serde(rename = "contacto")]
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Services,
        Page::Projects,
        Page::Blog,
        Page::Team,
        Page::Contact,
    ];

    pub const DEFAULT: Page = Page::Home;

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "inicio",
            Page::Services => "servicios",
            Page::Projects => "proyectos",
            Page::Blog => "blog",
            Page::Team => "equipo",
            Page::Contact => "contacto",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }

    /// Navigation bar label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Inicio",
            Page::Services => "Servicios",
            Page::Projects => "Proyectos",
            Page::Blog => "Blog",
            Page::Team => "Equipo",
            Page::Contact => "Contacto",
        }
    }

    /// Accessible page name used for navigation announcements.
    pub fn announcement_name(self) -> &'static str {
        match self {
            Page::Home => "Página de inicio",
            Page::Services => "Página de servicios",
            Page::Projects => "Página de proyectos",
            Page::Blog => "Blog",
            Page::Team => "Página del equipo",
            Page::Contact => "Página de contacto",
        }
    }
}

/// Persisted snapshot of the last completed navigation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub current_page: Page,
    pub options: Option<NavOptions>,
    pub timestamp: DateTime<Utc>,
}

pub const RESTORE_MAX_AGE_MINUTES: i64 = 30;

impl NavigationState {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp) < chrono::Duration::minutes(RESTORE_MAX_AGE_MINUTES)
    }
}

/// Emitted after every successful navigation; drained by the shell for
/// title/meta updates, analytics, announcements, and state persistence.
#[derive(Clone, Debug)]
pub struct NavigationEvent {
    pub page: Page,
    pub previous_page: Option<Page>,
    pub options: Option<NavOptions>,
    pub timestamp: DateTime<Utc>,
}

/// Pages preloaded in the background right after startup.
const PRELOAD_PAGES: [Page; 3] = [Page::Services, Page::Projects, Page::Contact];

pub struct Router {
    views: Vec<Box<dyn PageView>>,
    pub current_page: Option<Page>,
    pub previous_page: Option<Page>,
    session: SessionHistory,
    trail: NavigationTrail,
    events: VecDeque<NavigationEvent>,
    /// Consumed by the shell to reset the content scroll position.
    pub scroll_to_top: bool,
    /// Router-level error panel after a failed render step.
    pub error: Option<String>,
    preload_queue: Vec<Page>,
}

impl Router {
    pub fn new() -> Self {
        let mut router = Self {
            views: Vec::new(),
            current_page: None,
            previous_page: None,
            session: SessionHistory::new(Page::DEFAULT),
            trail: NavigationTrail::new(),
            events: VecDeque::new(),
            scroll_to_top: false,
            error: None,
            preload_queue: Vec::new(),
        };
        router.register(Box::new(HomeView::new()));
        router.register(Box::new(ServicesView::new()));
        router.register(Box::new(ProjectsView::new()));
        router.register(Box::new(BlogView::new()));
        router.register(Box::new(TeamView::new()));
        router.register(Box::new(ContactView::new()));
        router
    }

    fn register(&mut self, view: Box<dyn PageView>) {
        self.views.push(view);
    }

    pub fn is_valid_page(&self, page: Page) -> bool {
        self.views.iter().any(|view| view.page() == page)
    }

    #[allow(dead_code)]
    pub fn view(&self, page: Page) -> Option<&dyn PageView> {
        self.views
            .iter()
            .find(|view| view.page() == page)
            .map(|view| view.as_ref())
    }

    pub fn active_view_mut(&mut self) -> Option<&mut Box<dyn PageView>> {
        let page = self.current_page?;
        self.views.iter_mut().find(|view| view.page() == page)
    }

    /// Resolve the launch route, perform the initial non-recording
    /// navigation, pin the bottom of the session stack to it, and queue the
    /// background preload of likely-next pages.
    pub fn initialize(&mut self, route: Option<&str>) {
        let initial = route
            .and_then(|r| Page::from_slug(r.trim().trim_start_matches('/')))
            .unwrap_or(Page::DEFAULT);

        self.navigate_to(initial, None, false);
        self.session.replace_current(initial, None);
        self.preload_queue = PRELOAD_PAGES
            .into_iter()
            .filter(|page| Some(*page) != self.current_page)
            .collect();
    }

    /// Navigation entry point for untrusted page tokens.
    pub fn navigate_to_slug(&mut self, slug: &str, options: Option<NavOptions>, record: bool) {
        match Page::from_slug(slug) {
            Some(page) => self.navigate_to(page, options, record),
            None => tracing::error!(page = slug, "page is not valid"),
        }
    }

    pub fn navigate_to(&mut self, page: Page, options: Option<NavOptions>, record: bool) {
        if !self.is_valid_page(page) {
            tracing::error!(page = page.slug(), "page is not registered");
            return;
        }

        if let Some(current) = self.current_page {
            if let Some(view) = self.views.iter_mut().find(|v| v.page() == current) {
                view.hide();
            }
        }

        let outcome = {
            // Registered above, so the lookup cannot miss.
            let Some(view) = self.views.iter_mut().find(|v| v.page() == page) else {
                return;
            };
            let opts = options.clone();
            catch_unwind(AssertUnwindSafe(|| {
                view.show();
                view.prepare(opts.as_ref());
                view.frame().renders
            }))
        };

        match outcome {
            Ok(renders) => {
                tracing::debug!(page = page.slug(), renders, "page rendered");
                self.error = None;
            }
            Err(payload) => {
                let message = panic_message(payload);
                tracing::error!(page = page.slug(), error = %message, "navigation failed");
                self.error = Some(message);
                return;
            }
        }

        if record {
            self.session.push(page, options.clone());
            self.trail.push(page, options.clone());
        }

        self.previous_page = self.current_page;
        self.current_page = Some(page);
        self.scroll_to_top = true;

        self.events.push_back(NavigationEvent {
            page,
            previous_page: self.previous_page,
            options,
            timestamp: Utc::now(),
        });
    }

    /// Step back through the bounded trail; falls back to the default page
    /// once the trail is exhausted.
    pub fn go_back(&mut self) {
        if self.trail.len() > 1 {
            self.trail.pop();
            if let Some(entry) = self.trail.last() {
                let age = Utc::now()
                    .signed_duration_since(entry.timestamp)
                    .num_seconds();
                tracing::debug!(page = entry.page.slug(), age_seconds = age, "navigating back");
                let (page, options) = (entry.page, entry.options.clone());
                self.navigate_to(page, options, false);
            }
        } else {
            self.navigate_to(Page::DEFAULT, None, true);
        }
    }

    /// Session-stack back, replayed through the non-recording path so the
    /// stack is never double-pushed.
    pub fn session_back(&mut self) {
        if let Some(entry) = self.session.back() {
            self.navigate_to(entry.page, entry.options, false);
        }
    }

    pub fn session_forward(&mut self) {
        if let Some(entry) = self.session.forward() {
            self.navigate_to(entry.page, entry.options, false);
        }
    }

    /// "/" for the default page, "/{slug}" otherwise.
    pub fn location(&self) -> String {
        match self.current_page {
            Some(Page::Home) | None => "/".to_string(),
            Some(page) => format!("/{}", page.slug()),
        }
    }

    /// Re-run the active page's render step (error placeholder retry).
    pub fn reprepare_active(&mut self) {
        if let Some(page) = self.current_page {
            self.navigate_to(page, None, false);
        }
    }

    pub fn take_preloads(&mut self) -> Vec<Page> {
        std::mem::take(&mut self.preload_queue)
    }

    pub fn poll_event(&mut self) -> Option<NavigationEvent> {
        self.events.pop_front()
    }

    #[allow(dead_code)]
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "render failed".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ContactView, ViewContext, ViewFrame};

    fn drain(router: &mut Router) {
        while router.poll_event().is_some() {}
    }

    #[test]
    fn slug_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("desconocido"), None);
    }

    #[test]
    fn exactly_one_view_visible_after_navigation() {
        let mut router = Router::new();
        router.initialize(None);
        for page in Page::ALL {
            router.navigate_to(page, None, true);
            let visible: Vec<Page> = Page::ALL
                .into_iter()
                .filter(|p| router.view(*p).is_some_and(|v| v.is_visible()))
                .collect();
            assert_eq!(visible, vec![page]);
        }
    }

    #[test]
    fn unknown_slug_changes_nothing() {
        let mut router = Router::new();
        router.initialize(None);
        drain(&mut router);
        let renders_before: u64 = Page::ALL
            .into_iter()
            .filter_map(|p| router.view(p))
            .map(|v| v.frame().renders)
            .sum();

        router.navigate_to_slug("desconocido", None, true);

        assert_eq!(router.current_page, Some(Page::Home));
        assert!(router.poll_event().is_none());
        let renders_after: u64 = Page::ALL
            .into_iter()
            .filter_map(|p| router.view(p))
            .map(|v| v.frame().renders)
            .sum();
        assert_eq!(renders_before, renders_after);
    }

    #[test]
    fn same_page_navigation_still_re_renders() {
        let mut router = Router::new();
        router.initialize(None);
        router.navigate_to_slug("servicios", None, true);
        let first = router.view(Page::Services).unwrap().frame().renders;
        router.navigate_to_slug("servicios", None, true);
        let second = router.view(Page::Services).unwrap().frame().renders;
        assert_eq!(second, first + 1);
    }

    #[test]
    fn go_back_walks_the_trail_then_falls_back_home() {
        let mut router = Router::new();
        router.initialize(None);
        router.navigate_to(Page::Home, None, true);
        router.navigate_to(Page::Services, None, true);
        router.navigate_to(Page::Projects, None, true);

        router.go_back();
        assert_eq!(router.current_page, Some(Page::Services));
        router.go_back();
        assert_eq!(router.current_page, Some(Page::Home));
        router.go_back();
        assert_eq!(router.current_page, Some(Page::Home));
    }

    #[test]
    fn contact_options_preselect_the_service() {
        let mut router = Router::new();
        router.initialize(None);
        let mut options = NavOptions::new();
        options.insert("service".into(), "Desarrollo Web Backend".into());
        router.navigate_to_slug("contacto", Some(options), true);

        let view = router.view(Page::Contact).unwrap();
        let contact = view.as_any().downcast_ref::<ContactView>().unwrap();
        assert_eq!(contact.selected_service(), Some("Desarrollo Web Backend"));
        assert!(view.frame().is_ready());
    }

    #[test]
    fn session_back_forward_does_not_double_push() {
        let mut router = Router::new();
        router.initialize(None);
        router.navigate_to(Page::Services, None, true);
        router.navigate_to(Page::Blog, None, true);

        router.session_back();
        assert_eq!(router.current_page, Some(Page::Services));
        router.session_forward();
        assert_eq!(router.current_page, Some(Page::Blog));
        // Replaying through the non-recording path left the trail alone.
        assert_eq!(router.trail_len(), 2);
    }

    #[test]
    fn initialize_resolves_route_and_queues_preloads() {
        let mut router = Router::new();
        router.initialize(Some("/servicios"));
        assert_eq!(router.current_page, Some(Page::Services));
        assert_eq!(router.location(), "/servicios");
        let preloads = router.take_preloads();
        assert!(!preloads.contains(&Page::Services));
        assert!(preloads.contains(&Page::Projects));

        let mut router = Router::new();
        router.initialize(Some("/no-such-page"));
        assert_eq!(router.current_page, Some(Page::Home));
        assert_eq!(router.location(), "/");
    }

    #[test]
    fn render_panic_is_contained() {
        struct ExplodingView {
            frame: ViewFrame,
        }

        impl PageView for ExplodingView {
            fn page(&self) -> Page {
                Page::Blog
            }
            fn frame(&self) -> &ViewFrame {
                &self.frame
            }
            fn frame_mut(&mut self) -> &mut ViewFrame {
                &mut self.frame
            }
            fn prepare(&mut self, _options: Option<&NavOptions>) {
                panic!("boom");
            }
            fn ui(&mut self, _ui: &mut eframe::egui::Ui, _ctx: &ViewContext) {}
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        let mut router = Router::new();
        router.views.retain(|v| v.page() != Page::Blog);
        router.register(Box::new(ExplodingView {
            frame: ViewFrame::new(),
        }));
        router.initialize(None);
        drain(&mut router);

        router.navigate_to(Page::Blog, None, true);
        assert_eq!(router.error.as_deref(), Some("boom"));
        // Committed bookkeeping is untouched by the failed attempt.
        assert_eq!(router.current_page, Some(Page::Home));
        assert!(router.poll_event().is_none());

        // The router survives and can navigate elsewhere.
        router.navigate_to(Page::Team, None, true);
        assert_eq!(router.current_page, Some(Page::Team));
        assert!(router.error.is_none());
    }
}
