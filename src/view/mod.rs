// Page view contract and shared lifecycle behavior
//
// Each page implements the PageView trait over a shared ViewFrame: show/hide
// toggle visibility, prepare() is the render step rebuilding the page content
// from the sample data, ui() draws the prepared content each frame. The three
// non-happy-path render states share one placeholder rendering.

pub mod blog;
pub mod contact;
pub mod home;
pub mod modals;
pub mod projects;
pub mod services;
pub mod team;

pub use blog::BlogView;
pub use contact::{ContactSubmission, ContactView};
pub use home::HomeView;
pub use modals::Modal;
pub use projects::ProjectsView;
pub use services::ServicesView;
pub use team::TeamView;

use std::any::Any;
use std::cell::RefCell;

use eframe::egui;

use crate::router::{NavOptions, Page};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Ready,
    Error(String),
    Empty(String),
}

/// Shared view lifecycle state, embedded by every concrete page view.
pub struct ViewFrame {
    pub visible: bool,
    pub state: RenderState,
    /// Counts completed render steps; same-page navigation re-renders.
    pub renders: u64,
}

impl ViewFrame {
    pub fn new() -> Self {
        Self {
            visible: false,
            state: RenderState::Loading,
            renders: 0,
        }
    }

    pub fn begin_render(&mut self) {
        self.state = RenderState::Loading;
        self.renders += 1;
    }

    pub fn ready(&mut self) {
        self.state = RenderState::Ready;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = RenderState::Error(message.into());
    }

    pub fn empty(&mut self, message: impl Into<String>) {
        self.state = RenderState::Empty(message.into());
    }

    pub fn is_ready(&self) -> bool {
        self.state == RenderState::Ready
    }
}

impl Default for ViewFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// A navigation request raised from inside a view.
#[derive(Clone, Debug)]
pub struct NavRequest {
    pub page: Page,
    pub options: Option<NavOptions>,
}

/// Context handed to views while drawing. Interactions are deferred through
/// the RefCell slots and applied by the shell after the frame.
pub struct ViewContext<'a> {
    /// True while a contact submission is in flight on the worker.
    pub submitting: bool,
    pub next_navigation: &'a RefCell<Option<NavRequest>>,
    pub next_modal: &'a RefCell<Option<Modal>>,
    pub submit_contact: &'a RefCell<Option<ContactSubmission>>,
    pub retry_requested: &'a RefCell<bool>,
}

impl ViewContext<'_> {
    pub fn navigate(&self, page: Page) {
        *self.next_navigation.borrow_mut() = Some(NavRequest {
            page,
            options: None,
        });
    }

    pub fn navigate_with(&self, page: Page, options: NavOptions) {
        *self.next_navigation.borrow_mut() = Some(NavRequest {
            page,
            options: Some(options),
        });
    }

    pub fn open_modal(&self, modal: Modal) {
        *self.next_modal.borrow_mut() = Some(modal);
    }
}

pub trait PageView {
    fn page(&self) -> Page;
    fn frame(&self) -> &ViewFrame;
    fn frame_mut(&mut self) -> &mut ViewFrame;

    /// The render step: rebuild the page content from the sample data.
    /// Data errors are caught here and become the error placeholder.
    fn prepare(&mut self, options: Option<&NavOptions>);

    /// Draw the prepared content for one frame.
    fn ui(&mut self, ui: &mut egui::Ui, ctx: &ViewContext);

    fn on_show(&mut self) {}
    fn on_hide(&mut self) {}

    fn show(&mut self) {
        self.frame_mut().visible = true;
        self.on_show();
    }

    fn hide(&mut self) {
        self.frame_mut().visible = false;
        self.on_hide();
    }

    fn is_visible(&self) -> bool {
        self.frame().visible
    }

    fn as_any(&self) -> &dyn Any;
}

/// Standard rendering for the loading, error, and empty states.
pub fn placeholder_ui(ui: &mut egui::Ui, state: &RenderState, ctx: &ViewContext) {
    match state {
        RenderState::Ready => {}
        RenderState::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.spinner();
                ui.add_space(8.0);
                ui.label("Cargando...");
            });
        }
        RenderState::Error(message) => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(egui::RichText::new("⚠️").size(32.0));
                ui.heading("Error");
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("Reintentar").clicked() {
                    *ctx.retry_requested.borrow_mut() = true;
                }
            });
        }
        RenderState::Empty(message) => {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(egui::RichText::new("📭").size(32.0));
                ui.label(message);
            });
        }
    }
}

/// Fixed-width card frame used by the page grids.
pub fn card(ui: &mut egui::Ui, width: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(add_contents);
    });
}

/// Character-safe truncation with a trailing ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("corto", 10), "corto");
        assert_eq!(truncate("tecnología", 6), "tecnol...");
    }

    #[test]
    fn frame_counts_renders() {
        let mut frame = ViewFrame::new();
        frame.begin_render();
        frame.ready();
        frame.begin_render();
        frame.fail("sin datos");
        assert_eq!(frame.renders, 2);
        assert!(!frame.is_ready());
    }
}
