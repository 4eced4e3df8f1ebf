// Global input handling - keyboard accelerators and accessibility tracking

use eframe::egui;

use crate::app::DevTeamApp;
use crate::router::Page;

const PAGE_KEYS: [(egui::Key, Page); 6] = [
    (egui::Key::Num1, Page::Home),
    (egui::Key::Num2, Page::Services),
    (egui::Key::Num3, Page::Projects),
    (egui::Key::Num4, Page::Blog),
    (egui::Key::Num5, Page::Team),
    (egui::Key::Num6, Page::Contact),
];

impl DevTeamApp {
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context) {
        // Escape closes the open modal.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.modal.take().is_some() {
            return;
        }

        // Track keyboard-driven navigation for the focus indicator.
        if ctx.input(|i| i.key_pressed(egui::Key::Tab)) {
            self.ui.keyboard_navigation = true;
        }
        if ctx.input(|i| i.pointer.any_pressed()) {
            self.ui.keyboard_navigation = false;
        }

        if ctx.input(|i| i.modifiers.alt) {
            // Alt+1..6 jump straight to a page.
            for (key, page) in PAGE_KEYS {
                if ctx.input(|i| i.key_pressed(key)) {
                    self.router.navigate_to(page, None, true);
                    return;
                }
            }
            // Alt+Arrows replay the session history.
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
                self.router.session_back();
                return;
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
                self.router.session_forward();
                return;
            }
        }

        // Ctrl+/ opens the contact page.
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Slash)) {
            self.router.navigate_to(Page::Contact, None, true);
        }

        // Reserved for a future quick-search palette.
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::K)) {
            tracing::debug!("quick search shortcut");
        }
    }
}
