// Application shell - owns the router and shared services, runs the frame
// loop, and applies navigation side effects (title, analytics, announcements,
// persisted state)

use std::cell::RefCell;
use std::sync::mpsc::{Receiver, Sender};

use chrono::{DateTime, Utc};
use eframe::egui;

use crate::config::Config;
use crate::router::{NavigationState, Page, Router};
use crate::state::{NotifyKind, UiState};
use crate::storage::Storage;
use crate::style::{self, Theme};
use crate::view::{modals, ContactSubmission, Modal, NavRequest, ViewContext};
use crate::worker::{spawn_worker, WorkerCommand, WorkerResult};

const NAVIGATION_STATE_KEY: &str = "navigationState";
const THEME_KEY: &str = "theme";

/// Only errors matching one of these raise a user-facing toast.
const CRITICAL_PATTERNS: [&str; 4] = ["network", "connection", "channel", "unavailable"];

pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn page_meta(page: Page) -> PageMeta {
    match page {
        Page::Home => PageMeta {
            title: "DevTeam - Equipo de Desarrollo Profesional",
            description: "Somos un equipo de desarrolladores especializados en crear soluciones \
                tecnológicas innovadoras. Desarrollo web, móvil y consultoría técnica.",
        },
        Page::Services => PageMeta {
            title: "Servicios - DevTeam",
            description: "Conoce nuestros servicios de desarrollo web, aplicaciones móviles, \
                DevOps y consultoría técnica. Soluciones personalizadas para tu proyecto.",
        },
        Page::Projects => PageMeta {
            title: "Proyectos - DevTeam",
            description: "Descubre los proyectos que hemos desarrollado con pasión y \
                dedicación. Casos de éxito en desarrollo web y móvil.",
        },
        Page::Blog => PageMeta {
            title: "Blog - DevTeam",
            description: "Ideas, reflexiones y conocimientos de nuestro equipo de desarrollo. \
                Artículos sobre tecnología, desarrollo y mejores prácticas.",
        },
        Page::Team => PageMeta {
            title: "Nuestro Equipo - DevTeam",
            description: "Conoce a los profesionales que hacen posible cada proyecto. \
                Desarrolladores experimentados y apasionados por la tecnología.",
        },
        Page::Contact => PageMeta {
            title: "Contacto - DevTeam",
            description: "¿Tienes un proyecto en mente? Contáctanos y hagamos realidad tus \
                ideas. Presupuesto gratuito y sin compromiso.",
        },
    }
}

/// Restore only when launched at the root route, the stored state is still
/// fresh, and it would actually change pages.
fn should_restore(
    state: &NavigationState,
    now: DateTime<Utc>,
    launched_at_root: bool,
    current: Option<Page>,
) -> bool {
    launched_at_root && state.is_fresh(now) && Some(state.current_page) != current
}

fn is_critical(message: &str) -> bool {
    let message = message.to_lowercase();
    CRITICAL_PATTERNS.iter().any(|p| message.contains(p))
}

pub struct DevTeamApp {
    pub config: Config,
    pub storage: Option<Storage>,
    pub router: Router,
    pub ui: UiState,
    pub modal: Option<Modal>,
    pub contact_submitting: bool,
    worker_tx: Sender<WorkerCommand>,
    worker_rx: Receiver<WorkerResult>,
}

impl DevTeamApp {
    pub fn new(cc: &eframe::CreationContext<'_>, route: Option<String>, reset_state: bool) -> Self {
        let config = Config::load();
        tracing::info!(
            version = %config.app.version,
            environment = %config.app.environment,
            "configuration loaded"
        );
        if let Err(e) = Config::create_default() {
            tracing::warn!(error = %e, "could not write default config");
        }

        let storage = match Storage::open() {
            Ok(storage) => Some(storage),
            Err(e) => {
                tracing::error!(error = %e, "storage unavailable, persistence disabled");
                None
            }
        };
        if reset_state {
            if let Some(storage) = &storage {
                storage.clear();
                tracing::info!("persisted state cleared");
            }
        }

        // A stored theme choice wins over the config default.
        let stored_mode: Option<String> = storage.as_ref().and_then(|s| s.get(THEME_KEY));
        let theme = Theme::from_mode(stored_mode.as_deref().unwrap_or(&config.theme.mode));
        theme.apply(&cc.egui_ctx);

        let (worker_tx, worker_rx) = spawn_worker(cc.egui_ctx.clone());

        let mut app = Self {
            config,
            storage,
            router: Router::new(),
            ui: UiState::new(theme),
            modal: None,
            contact_submitting: false,
            worker_tx,
            worker_rx,
        };

        app.router.initialize(route.as_deref());
        for page in app.router.take_preloads() {
            let _ = app.worker_tx.send(WorkerCommand::Preload(page));
        }
        // Launched at the root route: optionally return to the last page.
        app.restore_navigation_state(route.is_none());
        if app.config.app.environment == "development" {
            app.ui
                .notify("Aplicación DevTeam cargada correctamente", NotifyKind::Info);
        }
        app
    }

    fn restore_navigation_state(&mut self, launched_at_root: bool) {
        if !self.config.features.restore_last_page {
            return;
        }
        let Some(state) = self
            .storage
            .as_ref()
            .and_then(|s| s.get::<NavigationState>(NAVIGATION_STATE_KEY))
        else {
            return;
        };
        if should_restore(&state, Utc::now(), launched_at_root, self.router.current_page) {
            tracing::info!(page = state.current_page.slug(), "restoring last visited page");
            self.router.navigate_to(state.current_page, state.options, true);
        } else if !state.is_fresh(Utc::now()) {
            tracing::debug!("stored navigation state expired");
            if let Some(storage) = &self.storage {
                storage.remove(NAVIGATION_STATE_KEY);
            }
        }
    }

    fn report_error(&mut self, context: &str, message: String) {
        tracing::error!(
            context,
            page = self.router.current_page.map(Page::slug),
            error = %message,
            "application error"
        );
        if is_critical(&message) {
            self.ui.notify(
                "Ha ocurrido un error inesperado. Por favor reintenta.",
                NotifyKind::Error,
            );
        }
    }

    fn set_theme(&mut self, theme: Theme, ctx: &egui::Context) {
        self.ui.theme = theme;
        theme.apply(ctx);
        let mut store_err = None;
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set(THEME_KEY, &theme.mode()) {
                store_err = Some(e.to_string());
            }
        }
        if let Some(e) = store_err {
            self.report_error("theme", e);
        }
        tracing::info!(theme = theme.mode(), "theme changed");
    }

    fn submit_contact(&mut self, submission: ContactSubmission) {
        tracing::info!(service = ?submission.service, "sending contact form");
        self.contact_submitting = true;
        if self
            .worker_tx
            .send(WorkerCommand::SubmitContact(submission))
            .is_err()
        {
            self.contact_submitting = false;
            self.report_error("contact", "worker channel closed".to_string());
        }
    }

    fn drain_worker(&mut self) {
        while let Ok(result) = self.worker_rx.try_recv() {
            match result {
                WorkerResult::Preloaded { page, items } => {
                    // May land after another navigation; harmless either way.
                    tracing::debug!(page = page.slug(), items, "preloaded page data");
                }
                WorkerResult::ContactSubmitted(result) => {
                    self.contact_submitting = false;
                    match result {
                        Ok(()) => {
                            self.modal = Some(Modal::ContactSuccess);
                            self.ui
                                .notify("Mensaje enviado correctamente", NotifyKind::Success);
                            // Rebuild the contact page so the form starts clean.
                            if self.router.current_page == Some(Page::Contact) {
                                self.router.reprepare_active();
                            }
                        }
                        Err(e) => self.report_error("contact", e),
                    }
                }
            }
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(style::NAV_BAR_PADDING);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("DevTeam")
                        .strong()
                        .size(18.0)
                        .color(style::ACCENT),
                );
                ui.separator();

                let mut clicked = None;
                for page in Page::ALL {
                    let active = self.router.current_page == Some(page);
                    if ui.selectable_label(active, page.label()).clicked() {
                        clicked = Some(page);
                    }
                }
                if let Some(page) = clicked {
                    self.router.navigate_to(page, None, true);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = match self.ui.theme {
                        Theme::Dark => "☀",
                        Theme::Light => "🌙",
                    };
                    if ui.button(icon).on_hover_text("Cambiar tema").clicked() {
                        self.set_theme(self.ui.theme.toggle(), ctx);
                    }
                    if ui.button("⬅").on_hover_text("Volver").clicked() {
                        self.router.go_back();
                    }
                });
            });
            ui.add_space(style::NAV_BAR_PADDING);
        });
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let meta = page_meta(self.router.current_page.unwrap_or(Page::DEFAULT));
                ui.label(self.router.location())
                    .on_hover_text(meta.description);
                if let Some((announcement, _)) = &self.ui.announcement {
                    ui.separator();
                    ui.label(egui::RichText::new(announcement).weak());
                }
                if self.ui.keyboard_navigation {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new("⌨").weak())
                            .on_hover_text("Navegación por teclado");
                    });
                }
            });
        });
    }

    fn central(&mut self, ctx: &egui::Context) {
        // Deferred actions raised by the views during this frame.
        let next_navigation = RefCell::new(None::<NavRequest>);
        let next_modal = RefCell::new(None::<Modal>);
        let submit_contact = RefCell::new(None::<ContactSubmission>);
        let retry_requested = RefCell::new(false);

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = self.router.error.clone() {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(egui::RichText::new("🚨").size(32.0));
                    ui.heading("Error de Navegación");
                    ui.label("Ha ocurrido un error al cargar la página.");
                    ui.label(egui::RichText::new(error).size(11.0).weak());
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        let spacing = (ui.available_width() - 200.0).max(0.0) / 2.0;
                        ui.add_space(spacing);
                        if ui.button("Reintentar").clicked() {
                            *retry_requested.borrow_mut() = true;
                        }
                        if ui.button("Ir a Inicio").clicked() {
                            *next_navigation.borrow_mut() = Some(NavRequest {
                                page: Page::Home,
                                options: None,
                            });
                        }
                    });
                });
            } else {
                let view_ctx = ViewContext {
                    submitting: self.contact_submitting,
                    next_navigation: &next_navigation,
                    next_modal: &next_modal,
                    submit_contact: &submit_contact,
                    retry_requested: &retry_requested,
                };
                let scroll_to_top = std::mem::take(&mut self.router.scroll_to_top);
                let mut scroll = egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false]);
                if scroll_to_top {
                    scroll = scroll.vertical_scroll_offset(0.0);
                }
                scroll.show(ui, |ui| {
                    if let Some(view) = self.router.active_view_mut() {
                        view.ui(ui, &view_ctx);
                    }
                });
            }
        });

        // Apply deferred actions once the frame borrow is over.
        if retry_requested.into_inner() {
            self.router.reprepare_active();
        }
        if let Some(request) = next_navigation.into_inner() {
            self.router.navigate_to(request.page, request.options, true);
        }
        if let Some(modal) = next_modal.into_inner() {
            self.modal = Some(modal);
        }
        if let Some(submission) = submit_contact.into_inner() {
            self.submit_contact(submission);
        }
    }

    fn render_modal(&mut self, ctx: &egui::Context) {
        if let Some(modal) = self.modal {
            if !modals::render(ctx, modal) {
                self.modal = None;
            }
        }
    }

    fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.ui.notifications.is_empty() {
            return;
        }
        let mut dismissed = Vec::new();
        egui::Area::new("notifications".into())
            .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -32.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, notification) in self.ui.notifications.iter().enumerate() {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let color = match notification.kind {
                                NotifyKind::Info => style::ACCENT,
                                NotifyKind::Success => style::SUCCESS,
                                NotifyKind::Error => style::DANGER,
                            };
                            ui.colored_label(color, &notification.message);
                            if ui.small_button("✕").clicked() {
                                dismissed.push(index);
                            }
                        });
                    });
                }
            });
        for index in dismissed.into_iter().rev() {
            self.ui.notifications.remove(index);
        }
    }

    fn drain_navigation_events(&mut self, ctx: &egui::Context) {
        while let Some(event) = self.router.poll_event() {
            let meta = page_meta(event.page);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(meta.title.to_string()));

            tracing::debug!(
                page = event.page.slug(),
                previous = event.previous_page.map(Page::slug),
                "navigation"
            );
            if self.config.features.enable_analytics {
                tracing::info!(page = event.page.slug(), "page view");
            }

            self.ui
                .announce(format!("Navegaste a {}", event.page.announcement_name()));

            let mut store_err = None;
            if let Some(storage) = &self.storage {
                let state = NavigationState {
                    current_page: event.page,
                    options: event.options.clone(),
                    timestamp: event.timestamp,
                };
                if let Err(e) = storage.set(NAVIGATION_STATE_KEY, &state) {
                    store_err = Some(e.to_string());
                }
            }
            if let Some(e) = store_err {
                self.report_error("storage", e);
            }
        }
    }
}

impl eframe::App for DevTeamApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker();
        self.handle_input(ctx);
        self.ui.expire_messages();

        if let Some(size) = self.ui.track_resize(ctx.screen_rect().size()) {
            tracing::debug!(width = size.x, height = size.y, "window resized");
        }

        self.top_bar(ctx);
        self.status_bar(ctx);
        self.central(ctx);
        self.render_modal(ctx);
        self.render_toasts(ctx);
        self.drain_navigation_events(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_patterns_filter_errors() {
        assert!(is_critical("Network request failed"));
        assert!(is_critical("worker channel closed"));
        assert!(!is_critical("record 3 is incomplete"));
    }

    #[test]
    fn restore_rules() {
        let fresh = NavigationState {
            current_page: Page::Blog,
            options: None,
            timestamp: Utc::now(),
        };
        assert!(should_restore(&fresh, Utc::now(), true, Some(Page::Home)));
        // Launched with an explicit route: never restore.
        assert!(!should_restore(&fresh, Utc::now(), false, Some(Page::Home)));
        // Already on the stored page.
        assert!(!should_restore(&fresh, Utc::now(), true, Some(Page::Blog)));

        let stale = NavigationState {
            current_page: Page::Blog,
            options: None,
            timestamp: Utc::now() - chrono::Duration::minutes(31),
        };
        assert!(!should_restore(&stale, Utc::now(), true, Some(Page::Home)));
    }

    #[test]
    fn every_page_has_meta() {
        for page in Page::ALL {
            let meta = page_meta(page);
            assert!(meta.title.contains("DevTeam"));
            assert!(!meta.description.is_empty());
        }
    }
}
