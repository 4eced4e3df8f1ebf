use eframe::egui;

use crate::model::ProjectStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn mode(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn apply(self, ctx: &egui::Context) {
        match self {
            Self::Light => ctx.set_visuals(egui::Visuals::light()),
            Self::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
    }
}

// --- Sizing ---
pub const NAV_BAR_PADDING: f32 = 6.0;
pub const SECTION_SPACING: f32 = 18.0;
pub const CARD_SPACING: f32 = 10.0;
pub const CARD_WIDTH: f32 = 300.0;
pub const AVATAR_SIZE: f32 = 48.0;
pub const AVATAR_SIZE_LARGE: f32 = 72.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 320.0;
pub const MODAL_MAX_WIDTH: f32 = 560.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;
pub const MODAL_HEIGHT_RATIO: f32 = 0.8;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;
pub const SUCCESS_TIMEOUT_SECS: u64 = 4;
pub const ERROR_TIMEOUT_SECS: u64 = 8;
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(90, 190, 120);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(235, 185, 80);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(230, 110, 110);

pub fn status_color(status: ProjectStatus) -> egui::Color32 {
    match status {
        ProjectStatus::Completed => SUCCESS,
        ProjectStatus::InProgress => ACCENT,
        ProjectStatus::Planning => WARNING,
    }
}

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn modal_max_height(ctx: &egui::Context) -> f32 {
    let height = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.height())
            .unwrap_or(600.0)
    });
    height * MODAL_HEIGHT_RATIO
}

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

/// Small rounded tag, used for technologies, skills, and post tags.
pub fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0));
        });
}

/// Status badge with the status color as background.
pub fn status_badge(ui: &mut egui::Ui, status: ProjectStatus) {
    egui::Frame::new()
        .fill(status_color(status).gamma_multiply(0.25))
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(status.label())
                    .size(11.0)
                    .color(status_color(status)),
            );
        });
}

/// Circular initials placeholder standing in for member photos.
pub fn initials_avatar(ui: &mut egui::Ui, initials: &str, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), size / 2.0, ACCENT.gamma_multiply(0.4));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(size * 0.38),
        ui.visuals().strong_text_color(),
    );
}

pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(SECTION_SPACING);
    ui.heading(title);
    ui.add_space(6.0);
}
