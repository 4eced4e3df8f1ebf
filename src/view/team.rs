// Team page - member cards, values section, and profile modal triggers

use eframe::egui;

use crate::model::{self, DataError, TeamMember};
use crate::router::{NavOptions, Page};
use crate::style;
use crate::view::{card, placeholder_ui, truncate, Modal, PageView, ViewContext, ViewFrame};

const VALUES: [(&str, &str, &str); 4] = [
    (
        "🤝",
        "Colaboración",
        "Trabajamos en equipo, compartiendo conocimientos y aprendiendo unos de otros.",
    ),
    (
        "🎯",
        "Excelencia",
        "Nos esforzamos por la calidad en cada línea de código y cada proyecto entregado.",
    ),
    (
        "💡",
        "Innovación",
        "Buscamos constantemente nuevas formas de resolver problemas y mejorar procesos.",
    ),
    (
        "📚",
        "Aprendizaje",
        "Nos mantenemos actualizados con las últimas tecnologías y mejores prácticas.",
    ),
];

const SKILL_PREVIEW: usize = 4;

pub struct TeamView {
    frame: ViewFrame,
    members: Vec<TeamMember>,
}

impl TeamView {
    pub fn new() -> Self {
        Self {
            frame: ViewFrame::new(),
            members: Vec::new(),
        }
    }

    fn build(&mut self) -> Result<(), DataError> {
        self.members = model::sample_team()?;
        Ok(())
    }

    fn member_card(ui: &mut egui::Ui, member: &TeamMember, ctx: &ViewContext) {
        card(ui, style::CARD_WIDTH, |ui| {
            ui.horizontal(|ui| {
                style::initials_avatar(ui, &member.initials(), style::AVATAR_SIZE);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(member.name).strong());
                    ui.label(egui::RichText::new(member.position).size(12.0).weak());
                });
            });
            ui.label(egui::RichText::new(truncate(member.bio, 100)).size(12.0));
            ui.label(egui::RichText::new("Especialidades:").strong().size(12.0));
            ui.horizontal_wrapped(|ui| {
                for skill in member.skills.iter().take(SKILL_PREVIEW) {
                    style::chip(ui, skill);
                }
                if member.skills.len() > SKILL_PREVIEW {
                    style::chip(ui, &format!("+{} más", member.skills.len() - SKILL_PREVIEW));
                }
            });
            ui.horizontal(|ui| {
                if ui.small_button("Ver Perfil").clicked() {
                    ctx.open_modal(Modal::MemberProfile(member.id));
                }
                if ui.small_button("📧 Contactar").clicked() {
                    if let Err(e) = open::that(format!("mailto:{}", member.email)) {
                        tracing::warn!(error = %e, "could not open mail client");
                    }
                }
                if let Some(url) = member.github {
                    if ui.small_button("📂 GitHub").clicked() {
                        if let Err(e) = open::that(url) {
                            tracing::warn!(error = %e, "could not open profile link");
                        }
                    }
                }
                if let Some(url) = member.linkedin {
                    if ui.small_button("💼 LinkedIn").clicked() {
                        if let Err(e) = open::that(url) {
                            tracing::warn!(error = %e, "could not open profile link");
                        }
                    }
                }
            });
        });
    }
}

impl PageView for TeamView {
    fn page(&self) -> Page {
        Page::Team
    }

    fn frame(&self) -> &ViewFrame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut ViewFrame {
        &mut self.frame
    }

    fn prepare(&mut self, _options: Option<&NavOptions>) {
        self.frame.begin_render();
        match self.build() {
            Ok(()) => {
                if self.members.is_empty() {
                    self.frame.empty("No hay datos del equipo disponibles");
                } else {
                    self.frame.ready();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading team");
                self.frame.fail("Error al cargar el equipo");
            }
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &ViewContext) {
        if !self.frame.is_ready() {
            placeholder_ui(ui, &self.frame.state, ctx);
            return;
        }

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading("Nuestro Equipo");
            ui.label("Conoce a los profesionales que hacen posible cada proyecto");
        });
        ui.separator();

        style::section_heading(ui, "Quiénes Somos");
        ui.label(
            "Somos un equipo multidisciplinario de desarrolladores apasionados por la \
             tecnología. Cada miembro aporta experiencia única y conocimientos especializados \
             para crear soluciones innovadoras.",
        );
        ui.add_space(style::CARD_SPACING);

        ui.horizontal_wrapped(|ui| {
            for member in &self.members {
                Self::member_card(ui, member, ctx);
            }
        });

        style::section_heading(ui, "Nuestros Valores");
        ui.horizontal_wrapped(|ui| {
            for (icon, title, text) in VALUES {
                card(ui, 220.0, |ui| {
                    ui.label(egui::RichText::new(icon).size(22.0));
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(egui::RichText::new(text).size(12.0));
                });
            }
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
