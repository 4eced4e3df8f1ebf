// Contact page - inquiry form with simulated submission, contact info, direct team contacts

use eframe::egui;

use crate::model::{self, DataError, TeamMember};
use crate::router::{NavOptions, Page};
use crate::style;
use crate::view::{card, placeholder_ui, Modal, PageView, ViewContext, ViewFrame};

pub const SERVICE_CHOICES: [&str; 7] = [
    "Desarrollo Web Frontend",
    "Desarrollo Web Backend",
    "Aplicaciones Móviles",
    "DevOps y Cloud",
    "Consultoría Técnica",
    "Mantenimiento y Soporte",
    "Otro",
];

const BUDGET_CHOICES: [&str; 5] = [
    "Menos de $5,000",
    "$5,000 - $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "Más de $50,000",
];

const TIMELINE_CHOICES: [&str; 5] = [
    "Lo antes posible",
    "Dentro de 1 mes",
    "Dentro de 3 meses",
    "Dentro de 6 meses",
    "Flexible",
];

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: Option<&'static str>,
    pub budget: Option<&'static str>,
    pub timeline: Option<&'static str>,
    pub message: String,
}

impl ContactForm {
    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }

    fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service: self.service.map(str::to_string),
            budget: self.budget.map(str::to_string),
            timeline: self.timeline.map(str::to_string),
            message: self.message.trim().to_string(),
        }
    }
}

/// Form data handed to the background worker for the simulated send.
#[derive(Clone, Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: String,
}

pub struct ContactView {
    frame: ViewFrame,
    team: Vec<TeamMember>,
    form: ContactForm,
    show_validation: bool,
}

impl ContactView {
    pub fn new() -> Self {
        Self {
            frame: ViewFrame::new(),
            team: Vec::new(),
            form: ContactForm::default(),
            show_validation: false,
        }
    }

    #[allow(dead_code)]
    pub fn selected_service(&self) -> Option<&'static str> {
        self.form.service
    }

    fn build(&mut self, options: Option<&NavOptions>) -> Result<(), DataError> {
        self.team = model::sample_team()?;
        self.form = ContactForm::default();
        self.show_validation = false;

        // A "service" option preselects the matching entry in the form.
        if let Some(service) = options.and_then(|o| o.get("service")) {
            self.form.service = SERVICE_CHOICES.iter().copied().find(|c| c == service);
        }
        Ok(())
    }

    fn option_row(
        ui: &mut egui::Ui,
        id: &str,
        label: &str,
        hint: &str,
        choices: &[&'static str],
        selected: &mut Option<&'static str>,
    ) {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(selected.unwrap_or(hint))
            .width(240.0)
            .show_ui(ui, |ui| {
                for choice in choices {
                    ui.selectable_value(selected, Some(*choice), *choice);
                }
            });
        ui.add_space(6.0);
    }

    fn form_ui(&mut self, ui: &mut egui::Ui, ctx: &ViewContext) {
        ui.heading("Envíanos un Mensaje");
        ui.label("Completa el formulario y te responderemos lo antes posible.");
        ui.add_space(8.0);

        ui.label("Nombre Completo *");
        ui.text_edit_singleline(&mut self.form.name);
        ui.add_space(6.0);

        ui.label("Email *");
        ui.text_edit_singleline(&mut self.form.email);
        ui.add_space(6.0);

        ui.label("Empresa");
        ui.text_edit_singleline(&mut self.form.company);
        ui.add_space(6.0);

        ui.label("Teléfono");
        ui.text_edit_singleline(&mut self.form.phone);
        ui.add_space(6.0);

        Self::option_row(
            ui,
            "contact_service",
            "Servicio de Interés",
            "Selecciona un servicio",
            &SERVICE_CHOICES,
            &mut self.form.service,
        );
        Self::option_row(
            ui,
            "contact_budget",
            "Presupuesto Estimado",
            "Selecciona un rango",
            &BUDGET_CHOICES,
            &mut self.form.budget,
        );
        Self::option_row(
            ui,
            "contact_timeline",
            "Timeline del Proyecto",
            "Selecciona un timeline",
            &TIMELINE_CHOICES,
            &mut self.form.timeline,
        );

        ui.label("Descripción del Proyecto *");
        ui.add(
            egui::TextEdit::multiline(&mut self.form.message)
                .desired_rows(5)
                .hint_text("Cuéntanos sobre tu proyecto, objetivos, requerimientos especiales, etc."),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let label = if ctx.submitting {
                "Enviando..."
            } else {
                "Enviar Mensaje"
            };
            let clicked = ui
                .add_enabled(!ctx.submitting, egui::Button::new(label))
                .clicked();
            if ctx.submitting {
                ui.spinner();
            }
            if clicked {
                if self.form.is_valid() {
                    self.show_validation = false;
                    *ctx.submit_contact.borrow_mut() = Some(self.form.submission());
                } else {
                    self.show_validation = true;
                }
            }
        });
        if self.show_validation && !self.form.is_valid() {
            ui.colored_label(
                style::DANGER,
                "Completa los campos obligatorios (*) con un email válido.",
            );
        }
    }

    fn info_ui(&self, ui: &mut egui::Ui, ctx: &ViewContext) {
        ui.heading("Información de Contacto");
        ui.label("También puedes contactarnos directamente a través de estos medios:");
        ui.add_space(6.0);
        ui.label("📧 Email General");
        if ui.link("info@devteam.com").clicked() {
            if let Err(e) = open::that("mailto:info@devteam.com") {
                tracing::warn!(error = %e, "could not open mail client");
            }
        }
        ui.add_space(4.0);
        ui.label("📞 Teléfono");
        ui.label("+1 (555) 123-4567");
        ui.add_space(4.0);
        ui.label("🏢 Oficina");
        ui.label("123 Tech Street\nInnovation City, TC 12345");
        ui.add_space(4.0);
        ui.label("🕐 Horario");
        ui.label("Lun - Vie: 9:00 AM - 6:00 PM\nSáb: 10:00 AM - 2:00 PM");

        ui.add_space(style::SECTION_SPACING);
        ui.heading("Contacto Directo del Equipo");
        ui.label("Contacta directamente a nuestros especialistas:");
        ui.add_space(6.0);
        for member in &self.team {
            card(ui, 260.0, |ui| {
                ui.horizontal(|ui| {
                    style::initials_avatar(ui, &member.initials(), 36.0);
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(member.name).strong().size(13.0));
                        ui.label(egui::RichText::new(member.position).size(11.0).weak());
                        if ui.link(egui::RichText::new(member.email).size(11.0)).clicked() {
                            if let Err(e) = open::that(format!("mailto:{}", member.email)) {
                                tracing::warn!(error = %e, "could not open mail client");
                            }
                        }
                    });
                });
                ui.horizontal_wrapped(|ui| {
                    for skill in member.skills.iter().take(2) {
                        style::chip(ui, skill);
                    }
                });
            });
        }

        ui.add_space(style::SECTION_SPACING);
        ui.heading("¿Prefieres una Llamada?");
        ui.label("Agenda una videollamada gratuita de 30 minutos para discutir tu proyecto");
        if ui.button("📅 Agendar Llamada").clicked() {
            ctx.open_modal(Modal::ScheduleCall);
        }
    }
}

impl PageView for ContactView {
    fn page(&self) -> Page {
        Page::Contact
    }

    fn frame(&self) -> &ViewFrame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut ViewFrame {
        &mut self.frame
    }

    fn prepare(&mut self, options: Option<&NavOptions>) {
        self.frame.begin_render();
        match self.build(options) {
            Ok(()) => self.frame.ready(),
            Err(e) => {
                tracing::error!(error = %e, "error loading contact page");
                self.frame.fail("Error al cargar la página de contacto");
            }
        }
    }

    fn on_show(&mut self) {
        tracing::debug!("contact view shown");
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &ViewContext) {
        if !self.frame.is_ready() {
            placeholder_ui(ui, &self.frame.state, ctx);
            return;
        }

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading("Contáctanos");
            ui.label("¿Tienes un proyecto en mente? Nos encantaría conocer más sobre tus ideas");
        });
        ui.separator();
        ui.add_space(style::CARD_SPACING);

        ui.columns(2, |columns| {
            self.form_ui(&mut columns[0], ctx);
            self.info_ui(&mut columns[1], ctx);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preselects_known_service() {
        let mut view = ContactView::new();
        let mut options = NavOptions::new();
        options.insert("service".into(), "Aplicaciones Móviles".into());
        view.prepare(Some(&options));
        assert_eq!(view.selected_service(), Some("Aplicaciones Móviles"));
    }

    #[test]
    fn unknown_service_is_ignored() {
        let mut view = ContactView::new();
        let mut options = NavOptions::new();
        options.insert("service".into(), "Fabricación de Hardware".into());
        view.prepare(Some(&options));
        assert_eq!(view.selected_service(), None);
    }

    #[test]
    fn reprepare_resets_the_form() {
        let mut view = ContactView::new();
        view.prepare(None);
        view.form.name = "Ada".into();
        view.form.message = "Hola".into();
        view.prepare(None);
        assert!(view.form.name.is_empty());
        assert!(view.form.message.is_empty());
    }

    #[test]
    fn form_requires_name_email_and_message() {
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Un proyecto".into(),
            ..ContactForm::default()
        };
        assert!(form.is_valid());
        form.email = "sin-arroba".into();
        assert!(!form.is_valid());
    }
}
