// Services page - service catalog grid, process steps, and contact call-to-action

use eframe::egui;

use crate::model::{self, DataError, Service};
use crate::router::{NavOptions, Page};
use crate::style;
use crate::view::{card, placeholder_ui, PageView, ViewContext, ViewFrame};

const PROCESS_STEPS: [(&str, &str); 4] = [
    ("Análisis", "Entendemos tus necesidades y objetivos específicos"),
    ("Planificación", "Diseñamos la arquitectura y estrategia del proyecto"),
    ("Desarrollo", "Implementamos la solución con las mejores prácticas"),
    ("Entrega", "Desplegamos y aseguramos el funcionamiento óptimo"),
];

pub struct ServicesView {
    frame: ViewFrame,
    services: Vec<Service>,
}

impl ServicesView {
    pub fn new() -> Self {
        Self {
            frame: ViewFrame::new(),
            services: Vec::new(),
        }
    }

    fn build(&mut self) -> Result<(), DataError> {
        self.services = model::sample_services()?;
        Ok(())
    }

    fn service_card(ui: &mut egui::Ui, service: &Service, ctx: &ViewContext) {
        card(ui, style::CARD_WIDTH, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(service.icon).size(22.0));
                ui.vertical(|ui| {
                    style::truncated_label(ui, egui::RichText::new(service.title).strong());
                    ui.label(
                        egui::RichText::new(service.formatted_price())
                            .color(style::ACCENT)
                            .size(12.0),
                    );
                });
            });
            ui.label(egui::RichText::new(service.description).size(12.0));
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Características:").strong().size(12.0));
            for feature in service.features {
                ui.label(egui::RichText::new(format!("• {feature}")).size(12.0));
            }
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Tecnologías:").strong().size(12.0));
            ui.horizontal_wrapped(|ui| {
                for tech in service.technologies {
                    style::chip(ui, tech);
                }
            });
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!(
                    "Duración: {}",
                    service.duration.unwrap_or("A definir")
                ))
                .size(12.0)
                .weak(),
            );
            ui.add_space(4.0);
            if ui.button("Solicitar Cotización").clicked() {
                let mut options = NavOptions::new();
                options.insert("service".to_string(), service.title.to_string());
                ctx.navigate_with(Page::Contact, options);
            }
        });
    }
}

impl PageView for ServicesView {
    fn page(&self) -> Page {
        Page::Services
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
                if self.services.is_empty() {
                    self.frame.empty("No hay servicios disponibles");
                } else {
                    self.frame.ready();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading services");
                self.frame.fail("Error al cargar los servicios");
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
            ui.heading("Nuestros Servicios");
            ui.label("Ofrecemos soluciones tecnológicas completas para impulsar tu negocio");
        });
        ui.separator();

        style::section_heading(ui, "¿Qué Ofrecemos?");
        ui.label(
            "En DevTeam, combinamos experiencia técnica con enfoque en resultados para ofrecer \
             servicios que realmente marquen la diferencia en tu proyecto. Desde la \
             conceptualización hasta el despliegue y mantenimiento.",
        );
        ui.add_space(style::CARD_SPACING);

        ui.horizontal_wrapped(|ui| {
            for service in &self.services {
                Self::service_card(ui, service, ctx);
            }
        });

        style::section_heading(ui, "Nuestro Proceso");
        ui.horizontal_wrapped(|ui| {
            for (i, (title, text)) in PROCESS_STEPS.iter().enumerate() {
                card(ui, 220.0, |ui| {
                    ui.label(
                        egui::RichText::new(format!("{}", i + 1))
                            .size(20.0)
                            .color(style::ACCENT)
                            .strong(),
                    );
                    ui.label(egui::RichText::new(*title).strong());
                    ui.label(egui::RichText::new(*text).size(12.0));
                });
            }
        });

        ui.add_space(style::SECTION_SPACING);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.heading("¿Interesado en Nuestros Servicios?");
            ui.label("Contáctanos para discutir tu proyecto y obtener una cotización personalizada");
            ui.add_space(6.0);
            if ui.button("Contactar Ahora").clicked() {
                ctx.navigate(Page::Contact);
            }
            ui.add_space(10.0);
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
