// Home page - hero, feature highlights, and previews of the other sections

use eframe::egui;

use crate::model::{self, BlogPost, DataError, Project, TeamMember};
use crate::router::{NavOptions, Page};
use crate::style;
use crate::view::{card, placeholder_ui, truncate, PageView, ViewContext, ViewFrame};

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🎯",
        "Experiencia",
        "Más de 5 años desarrollando soluciones tecnológicas innovadoras para empresas de todos los tamaños.",
    ),
    (
        "💡",
        "Innovación",
        "Utilizamos las últimas tecnologías y mejores prácticas para crear productos de vanguardia.",
    ),
    (
        "✨",
        "Calidad",
        "Código limpio, documentado y siguiendo estándares internacionales de desarrollo.",
    ),
    (
        "🤝",
        "Colaboración",
        "Trabajamos estrechamente con nuestros clientes para entender sus necesidades específicas.",
    ),
];

const SERVICE_PREVIEWS: [(&str, &str, &str); 4] = [
    ("🎨", "Desarrollo Frontend", "Interfaces modernas y responsivas"),
    ("⚙️", "Desarrollo Backend", "APIs robustas y escalables"),
    ("📱", "Apps Móviles", "Aplicaciones nativas y multiplataforma"),
    ("☁️", "DevOps & Cloud", "Infraestructura y despliegue automatizado"),
];

pub struct HomeView {
    frame: ViewFrame,
    projects: Vec<Project>,
    team: Vec<TeamMember>,
    posts: Vec<BlogPost>,
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            frame: ViewFrame::new(),
            projects: Vec::new(),
            team: Vec::new(),
            posts: Vec::new(),
        }
    }

    fn build(&mut self) -> Result<(), DataError> {
        self.projects = model::sample_projects()?.into_iter().take(2).collect();
        self.team = model::sample_team()?.into_iter().take(3).collect();
        self.posts = model::sample_posts()?.into_iter().take(2).collect();
        Ok(())
    }

    fn hero(&self, ui: &mut egui::Ui, ctx: &ViewContext) {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(egui::RichText::new("Bienvenidos a DevTeam").size(30.0).strong());
            ui.add_space(6.0);
            ui.label(
                "Somos un equipo de desarrollo especializado en crear soluciones tecnológicas innovadoras",
            );
            ui.add_space(10.0);
            if ui
                .button(egui::RichText::new("Contáctanos").color(style::ACCENT))
                .clicked()
            {
                ctx.navigate(Page::Contact);
            }
            ui.add_space(20.0);
        });
        ui.separator();
    }

    fn about(&self, ui: &mut egui::Ui) {
        style::section_heading(ui, "Acerca de Nosotros");
        ui.label(
            "DevTeam es un equipo multidisciplinario de desarrolladores apasionados por la \
             tecnología. Nos especializamos en desarrollo web, aplicaciones móviles, y \
             soluciones de software personalizadas.",
        );
        ui.add_space(style::CARD_SPACING);
        ui.horizontal_wrapped(|ui| {
            for (icon, title, text) in FEATURES {
                card(ui, 220.0, |ui| {
                    ui.label(egui::RichText::new(icon).size(22.0));
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(egui::RichText::new(text).size(12.0));
                });
            }
        });
    }

    fn services_preview(&self, ui: &mut egui::Ui, ctx: &ViewContext) {
        style::section_heading(ui, "Nuestros Servicios");
        ui.label("Ofrecemos una amplia gama de servicios de desarrollo tecnológico");
        ui.add_space(style::CARD_SPACING);
        ui.horizontal_wrapped(|ui| {
            for (icon, title, text) in SERVICE_PREVIEWS {
                card(ui, 220.0, |ui| {
                    ui.label(egui::RichText::new(icon).size(22.0));
                    ui.label(egui::RichText::new(title).strong());
                    ui.label(egui::RichText::new(text).size(12.0));
                });
            }
        });
        if ui.button("Ver Todos los Servicios").clicked() {
            ctx.navigate(Page::Services);
        }
    }

    fn projects_preview(&self, ui: &mut egui::Ui, ctx: &ViewContext) {
        style::section_heading(ui, "Proyectos Destacados");
        ui.label("Algunos de nuestros trabajos más recientes");
        ui.add_space(style::CARD_SPACING);
        ui.horizontal_wrapped(|ui| {
            for project in &self.projects {
                card(ui, style::CARD_WIDTH, |ui| {
                    ui.label(egui::RichText::new(project.title).strong());
                    ui.label(truncate(project.description, 120));
                    ui.horizontal_wrapped(|ui| {
                        for tech in project.technologies.iter().take(3) {
                            style::chip(ui, tech);
                        }
                    });
                    style::status_badge(ui, project.status);
                });
            }
        });
        if ui.button("Ver Todos los Proyectos").clicked() {
            ctx.navigate(Page::Projects);
        }
    }

    fn team_preview(&self, ui: &mut egui::Ui, ctx: &ViewContext) {
        style::section_heading(ui, "Conoce Nuestro Equipo");
        ui.label("Profesionales apasionados por la tecnología");
        ui.add_space(style::CARD_SPACING);
        ui.horizontal_wrapped(|ui| {
            for member in &self.team {
                card(ui, 220.0, |ui| {
                    style::initials_avatar(ui, &member.initials(), style::AVATAR_SIZE);
                    ui.label(egui::RichText::new(member.name).strong());
                    ui.label(egui::RichText::new(member.position).size(12.0).weak());
                    ui.label(egui::RichText::new(truncate(member.bio, 80)).size(12.0));
                    ui.horizontal_wrapped(|ui| {
                        for skill in member.skills.iter().take(2) {
                            style::chip(ui, skill);
                        }
                    });
                });
            }
        });
        if ui.button("Conocer al Equipo Completo").clicked() {
            ctx.navigate(Page::Team);
        }
    }

    fn blog_preview(&self, ui: &mut egui::Ui, ctx: &ViewContext) {
        style::section_heading(ui, "Últimas Ideas del Blog");
        ui.label("Mantente al día con nuestras reflexiones y conocimientos");
        ui.add_space(style::CARD_SPACING);
        ui.horizontal_wrapped(|ui| {
            for post in &self.posts {
                card(ui, style::CARD_WIDTH, |ui| {
                    ui.label(egui::RichText::new(post.title).strong());
                    ui.label(
                        egui::RichText::new(format!(
                            "{} · {}",
                            post.formatted_date(),
                            post.reading_time()
                        ))
                        .size(11.0)
                        .weak(),
                    );
                    ui.label(truncate(post.content, 100));
                    ui.horizontal_wrapped(|ui| {
                        for tag in post.tags.iter().take(2) {
                            style::chip(ui, tag);
                        }
                    });
                });
            }
        });
        if ui.button("Leer Más Artículos").clicked() {
            ctx.navigate(Page::Blog);
        }
    }

    fn contact_cta(&self, ui: &mut egui::Ui, ctx: &ViewContext) {
        ui.add_space(style::SECTION_SPACING);
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading("¿Listo para Comenzar tu Proyecto?");
            ui.label("Contáctanos hoy y let's build something amazing together");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                // Center the two buttons by padding half the leftover width.
                let spacing = (ui.available_width() - 220.0).max(0.0) / 2.0;
                ui.add_space(spacing);
                if ui.button("Contáctanos").clicked() {
                    ctx.navigate(Page::Contact);
                }
                if ui.button("Ver Servicios").clicked() {
                    ctx.navigate(Page::Services);
                }
            });
            ui.add_space(12.0);
        });
    }
}

impl PageView for HomeView {
    fn page(&self) -> Page {
        Page::Home
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
            Ok(()) => self.frame.ready(),
            Err(e) => {
                tracing::error!(error = %e, "error loading home previews");
                self.frame.fail("Error al cargar la página de inicio");
            }
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &ViewContext) {
        if !self.frame.is_ready() {
            placeholder_ui(ui, &self.frame.state, ctx);
            return;
        }
        self.hero(ui, ctx);
        self.about(ui);
        self.services_preview(ui, ctx);
        self.projects_preview(ui, ctx);
        self.team_preview(ui, ctx);
        self.blog_preview(ui, ctx);
        self.contact_cta(ui, ctx);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
