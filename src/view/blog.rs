// Blog page - post cards with author, date, reading time, and tags

use eframe::egui;

use crate::model::{self, BlogPost, DataError, TeamMember};
use crate::router::{NavOptions, Page};
use crate::style;
use crate::view::{card, placeholder_ui, truncate, Modal, PageView, ViewContext, ViewFrame};

pub struct BlogView {
    frame: ViewFrame,
    posts: Vec<BlogPost>,
    authors: Vec<TeamMember>,
}

impl BlogView {
    pub fn new() -> Self {
        Self {
            frame: ViewFrame::new(),
            posts: Vec::new(),
            authors: Vec::new(),
        }
    }

    fn build(&mut self) -> Result<(), DataError> {
        self.posts = model::sample_posts()?;
        self.authors = model::sample_team()?;
        Ok(())
    }

    fn author_name(&self, author_id: u32) -> &str {
        self.authors
            .iter()
            .find(|a| a.id == author_id)
            .map(|a| a.name)
            .unwrap_or("Autor Desconocido")
    }

    fn post_card(&self, ui: &mut egui::Ui, post: &BlogPost, ctx: &ViewContext) {
        card(ui, style::CARD_WIDTH, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} · {} · {}",
                    self.author_name(post.author_id),
                    post.formatted_date(),
                    post.reading_time()
                ))
                .size(11.0)
                .weak(),
            );
            ui.label(egui::RichText::new(post.title).strong().size(15.0));
            ui.label(egui::RichText::new(truncate(post.content, 200)).size(12.0));
            ui.horizontal_wrapped(|ui| {
                for tag in post.tags {
                    style::chip(ui, tag);
                }
            });
            if ui.button("Leer Más").clicked() {
                ctx.open_modal(Modal::BlogPost(post.id));
            }
        });
    }
}

impl PageView for BlogView {
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
        self.frame.begin_render();
        match self.build() {
            Ok(()) => {
                if self.posts.is_empty() {
                    self.frame.empty("No hay publicaciones disponibles");
                } else {
                    self.frame.ready();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading blog");
                self.frame.fail("Error al cargar el blog");
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
            ui.heading("Blog DevTeam");
            ui.label("Ideas, reflexiones y conocimientos de nuestro equipo de desarrollo");
        });
        ui.separator();

        style::section_heading(ui, "Últimas Publicaciones");
        ui.label(
            "Nuestro equipo comparte regularmente ideas sobre desarrollo, tecnología y mejores \
             prácticas. Mantente al día con las últimas tendencias y aprendizajes.",
        );
        ui.add_space(style::CARD_SPACING);

        ui.horizontal_wrapped(|ui| {
            for post in &self.posts {
                self.post_card(ui, post, ctx);
            }
        });
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
