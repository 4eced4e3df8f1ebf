// Projects page - status filter and the project portfolio grid

use eframe::egui;

use crate::model::{self, DataError, Project, ProjectStatus};
use crate::router::{NavOptions, Page};
use crate::style;
use crate::view::{card, placeholder_ui, truncate, Modal, PageView, ViewContext, ViewFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Status(ProjectStatus),
}

impl StatusFilter {
    const ALL_FILTERS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Status(ProjectStatus::Completed),
        StatusFilter::Status(ProjectStatus::InProgress),
        StatusFilter::Status(ProjectStatus::Planning),
    ];

    fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "Todos",
            StatusFilter::Status(ProjectStatus::Completed) => "Completados",
            StatusFilter::Status(ProjectStatus::InProgress) => "En Progreso",
            StatusFilter::Status(ProjectStatus::Planning) => "Planificación",
        }
    }

    fn matches(self, project: &Project) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => project.status == status,
        }
    }
}

pub struct ProjectsView {
    frame: ViewFrame,
    projects: Vec<Project>,
    filter: StatusFilter,
}

impl ProjectsView {
    pub fn new() -> Self {
        Self {
            frame: ViewFrame::new(),
            projects: Vec::new(),
            filter: StatusFilter::All,
        }
    }

    fn build(&mut self) -> Result<(), DataError> {
        self.projects = model::sample_projects()?;
        self.filter = StatusFilter::All;
        Ok(())
    }

    fn filtered(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    fn project_card(ui: &mut egui::Ui, project: &Project, ctx: &ViewContext) {
        card(ui, style::CARD_WIDTH, |ui| {
            ui.horizontal(|ui| {
                style::truncated_label(ui, egui::RichText::new(project.title).strong());
                style::status_badge(ui, project.status);
            });
            ui.label(egui::RichText::new(truncate(project.description, 120)).size(12.0));
            ui.horizontal_wrapped(|ui| {
                for tech in project.technologies {
                    style::chip(ui, tech);
                }
            });
            ui.label(
                egui::RichText::new(format!(
                    "Duración: {} · Equipo: {} miembros",
                    project.duration(),
                    project.team_members.len()
                ))
                .size(11.0)
                .weak(),
            );
            ui.horizontal(|ui| {
                if ui.button("Ver Detalles").clicked() {
                    ctx.open_modal(Modal::ProjectDetails(project.id));
                }
                if let Some(url) = project.github_url {
                    if ui.small_button("📂 GitHub").clicked() {
                        if let Err(e) = open::that(url) {
                            tracing::warn!(error = %e, "could not open project link");
                        }
                    }
                }
                if let Some(url) = project.live_url {
                    if ui.small_button("🌐 Ver Proyecto").clicked() {
                        if let Err(e) = open::that(url) {
                            tracing::warn!(error = %e, "could not open project link");
                        }
                    }
                }
            });
        });
    }
}

impl PageView for ProjectsView {
    fn page(&self) -> Page {
        Page::Projects
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
                tracing::error!(error = %e, "error loading projects");
                self.frame.fail("Error al cargar los proyectos");
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
            ui.heading("Nuestros Proyectos");
            ui.label("Descubre los proyectos que hemos desarrollado con pasión y dedicación");
        });
        ui.separator();

        style::section_heading(ui, "Filtrar Proyectos");
        ui.horizontal(|ui| {
            for filter in StatusFilter::ALL_FILTERS {
                if ui
                    .selectable_label(self.filter == filter, filter.label())
                    .clicked()
                {
                    self.filter = filter;
                }
            }
        });
        ui.add_space(style::CARD_SPACING);

        let filtered = self.filtered();
        if filtered.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label("No hay proyectos que coincidan con el filtro seleccionado.");
            });
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for project in filtered {
                Self::project_card(ui, project, ctx);
            }
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
    fn filter_matches_by_status() {
        let projects = model::sample_projects().unwrap();
        let completed: Vec<_> = projects
            .iter()
            .filter(|p| StatusFilter::Status(ProjectStatus::Completed).matches(p))
            .collect();
        assert_eq!(completed.len(), 2);
        let all: Vec<_> = projects
            .iter()
            .filter(|p| StatusFilter::All.matches(p))
            .collect();
        assert_eq!(all.len(), projects.len());
    }

    #[test]
    fn prepare_resets_the_filter() {
        let mut view = ProjectsView::new();
        view.prepare(None);
        view.filter = StatusFilter::Status(ProjectStatus::Planning);
        view.prepare(None);
        assert_eq!(view.filter, StatusFilter::All);
        assert!(view.frame.is_ready());
    }
}
