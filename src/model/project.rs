// Project records, status taxonomy, and the static sample portfolio

use super::{parse_date, DataError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planning,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completado",
            Self::InProgress => "En Progreso",
            Self::Planning => "Planificación",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub status: ProjectStatus,
    pub start_date: &'static str,
    pub end_date: Option<&'static str>,
    pub team_members: &'static [u32],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

impl Project {
    /// Elapsed project time in days, or "En progreso" while there is no end date.
    pub fn duration(&self) -> String {
        let start = parse_date(self.start_date);
        let end = self.end_date.and_then(parse_date);
        match (start, end) {
            (Some(start), Some(end)) => format!("{} días", (end - start).num_days().abs()),
            _ => "En progreso".to_string(),
        }
    }

    fn is_valid(&self) -> bool {
        !self.title.is_empty()
            && !self.description.is_empty()
            && !self.technologies.is_empty()
            && parse_date(self.start_date).is_some()
            && self.end_date.map_or(true, |d| parse_date(d).is_some())
    }
}

pub fn sample_projects() -> Result<Vec<Project>, DataError> {
    let projects = vec![
        Project {
            id: 1,
            title: "Sistema de Gestión Empresarial",
            description: "Desarrollo de un sistema completo de gestión empresarial con módulos \
                de inventario, facturación, recursos humanos y reportes. Implementado con \
                arquitectura microservicios para garantizar escalabilidad y mantenibilidad.",
            technologies: &["React", "Node.js", "MongoDB", "Docker", "AWS"],
            status: ProjectStatus::Completed,
            start_date: "2025-01-15",
            end_date: Some("2025-06-30"),
            team_members: &[1, 2, 3],
            github_url: Some("https://github.com/devteam/sistema-gestion"),
            live_url: Some("https://sistema-gestion.devteam.com"),
        },
        Project {
            id: 2,
            title: "Aplicación Móvil de E-commerce",
            description: "Desarrollo de una aplicación móvil multiplataforma para comercio \
                electrónico, incluyendo catálogo de productos, carrito de compras, sistema de \
                pagos y notificaciones push. Integrada con API REST y base de datos en la nube.",
            technologies: &["React Native", "Firebase", "Stripe", "Redux", "TypeScript"],
            status: ProjectStatus::Completed,
            start_date: "2025-03-01",
            end_date: Some("2025-08-15"),
            team_members: &[1, 3, 4],
            github_url: Some("https://github.com/devteam/ecommerce-mobile"),
            live_url: Some("https://play.google.com/store/apps/devteam-ecommerce"),
        },
        Project {
            id: 3,
            title: "Plataforma de Aprendizaje Online",
            description: "Creación de una plataforma educativa con cursos interactivos, sistema \
                de videoconferencias, evaluaciones automáticas y seguimiento del progreso \
                estudiantil. Incluye panel administrativo para instructores.",
            technologies: &["Vue.js", "Python", "Django", "PostgreSQL", "WebRTC"],
            status: ProjectStatus::InProgress,
            start_date: "2025-09-01",
            end_date: None,
            team_members: &[2, 3, 4],
            github_url: Some("https://github.com/devteam/learning-platform"),
            live_url: None,
        },
        Project {
            id: 4,
            title: "Dashboard de Analytics",
            description: "Desarrollo de un dashboard interactivo para visualización de datos y \
                análisis de métricas empresariales. Incluye gráficos dinámicos, filtros \
                avanzados y exportación de reportes.",
            technologies: &["Angular", "D3.js", "Python", "FastAPI", "ClickHouse"],
            status: ProjectStatus::Planning,
            start_date: "2026-01-15",
            end_date: None,
            team_members: &[1, 2],
            github_url: None,
            live_url: None,
        },
    ];

    for project in &projects {
        if !project.is_valid() {
            return Err(DataError::InvalidProject(project.id));
        }
    }
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_in_days() {
        let projects = sample_projects().unwrap();
        assert_eq!(projects[0].duration(), "166 días");
        assert_eq!(projects[2].duration(), "En progreso");
    }

    #[test]
    fn bad_date_fails_validation() {
        let mut project = sample_projects().unwrap().remove(0);
        project.start_date = "not-a-date";
        assert!(!project.is_valid());
    }
}
