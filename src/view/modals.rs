// Modal rendering (project details, member profile, blog post, schedule call, submit success)

use eframe::egui;

use crate::model::{self, format_date_es, parse_date};
use crate::style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    ProjectDetails(u32),
    MemberProfile(u32),
    BlogPost(u32),
    ScheduleCall,
    ContactSuccess,
}

/// Draw the open modal. Returns false once the user closed it.
pub fn render(ctx: &egui::Context, modal: Modal) -> bool {
    let mut open = true;
    match modal {
        Modal::ProjectDetails(id) => modal_window(ctx, "Detalles del Proyecto", |ui| {
            project_details(ui, id, &mut open);
        }),
        Modal::MemberProfile(id) => modal_window(ctx, "Perfil", |ui| {
            member_profile(ui, id, &mut open);
        }),
        Modal::BlogPost(id) => modal_window(ctx, "Artículo", |ui| {
            blog_post(ui, id, &mut open);
        }),
        Modal::ScheduleCall => modal_window(ctx, "Agendar Videollamada", |ui| {
            schedule_call(ui, &mut open);
        }),
        Modal::ContactSuccess => modal_window(ctx, "¡Mensaje Enviado!", |ui| {
            contact_success(ui, &mut open);
        }),
    }
    open
}

fn modal_window(ctx: &egui::Context, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(style::modal_width(ctx))
        .show(ctx, |ui| {
            ui.set_max_height(style::modal_max_height(ctx));
            egui::ScrollArea::vertical().show(ui, add_contents);
        });
}

fn close_button(ui: &mut egui::Ui, open: &mut bool) {
    ui.add_space(10.0);
    if ui.button("Cerrar").clicked() {
        *open = false;
    }
}

fn data_error(ui: &mut egui::Ui, open: &mut bool) {
    ui.colored_label(style::DANGER, "Error al cargar los datos");
    close_button(ui, open);
}

fn project_details(ui: &mut egui::Ui, id: u32, open: &mut bool) {
    let (Ok(projects), Ok(team)) = (model::sample_projects(), model::sample_team()) else {
        data_error(ui, open);
        return;
    };
    let Some(project) = projects.iter().find(|p| p.id == id) else {
        data_error(ui, open);
        return;
    };

    ui.heading(project.title);
    style::status_badge(ui, project.status);
    ui.add_space(6.0);
    ui.label(project.description);

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Tecnologías Utilizadas").strong());
    ui.horizontal_wrapped(|ui| {
        for tech in project.technologies {
            style::chip(ui, tech);
        }
    });

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Equipo del Proyecto").strong());
    for member in team.iter().filter(|m| project.team_members.contains(&m.id)) {
        ui.horizontal(|ui| {
            style::initials_avatar(ui, &member.initials(), 28.0);
            ui.label(member.name);
            ui.label(egui::RichText::new(member.position).weak().size(11.0));
        });
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Información del Proyecto").strong());
    if let Some(date) = parse_date(project.start_date) {
        ui.label(format!("Fecha de Inicio: {}", format_date_es(date)));
    }
    if let Some(date) = project.end_date.and_then(parse_date) {
        ui.label(format!("Fecha de Finalización: {}", format_date_es(date)));
    }
    ui.label(format!("Duración: {}", project.duration()));

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if let Some(url) = project.github_url {
            if ui.button("Ver en GitHub").clicked() {
                if let Err(e) = open::that(url) {
                    tracing::warn!(error = %e, "could not open project link");
                }
            }
        }
        if let Some(url) = project.live_url {
            if ui.button("Ver Proyecto Live").clicked() {
                if let Err(e) = open::that(url) {
                    tracing::warn!(error = %e, "could not open project link");
                }
            }
        }
    });

    close_button(ui, open);
}

fn member_profile(ui: &mut egui::Ui, id: u32, open: &mut bool) {
    let (Ok(team), Ok(projects), Ok(posts)) = (
        model::sample_team(),
        model::sample_projects(),
        model::sample_posts(),
    ) else {
        data_error(ui, open);
        return;
    };
    let Some(member) = team.iter().find(|m| m.id == id) else {
        data_error(ui, open);
        return;
    };

    ui.horizontal(|ui| {
        style::initials_avatar(ui, &member.initials(), style::AVATAR_SIZE_LARGE);
        ui.vertical(|ui| {
            ui.heading(member.name);
            ui.label(egui::RichText::new(member.position).weak());
        });
    });
    ui.add_space(6.0);
    ui.label(member.bio);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button(format!("📧 {}", member.email)).clicked() {
            if let Err(e) = open::that(format!("mailto:{}", member.email)) {
                tracing::warn!(error = %e, "could not open mail client");
            }
        }
        if let Some(url) = member.github {
            if ui.button("📂 GitHub").clicked() {
                if let Err(e) = open::that(url) {
                    tracing::warn!(error = %e, "could not open profile link");
                }
            }
        }
        if let Some(url) = member.linkedin {
            if ui.button("💼 LinkedIn").clicked() {
                if let Err(e) = open::that(url) {
                    tracing::warn!(error = %e, "could not open profile link");
                }
            }
        }
    });

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Habilidades Técnicas").strong());
    ui.horizontal_wrapped(|ui| {
        for skill in member.skills {
            style::chip(ui, skill);
        }
    });

    let joined: Vec<_> = projects
        .iter()
        .filter(|p| p.team_members.contains(&member.id))
        .collect();
    if !joined.is_empty() {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("Proyectos Participados ({})", joined.len())).strong(),
        );
        for project in joined {
            ui.label(format!("• {}", project.title));
            ui.label(
                egui::RichText::new(format!("   {}", project.status.label()))
                    .size(11.0)
                    .weak(),
            );
        }
    }

    let authored: Vec<_> = posts.iter().filter(|p| p.author_id == member.id).collect();
    if !authored.is_empty() {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("Artículos del Blog ({})", authored.len())).strong(),
        );
        for post in authored {
            ui.label(format!("• {}", post.title));
            ui.label(
                egui::RichText::new(format!(
                    "   {} · {}",
                    post.formatted_date(),
                    post.reading_time()
                ))
                .size(11.0)
                .weak(),
            );
        }
    }

    close_button(ui, open);
}

fn blog_post(ui: &mut egui::Ui, id: u32, open: &mut bool) {
    let (Ok(posts), Ok(team)) = (model::sample_posts(), model::sample_team()) else {
        data_error(ui, open);
        return;
    };
    let Some(post) = posts.iter().find(|p| p.id == id) else {
        data_error(ui, open);
        return;
    };
    let author = team.iter().find(|m| m.id == post.author_id);

    ui.heading(post.title);
    ui.horizontal(|ui| {
        if let Some(author) = author {
            style::initials_avatar(ui, &author.initials(), 28.0);
            ui.label(author.name);
        } else {
            ui.label("Autor Desconocido");
        }
        ui.label(
            egui::RichText::new(format!(
                "{} · {}",
                post.formatted_date(),
                post.reading_time()
            ))
            .weak()
            .size(11.0),
        );
    });
    ui.horizontal_wrapped(|ui| {
        for tag in post.tags {
            style::chip(ui, tag);
        }
    });

    ui.add_space(8.0);
    for paragraph in post.paragraphs() {
        ui.label(paragraph);
        ui.add_space(6.0);
    }

    if let Some(author) = author {
        ui.separator();
        ui.label(egui::RichText::new("Sobre el Autor").strong());
        ui.horizontal(|ui| {
            style::initials_avatar(ui, &author.initials(), 36.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(author.name).strong());
                ui.label(egui::RichText::new(author.bio).size(11.0));
                ui.label(egui::RichText::new(author.email).size(11.0).weak());
            });
        });
    }

    close_button(ui, open);
}

fn schedule_call(ui: &mut egui::Ui, open: &mut bool) {
    ui.label(
        "Para agendar una videollamada gratuita de 30 minutos, por favor contáctanos por email \
         o teléfono y te enviaremos un enlace de calendario.",
    );
    ui.add_space(6.0);
    ui.label("Email: info@devteam.com");
    ui.label("Teléfono: +1 (555) 123-4567");
    ui.add_space(6.0);
    ui.label(egui::RichText::new("Horarios Disponibles:").strong());
    ui.label("• Lunes a Viernes: 9:00 AM - 5:00 PM");
    ui.label("• Zona horaria: EST (UTC-5)");
    ui.label("• Duración: 30 minutos");
    ui.label("• Plataforma: Google Meet o Zoom");
    close_button(ui, open);
}

fn contact_success(ui: &mut egui::Ui, open: &mut bool) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("✅").size(30.0));
        ui.label(
            "Gracias por contactarnos. Hemos recibido tu mensaje y te responderemos dentro de \
             las próximas 24 horas.",
        );
    });
    close_button(ui, open);
}
