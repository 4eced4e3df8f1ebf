// DevTeam - the team's marketing site as a native desktop application

mod app;
mod config;
mod input;
mod model;
mod router;
mod state;
mod storage;
mod style;
mod view;
mod worker;

use clap::Parser;
use eframe::egui;

use app::DevTeamApp;

/// DevTeam marketing site
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Initial route, e.g. "/servicios"
    route: Option<String>,

    /// Clear persisted navigation and theme state before starting
    #[arg(long)]
    reset_state: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("devteam=info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "initializing DevTeam application"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("DevTeam - Equipo de Desarrollo Profesional"),
        ..Default::default()
    };

    eframe::run_native(
        "DevTeam",
        options,
        Box::new(move |cc| Ok(Box::new(DevTeamApp::new(cc, cli.route, cli.reset_state)))),
    )
}
