// Background worker - page preloading and the simulated contact submission

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use eframe::egui;

use crate::model;
use crate::router::Page;
use crate::view::ContactSubmission;

/// Simulated network delay for the contact form.
const SUBMIT_DELAY_MS: u64 = 2000;

pub enum WorkerCommand {
    /// Warm the sample data behind a page likely to be visited next.
    Preload(Page),
    SubmitContact(ContactSubmission),
}

pub enum WorkerResult {
    Preloaded { page: Page, items: usize },
    ContactSubmitted(Result<(), String>),
}

pub fn spawn_worker(ctx: egui::Context) -> (Sender<WorkerCommand>, Receiver<WorkerResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                WorkerCommand::Preload(page) => {
                    let _ = res_tx.send(preload(page));
                }
                WorkerCommand::SubmitContact(submission) => {
                    thread::sleep(Duration::from_millis(SUBMIT_DELAY_MS));
                    tracing::info!(
                        name = %submission.name,
                        from = %submission.email,
                        company = %submission.company,
                        phone = %submission.phone,
                        service = ?submission.service,
                        budget = ?submission.budget,
                        timeline = ?submission.timeline,
                        message_len = submission.message.len(),
                        "contact form submitted"
                    );
                    let _ = res_tx.send(WorkerResult::ContactSubmitted(Ok(())));
                }
            }
            ctx.request_repaint();
        }
    });

    (cmd_tx, res_rx)
}

fn preload(page: Page) -> WorkerResult {
    let items = match page {
        Page::Services => model::sample_services().map(|s| s.len()),
        Page::Projects => model::sample_projects().map(|p| p.len()),
        Page::Blog => model::sample_posts().map(|p| p.len()),
        Page::Team | Page::Contact => model::sample_team().map(|t| t.len()),
        Page::Home => Ok(0),
    }
    .unwrap_or_else(|e| {
        tracing::warn!(page = page.slug(), error = %e, "preload failed");
        0
    });
    WorkerResult::Preloaded { page, items }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preload_counts_sample_items() {
        match preload(Page::Services) {
            WorkerResult::Preloaded { page, items } => {
                assert_eq!(page, Page::Services);
                assert_eq!(items, 6);
            }
            WorkerResult::ContactSubmitted(_) => panic!("wrong result kind"),
        }
    }
}
