// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::ResultSet,
    input::InputTable,
    profile::BatchReport,
};

use super::{
    actions,
    components,
    pages::Page,
    progress::{self, SharedStatus, Status},
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "LinkedIn Profile Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// A batch running on a worker thread.
pub struct Job {
    pub rx: Receiver<BatchReport>,
    /// URLs rejected before the worker started
    pub invalid: usize,
}

/// Outcome of the last finished batch, for the Upload tab.
#[derive(Clone, Debug, Default)]
pub struct LastRun {
    pub processed: usize,
    pub invalid: usize,
    pub rows: usize,
    pub failures: Vec<String>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // upload tab
    pub input_table: Option<InputTable>,

    // rows of the last successful pass, post-pass filters applied
    pub results: Option<ResultSet>,
    pub last_run: Option<LastRun>,

    // status/progress (worker writes here)
    pub status: SharedStatus,
    pub job: Option<Job>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.display_path();
        logf!("Init: default page={}", router::page_at(state.gui.current_page_index).title());
        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            input_table: None,
            results: None,
            last_run: None,
            status: Arc::new(Mutex::new(Status { text: s!("Idle"), ..Status::default() })),
            job: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }

    #[inline]
    pub fn running(&self) -> bool { self.job.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        progress::lock(&self.status).text = msg.into();
    }

    pub fn status_snapshot(&self) -> Status {
        progress::lock(&self.status).clone()
    }

    /// Keep the output field in sync with ExportOptions unless the user is editing it.
    pub fn refresh_out_path_text(&mut self) {
        if !self.out_path_dirty {
            self.out_path_text = self.state.options.export.display_path();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self, ctx);

        egui::SidePanel::left("config")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
