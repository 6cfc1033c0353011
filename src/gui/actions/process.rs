// src/gui/actions/process.rs
//
// One batch at a time on a worker thread. The worker owns its source and
// reports through GuiProgress; the UI thread polls for the finished report.

use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    core::url,
    data::RowFilter,
    gui::{
        app::{App, Job, LastRun},
        progress::GuiProgress,
    },
    input,
    profile::{BatchReport, ProfileProcessor, SampleSource},
};

/// URLs from the loaded file's chosen column, else from the manual box.
pub fn collect_urls(app: &App) -> Vec<String> {
    match (&app.input_table, app.state.gui.input_column) {
        (Some(table), Some(col)) => table.column_values(col),
        _ => input::parse_text(&app.state.gui.manual_urls),
    }
}

pub fn process(app: &mut App) {
    if app.running() {
        logd!("Process: Clicked while a batch is running");
        return;
    }

    let urls = collect_urls(app);
    if urls.is_empty() {
        app.status("Please provide LinkedIn profile URLs");
        return;
    }

    let (valid, invalid) = url::partition(&urls);
    if valid.is_empty() {
        logf!("Process: No valid urls among {}", urls.len());
        app.status("No valid LinkedIn URLs found");
        return;
    }

    let note = if invalid.is_empty() {
        s!()
    } else {
        logw!("Process: {} of {} urls invalid", invalid.len(), urls.len());
        format!("Found {} invalid LinkedIn URLs (skipped). ", invalid.len())
    };
    app.status(format!("{note}Processing {} LinkedIn profiles...", valid.len()));

    let opts = app.state.options.process.clone();
    let status = app.status.clone();
    let (tx, rx) = mpsc::channel::<BatchReport>();
    logf!("Process: Begin valid={} invalid={} seed={:?}", valid.len(), invalid.len(), opts.seed);

    let spawned = thread::Builder::new()
        .name(s!("batch"))
        .spawn(move || {
            let mut progress = GuiProgress::new(status);
            let mut processor = ProfileProcessor::from_options(SampleSource::new(opts.seed), &opts);
            let report = processor.process_batch(&valid, &mut progress);
            if tx.send(report).is_err() {
                loge!("Process: UI went away before the batch finished");
            }
        });

    match spawned {
        Ok(_) => app.job = Some(Job { rx, invalid: invalid.len() }),
        Err(e) => {
            loge!("Process: Could not start worker: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

/// Called every frame. Picks up a finished report, or keeps the UI repainting while busy.
pub fn poll(app: &mut App, ctx: &egui::Context) {
    let Some(job) = &app.job else { return };

    match job.rx.try_recv() {
        Ok(report) => {
            let invalid = job.invalid;
            app.job = None;
            finish(app, report, invalid);
        }
        Err(TryRecvError::Empty) => ctx.request_repaint_after(Duration::from_millis(100)),
        Err(TryRecvError::Disconnected) => {
            app.job = None;
            loge!("Process: Worker ended without a report");
            app.status("Processing stopped unexpectedly");
        }
    }
}

fn finish(app: &mut App, report: BatchReport, invalid: usize) {
    let processed = report.processed;
    let failures: Vec<String> = report
        .failures()
        .map(|(url, msg)| format!("{url}: {msg}"))
        .collect();

    if report.is_empty() {
        app.last_run = Some(LastRun { processed, invalid, rows: 0, failures });
        app.status("No data could be extracted from the provided URLs");
        return;
    }

    let opts = &app.state.options.process;
    let mut set = report.into_result_set();
    set.retain(&RowFilter::post_pass(opts.hr_only, opts.certified_only));
    logf!("Process: Done processed={} rows_kept={}", processed, set.len());

    app.status(format!(
        "Successfully processed {} profiles ({} rows). See the Results tab.",
        processed,
        set.len()
    ));
    app.last_run = Some(LastRun { processed, invalid, rows: set.len(), failures });
    app.results = Some(set);
}
