// src/gui/progress.rs
use std::sync::{Arc, Mutex, MutexGuard};

use crate::progress::Progress;

/// What the worker shares with the UI thread.
#[derive(Clone, Debug, Default)]
pub struct Status {
    pub text: String,
    pub done: usize,
    pub total: usize,
}

impl Status {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 { 0.0 } else { self.done as f32 / self.total as f32 }
    }
}

pub type SharedStatus = Arc<Mutex<Status>>;

/// Lock the shared status, recovering it if a worker panicked mid-update.
pub fn lock(status: &SharedStatus) -> MutexGuard<'_, Status> {
    status.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct GuiProgress {
    status: SharedStatus,
}

impl GuiProgress {
    pub fn new(status: SharedStatus) -> Self {
        Self { status }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        let mut s = lock(&self.status);
        s.done = 0;
        s.total = total;
    }
    fn log(&mut self, msg: &str) {
        lock(&self.status).text = s!(msg);
    }
    fn item_done(&mut self, done: usize, total: usize) {
        let mut s = lock(&self.status);
        s.done = done;
        s.total = total;
        s.text = format!("Processing profile {done} of {total}");
    }
    fn finish(&mut self) {
        let mut s = lock(&self.status);
        s.text = if s.total == 0 {
            s!("Processing complete")
        } else {
            format!("Processing complete ({}/{})", s.done, s.total)
        };
    }
}
