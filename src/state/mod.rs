// src/state/mod.rs
use std::collections::HashMap;

use crate::analysis::{analyze_combination, execute_combination};
use crate::catalog::Catalog;

pub mod task;
pub mod wizard;

pub use task::{PendingTask, TaskKind};
pub use wizard::{Step, Wizard};

// Core application state
#[derive(Debug)]
pub struct AppState {
    /// Immutable reference data, replaced wholesale on catalog override.
    pub catalog: Catalog,

    // Wizard state machine
    pub wizard: Wizard,

    // In-flight mock call, if any
    pub pending: Option<PendingTask>,

    /// Key input not yet committed by field blur, keyed by subnet id.
    pub key_drafts: HashMap<String, String>,

    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            wizard: Wizard::new(),
            pending: None,
            key_drafts: HashMap::new(),
            error_message: None,
        }
    }

    pub fn start_analysis(&mut self) {
        if self.wizard.begin_analysis() {
            log::debug!(
                "Analyzing combination of {} subnets",
                self.wizard.selected_subnets.len()
            );
            self.pending = Some(PendingTask::analyze());
        }
    }

    pub fn start_execution(&mut self) {
        if self.wizard.begin_execution() {
            log::debug!(
                "Executing combination of {} subnets",
                self.wizard.selected_subnets.len()
            );
            self.pending = Some(PendingTask::execute());
        }
    }

    /// Drives the in-flight mock call; called once per frame.
    pub fn poll(&mut self) {
        let finished = self
            .pending
            .as_ref()
            .filter(|task| task.finished())
            .map(|task| task.kind);

        if let Some(kind) = finished {
            self.pending = None;
            self.complete(kind);
        }
    }

    fn complete(&mut self, kind: TaskKind) {
        match kind {
            TaskKind::Analyze => {
                let analysis = analyze_combination(&self.catalog, &self.wizard.selected_subnets);
                log::info!(
                    "Analysis complete: {} key requirements",
                    analysis.keys_required.len()
                );
                self.wizard.finish_analysis(analysis);
            }
            TaskKind::Execute => {
                let result = execute_combination(&self.catalog, &self.wizard.selected_subnets);
                log::info!("Execution complete: {}", result.summary);
                self.wizard.finish_execution(result);
            }
        }
    }

    /// The "start new project" transition: drops the wizard state, the
    /// uncommitted drafts, and any in-flight task. The catalog stays.
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.key_drafts.clear();
        self.pending = None;
    }
}
