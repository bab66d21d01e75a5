// src/state/task.rs
use std::time::{Duration, Instant};

// Fixed artificial latencies standing in for the real calls
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(1500);
pub const EXECUTION_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Analyze,
    Execute,
}

/// One in-flight mock call. The frame loop polls it and performs the
/// completion transition once the delay has elapsed; there is no
/// cancellation and at most one task exists at a time.
#[derive(Debug)]
pub struct PendingTask {
    pub kind: TaskKind,
    started: Instant,
    duration: Duration,
}

impl PendingTask {
    pub fn analyze() -> Self {
        Self {
            kind: TaskKind::Analyze,
            started: Instant::now(),
            duration: ANALYSIS_DELAY,
        }
    }

    pub fn execute() -> Self {
        Self {
            kind: TaskKind::Execute,
            started: Instant::now(),
            duration: EXECUTION_DELAY,
        }
    }

    pub fn finished(&self) -> bool {
        self.started.elapsed() >= self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.started.elapsed())
    }
}
