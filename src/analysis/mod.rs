// src/analysis/mod.rs
pub mod combination;
pub mod execution;

// Re-export commonly used types
pub use combination::{
    analyze_combination,
    AnalysisIssue,
    CombinationAnalysis,
    CostEstimate,
    KeyRequirement,
    SubnetCost,
};
pub use execution::{
    execute_combination,
    CostBreakdown,
    ExecutionOutputs,
    ExecutionResult,
    SubnetCharge,
};
