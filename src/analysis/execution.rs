// src/analysis/execution.rs
use serde::{Serialize, Deserialize};

use crate::catalog::Catalog;

/// Everything the result screen renders, serialized verbatim as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub summary: String,
    pub execution_trace: Vec<String>,
    pub results: ExecutionOutputs,
    pub cost_breakdown: CostBreakdown,
    pub completed_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOutputs {
    pub data: String,
    pub compute: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub total: f64,
    pub by_subnet: Vec<SubnetCharge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetCharge {
    pub subnet: String,
    pub cost: f64,
}

/// Deterministic stand-in for the real multi-subnet run. Produces one
/// trace line per selected subnet, in selection order, and charges the
/// flat unit price per subnet. Entered keys are deliberately not consumed
/// here.
pub fn execute_combination(catalog: &Catalog, selection: &[String]) -> ExecutionResult {
    let execution_trace = selection
        .iter()
        .map(|sn| format!("{}: {} - Complete", sn, catalog.detail(sn).name))
        .collect();

    let by_subnet: Vec<SubnetCharge> = selection
        .iter()
        .map(|sn| SubnetCharge {
            subnet: sn.clone(),
            cost: catalog.pricing.unit_price,
        })
        .collect();

    ExecutionResult {
        summary: format!("Successfully executed across {} subnets.", selection.len()),
        execution_trace,
        results: ExecutionOutputs {
            data: "Fetched and processed".to_string(),
            compute: "Deployed and executed".to_string(),
            output: "Unified result generated".to_string(),
        },
        cost_breakdown: CostBreakdown {
            total: selection.len() as f64 * catalog.pricing.unit_price,
            by_subnet,
        },
        completed_at: chrono::Local::now().to_rfc3339(),
    }
}
