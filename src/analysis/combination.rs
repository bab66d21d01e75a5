// src/analysis/combination.rs
use serde::{Serialize, Deserialize};

use crate::catalog::Catalog;

/// Selections past this size get an optimization warning.
const FOCUS_LIMIT: usize = 3;

const SETUP_TIME: &str = "2-5 minutes";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationAnalysis {
    pub feasible: bool,
    pub summary: String,
    pub issues: Vec<AnalysisIssue>,
    pub cost: CostEstimate,
    pub keys_required: Vec<KeyRequirement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisIssue {
    pub kind: String,
    pub description: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    pub free_tier_available: bool,
    pub cost_per_request: String,
    pub breakdown: Vec<SubnetCost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubnetCost {
    pub subnet: String,
    pub cost: String,
}

/// Which secret a subnet needs before execution, with everything the key
/// screen displays for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRequirement {
    pub subnet: String,
    pub service_name: String,
    pub purpose: String,
    pub free_tier: bool,
    pub key_url: String,
    pub setup_time: String,
}

/// Deterministic stand-in for the real feasibility call. The verdict is
/// always feasible; the only issue raised is an optimization hint once the
/// selection grows past [`FOCUS_LIMIT`]. Emits exactly one key requirement
/// per selected subnet, in selection order, resolving unknown ids through
/// the catalog fallback.
pub fn analyze_combination(catalog: &Catalog, selection: &[String]) -> CombinationAnalysis {
    let issues = if selection.len() > FOCUS_LIMIT {
        vec![AnalysisIssue {
            kind: "optimization".to_string(),
            description: "Many subnets selected. Consider focusing on top 3 for cost efficiency."
                .to_string(),
            suggestion: "Remove lowest priority subnets".to_string(),
        }]
    } else {
        Vec::new()
    };

    let breakdown = selection
        .iter()
        .map(|sn| {
            let detail = catalog.detail(sn);
            SubnetCost {
                subnet: sn.clone(),
                cost: if detail.has_free_tier() {
                    "$0.00 (free tier)".to_string()
                } else {
                    format!("${:.2}", catalog.pricing.paid_tier_cost)
                },
            }
        })
        .collect();

    let keys_required = selection
        .iter()
        .map(|sn| {
            let detail = catalog.detail(sn);
            KeyRequirement {
                subnet: sn.clone(),
                free_tier: detail.has_free_tier(),
                service_name: detail.name,
                purpose: detail.function,
                key_url: catalog.key_url(sn).to_string(),
                setup_time: SETUP_TIME.to_string(),
            }
        })
        .collect();

    CombinationAnalysis {
        feasible: true,
        summary: format!(
            "Combination of {} subnets is feasible with optimizations available.",
            selection.len()
        ),
        issues,
        cost: CostEstimate {
            free_tier_available: true,
            cost_per_request: format!("{:.2}", catalog.pricing.cost_per_request),
            breakdown,
        },
        keys_required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_requirement_per_selected_subnet() {
        let selection = ids(&["SN64", "SN13", "SN999"]);
        let analysis = analyze_combination(&catalog(), &selection);

        assert_eq!(analysis.keys_required.len(), 3);
        let order: Vec<&str> = analysis
            .keys_required
            .iter()
            .map(|k| k.subnet.as_str())
            .collect();
        assert_eq!(order, ["SN64", "SN13", "SN999"]);
    }

    #[test]
    fn unknown_subnets_get_fallback_requirements() {
        let analysis = analyze_combination(&catalog(), &ids(&["SN999"]));
        let req = &analysis.keys_required[0];

        assert_eq!(req.service_name, "SN999");
        assert_eq!(req.purpose, "Bittensor subnet");
        assert!(req.free_tier);
        assert_eq!(req.key_url, "https://bittensor.com/subnets");
        assert_eq!(req.setup_time, "2-5 minutes");
    }

    #[test]
    fn known_subnets_get_catalog_requirements() {
        let analysis = analyze_combination(&catalog(), &ids(&["SN64"]));
        let req = &analysis.keys_required[0];

        assert_eq!(req.service_name, "Chutes");
        assert_eq!(req.purpose, "GPU compute, inference");
        assert!(req.free_tier);
        assert_eq!(req.key_url, "https://chutes.ai/dashboard/api-keys");
    }

    #[test]
    fn small_selections_raise_no_issues() {
        let analysis = analyze_combination(&catalog(), &ids(&["SN64", "SN62", "SN13"]));
        assert!(analysis.feasible);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn oversized_selections_raise_an_optimization_issue() {
        let analysis = analyze_combination(&catalog(), &ids(&["SN64", "SN62", "SN13", "SN19"]));
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(analysis.issues[0].kind, "optimization");
        assert_eq!(analysis.issues[0].suggestion, "Remove lowest priority subnets");
    }

    #[test]
    fn cost_breakdown_distinguishes_paid_only_subnets() {
        let analysis = analyze_combination(&catalog(), &ids(&["SN51", "SN64", "SN999"]));
        let costs: Vec<&str> = analysis
            .cost
            .breakdown
            .iter()
            .map(|c| c.cost.as_str())
            .collect();

        assert_eq!(costs, ["$0.05", "$0.00 (free tier)", "$0.00 (free tier)"]);
        assert!(analysis.cost.free_tier_available);
        assert_eq!(analysis.cost.cost_per_request, "0.02");
    }

    #[test]
    fn summary_counts_the_selection() {
        let analysis = analyze_combination(&catalog(), &ids(&["SN64", "SN62"]));
        assert_eq!(
            analysis.summary,
            "Combination of 2 subnets is feasible with optimizations available."
        );
    }
}
