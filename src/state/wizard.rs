// src/state/wizard.rs
use std::collections::HashMap;

use crate::analysis::{CombinationAnalysis, ExecutionResult};

// Wizard screens, in flow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Categories,
    Subnets,
    Analysis,
    Keys,
    Executing,
    Result,
}

/// The wizard state machine: every screen transition is a named method
/// here, so the whole flow is testable without a rendering surface.
///
/// Transitions are total. A call whose guard fails leaves the state
/// untouched, mirroring the disabled controls in the UI. Nothing in this
/// struct survives a reset.
#[derive(Debug, Default)]
pub struct Wizard {
    pub step: Step,
    pub query: String,
    pub selected_categories: Vec<String>,
    pub selected_subnets: Vec<String>,
    pub keys: HashMap<String, String>,
    pub analysis: Option<CombinationAnalysis>,
    pub result: Option<ExecutionResult>,
    pub loading: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_category(&mut self, id: &str) {
        toggle(&mut self.selected_categories, id);
    }

    pub fn toggle_subnet(&mut self, id: &str) {
        toggle(&mut self.selected_subnets, id);
    }

    pub fn category_selected(&self, id: &str) -> bool {
        self.selected_categories.iter().any(|c| c == id)
    }

    pub fn subnet_selected(&self, id: &str) -> bool {
        self.selected_subnets.iter().any(|s| s == id)
    }

    pub fn continue_to_subnets(&mut self) {
        if self.step == Step::Categories && !self.selected_categories.is_empty() {
            self.step = Step::Subnets;
        }
    }

    pub fn back_to_categories(&mut self) {
        if self.step == Step::Subnets {
            self.step = Step::Categories;
        }
    }

    /// Flips the busy flag for the mock feasibility call. Returns whether
    /// the call should actually be started.
    pub fn begin_analysis(&mut self) -> bool {
        if self.step != Step::Subnets || self.selected_subnets.is_empty() || self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_analysis(&mut self, analysis: CombinationAnalysis) {
        self.analysis = Some(analysis);
        self.step = Step::Analysis;
        self.loading = false;
    }

    pub fn back_to_subnets(&mut self) {
        if self.step == Step::Analysis {
            self.step = Step::Subnets;
        }
    }

    pub fn continue_to_keys(&mut self) {
        if self.step == Step::Analysis && self.analysis.is_some() {
            self.step = Step::Keys;
        }
    }

    pub fn back_to_analysis(&mut self) {
        if self.step == Step::Keys {
            self.step = Step::Analysis;
        }
    }

    pub fn set_key(&mut self, subnet: &str, value: String) {
        self.keys.insert(subnet.to_string(), value);
    }

    pub fn key_added(&self, subnet: &str) -> bool {
        self.keys.get(subnet).map_or(false, |v| !v.is_empty())
    }

    /// True iff every required key has a non-empty value. Vacuously true
    /// for an empty requirement list; false before any analysis exists.
    pub fn all_keys_added(&self) -> bool {
        match &self.analysis {
            Some(analysis) => analysis
                .keys_required
                .iter()
                .all(|req| self.key_added(&req.subnet)),
            None => false,
        }
    }

    pub fn begin_execution(&mut self) -> bool {
        if self.step != Step::Keys || !self.all_keys_added() || self.loading {
            return false;
        }
        self.loading = true;
        self.step = Step::Executing;
        true
    }

    pub fn finish_execution(&mut self, result: ExecutionResult) {
        self.result = Some(result);
        self.step = Step::Result;
        self.loading = false;
    }

    /// Re-enter the key screen with the previous analysis and keys intact.
    pub fn run_again(&mut self) {
        if self.step == Step::Result {
            self.step = Step::Keys;
        }
    }

    /// Clears every piece of transient state and returns to the first
    /// screen.
    pub fn reset(&mut self) {
        *self = Wizard::default();
    }
}

fn toggle(selection: &mut Vec<String>, id: &str) {
    if let Some(pos) = selection.iter().position(|s| s == id) {
        selection.remove(pos);
    } else {
        selection.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_combination, execute_combination};
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn toggle_twice_cancels_out() {
        let mut wizard = Wizard::new();
        wizard.toggle_subnet("SN64");
        wizard.toggle_subnet("SN62");
        let before = wizard.selected_subnets.clone();

        wizard.toggle_subnet("SN13");
        wizard.toggle_subnet("SN13");
        assert_eq!(wizard.selected_subnets, before);

        wizard.toggle_category("compute");
        wizard.toggle_category("compute");
        assert!(wizard.selected_categories.is_empty());
    }

    #[test]
    fn toggle_keeps_insertion_order() {
        let mut wizard = Wizard::new();
        wizard.toggle_subnet("SN64");
        wizard.toggle_subnet("SN62");
        wizard.toggle_subnet("SN13");
        assert_eq!(wizard.selected_subnets, vec!["SN64", "SN62", "SN13"]);

        wizard.toggle_subnet("SN62");
        assert_eq!(wizard.selected_subnets, vec!["SN64", "SN13"]);
    }

    #[test]
    fn progression_requires_a_selection() {
        let mut wizard = Wizard::new();
        wizard.continue_to_subnets();
        assert_eq!(wizard.step, Step::Categories);

        wizard.toggle_category("compute");
        wizard.continue_to_subnets();
        assert_eq!(wizard.step, Step::Subnets);

        assert!(!wizard.begin_analysis());
        assert!(!wizard.loading);

        wizard.toggle_subnet("SN64");
        assert!(wizard.begin_analysis());
        assert!(wizard.loading);
        assert_eq!(wizard.step, Step::Subnets);
    }

    #[test]
    fn all_keys_added_needs_every_required_key() {
        let mut wizard = Wizard::new();
        assert!(!wizard.all_keys_added());

        wizard.toggle_subnet("SN64");
        wizard.toggle_subnet("SN62");
        wizard.finish_analysis(analyze_combination(&catalog(), &wizard.selected_subnets));
        assert!(!wizard.all_keys_added());

        wizard.set_key("SN64", "chutes-key".to_string());
        assert!(!wizard.all_keys_added());

        wizard.set_key("SN62", String::new());
        assert!(!wizard.all_keys_added());

        wizard.set_key("SN62", "ridges-key".to_string());
        assert!(wizard.all_keys_added());
    }

    #[test]
    fn all_keys_added_is_vacuously_true_without_requirements() {
        let mut wizard = Wizard::new();
        wizard.finish_analysis(analyze_combination(&catalog(), &[]));
        assert!(wizard.all_keys_added());
    }

    #[test]
    fn execution_waits_for_every_key() {
        let mut wizard = Wizard::new();
        wizard.toggle_subnet("SN64");
        wizard.finish_analysis(analyze_combination(&catalog(), &wizard.selected_subnets));
        wizard.continue_to_keys();

        assert!(!wizard.begin_execution());
        assert_eq!(wizard.step, Step::Keys);

        wizard.set_key("SN64", "chutes-key".to_string());
        assert!(wizard.begin_execution());
        assert_eq!(wizard.step, Step::Executing);
        assert!(wizard.loading);
    }

    #[test]
    fn back_transitions_return_to_the_previous_screen() {
        let mut wizard = Wizard::new();
        wizard.toggle_category("compute");
        wizard.continue_to_subnets();
        wizard.back_to_categories();
        assert_eq!(wizard.step, Step::Categories);

        wizard.continue_to_subnets();
        wizard.toggle_subnet("SN64");
        wizard.finish_analysis(analyze_combination(&catalog(), &wizard.selected_subnets));
        wizard.back_to_subnets();
        assert_eq!(wizard.step, Step::Subnets);

        wizard.finish_analysis(analyze_combination(&catalog(), &wizard.selected_subnets));
        wizard.continue_to_keys();
        wizard.back_to_analysis();
        assert_eq!(wizard.step, Step::Analysis);
    }

    #[test]
    fn run_again_only_applies_to_the_result_screen() {
        let mut wizard = Wizard::new();
        wizard.run_again();
        assert_eq!(wizard.step, Step::Categories);

        wizard.toggle_subnet("SN64");
        wizard.finish_execution(execute_combination(&catalog(), &wizard.selected_subnets));
        wizard.run_again();
        assert_eq!(wizard.step, Step::Keys);
    }

    #[test]
    fn reset_clears_every_piece_of_transient_state() {
        let catalog = catalog();
        let mut wizard = Wizard::new();
        wizard.query = "a research pipeline".to_string();
        wizard.toggle_category("compute");
        wizard.continue_to_subnets();
        wizard.toggle_subnet("SN64");
        wizard.finish_analysis(analyze_combination(&catalog, &wizard.selected_subnets));
        wizard.set_key("SN64", "chutes-key".to_string());
        wizard.finish_execution(execute_combination(&catalog, &wizard.selected_subnets));

        wizard.reset();

        assert_eq!(wizard.step, Step::Categories);
        assert!(wizard.query.is_empty());
        assert!(wizard.selected_categories.is_empty());
        assert!(wizard.selected_subnets.is_empty());
        assert!(wizard.keys.is_empty());
        assert!(wizard.analysis.is_none());
        assert!(wizard.result.is_none());
        assert!(!wizard.loading);
    }

    // The documented compute scenario, end to end and headless.
    #[test]
    fn full_compute_flow_reaches_the_result_screen() {
        let catalog = catalog();
        let mut wizard = Wizard::new();

        wizard.toggle_category("compute");
        wizard.continue_to_subnets();
        wizard.toggle_subnet("SN64");
        wizard.toggle_subnet("SN62");

        assert!(wizard.begin_analysis());
        wizard.finish_analysis(analyze_combination(&catalog, &wizard.selected_subnets));
        assert_eq!(wizard.step, Step::Analysis);

        {
            let analysis = wizard.analysis.as_ref().unwrap();
            assert!(analysis.feasible);
            assert!(analysis.issues.is_empty());
            assert_eq!(analysis.keys_required.len(), 2);
            assert_eq!(analysis.keys_required[0].service_name, "Chutes");
            assert_eq!(analysis.keys_required[1].service_name, "Ridges");
            assert!(analysis
                .keys_required
                .iter()
                .all(|req| req.key_url == "https://chutes.ai/dashboard/api-keys"));
        }

        wizard.continue_to_keys();
        wizard.set_key("SN64", "chutes-key".to_string());
        wizard.set_key("SN62", "ridges-key".to_string());

        assert!(wizard.begin_execution());
        assert_eq!(wizard.step, Step::Executing);
        wizard.finish_execution(execute_combination(&catalog, &wizard.selected_subnets));
        assert_eq!(wizard.step, Step::Result);

        let result = wizard.result.as_ref().unwrap();
        assert_eq!(
            result.execution_trace,
            vec!["SN64: Chutes - Complete", "SN62: Ridges - Complete"]
        );
        assert_eq!(result.cost_breakdown.total, 0.04);
    }
}
