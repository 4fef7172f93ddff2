use crate::core::allocation::allocate;
use crate::core::{CaseReport, ScenarioSource};
use crate::utils::error::Result;

pub struct CarpoolEngine<S: ScenarioSource> {
    source: S,
}

impl<S: ScenarioSource> CarpoolEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads every scenario before allocating any, so a malformed input
    /// yields an error and no reports.
    pub fn run(&self) -> Result<Vec<CaseReport>> {
        tracing::info!("Loading scenarios from {}", self.source.describe());
        let scenarios = self.source.load()?;
        tracing::info!("Loaded {} scenario(s)", scenarios.len());

        let reports: Vec<CaseReport> = scenarios
            .iter()
            .enumerate()
            .map(|(index, scenario)| {
                let allocation = allocate(scenario);
                tracing::debug!(
                    case = index + 1,
                    feasible = allocation.is_feasible(),
                    vehicles = allocation.total_vehicles().unwrap_or(0),
                    "Case solved"
                );
                CaseReport {
                    case: index + 1,
                    allocation,
                }
            })
            .collect();

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextSource;
    use crate::domain::model::Allocation;
    use crate::utils::error::CarpoolError;

    #[test]
    fn test_run_numbers_cases_in_input_order() {
        let text = "3\n2 1\n4\n2 2\n2 1\n2 1\n2 0\n4 1\n3\n2 0\n2 0\n2 1\n1 1\n2\n1 0\n1 0\n";
        let engine = CarpoolEngine::new(TextSource::new(text));
        let reports = engine.run().unwrap();

        let lines: Vec<String> = reports.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            lines,
            vec!["Case #1: 0 3", "Case #2: IMPOSSIBLE", "Case #3: 0"]
        );
        assert_eq!(reports[1].allocation, Allocation::Infeasible);
    }

    #[test]
    fn test_run_accepts_huge_town_count() {
        let engine = CarpoolEngine::new(TextSource::new("1\n9223372036854775807 1\n1\n2 1\n"));
        let reports = engine.run().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].allocation.vehicles_for(2), Some(1));
        assert_eq!(reports[0].allocation.vehicles_for(9223372036854775807), Some(0));
        assert_eq!(reports[0].allocation.total_vehicles(), Some(1));
    }

    #[test]
    fn test_run_fails_without_reports_on_bad_input() {
        let text = "2\n2 1\n1\n2 1\n2 1\n1\n2 7\n";
        let engine = CarpoolEngine::new(TextSource::new(text));
        let err = engine.run().unwrap_err();
        assert!(matches!(err, CarpoolError::MalformedEmployee { case: 2, .. }));
    }
}
