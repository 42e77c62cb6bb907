//! Shared fixtures for the behavioural scenarios.

use html_attrs::{AttrMap, HtmlAttrs, HtmlAttrsResult, MergePolicy};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared between the steps of one merge scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct MergeContext {
    pub existing: Slot<AttrMap>,
    pub policy: Slot<MergePolicy>,
    pub result: Slot<HtmlAttrsResult<HtmlAttrs>>,
}

/// Creates an empty merge context for each scenario.
#[fixture]
pub fn merge_context() -> MergeContext {
    MergeContext::default()
}
