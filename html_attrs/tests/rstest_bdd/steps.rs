//! Step definitions for the smart-merge scenarios.

use crate::fixtures::MergeContext;
use anyhow::{Result, anyhow, ensure};
use html_attrs::{AttrValue, HtmlAttrs, MergePolicy};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{normalize_scalar, parse_value};

#[given("existing attributes {payload}")]
fn existing_attributes(merge_context: &MergeContext, payload: String) -> Result<()> {
    ensure!(merge_context.existing.is_empty(), "existing attributes already set");
    let map = parse_value(&payload)?.into_map().map_err(|value| {
        anyhow!("existing attributes must be a mapping, found {}", value.kind())
    })?;
    merge_context.existing.set(map);
    Ok(())
}

#[given("the mergeable attributes are {names}")]
fn mergeable_attributes(merge_context: &MergeContext, names: String) {
    merge_context.policy.set(MergePolicy::parse_list(&normalize_scalar(&names)));
}

#[when("the attributes {payload} are merged")]
fn merge_attributes(merge_context: &MergeContext, payload: String) -> Result<()> {
    let target: AttrValue = parse_value(&payload)?;
    let existing = merge_context
        .existing
        .take()
        .ok_or_else(|| anyhow!("no existing attributes were given"))?;
    let policy = merge_context.policy.take().unwrap_or_default();
    let result = HtmlAttrs::new(existing).with_policy(policy).smart_merge(target);
    merge_context.result.set(result);
    Ok(())
}

#[then("the merged attributes are {payload}")]
fn assert_merged(merge_context: &MergeContext, payload: String) -> Result<()> {
    let expected = parse_value(&payload)?;
    let matches = merge_context
        .result
        .with_ref(|result| result.as_ref().is_ok_and(|merged| *merged == expected))
        .ok_or_else(|| anyhow!("no merge was performed"))?;
    ensure!(matches, "merged attributes differ from {expected:?}");
    Ok(())
}

#[then("the rendered attributes are {rendered}")]
fn assert_rendered(merge_context: &MergeContext, rendered: String) -> Result<()> {
    let actual = merge_context
        .result
        .with_ref(|result| result.as_ref().map(HtmlAttrs::to_html).map_err(ToString::to_string))
        .ok_or_else(|| anyhow!("no merge was performed"))?
        .map_err(|err| anyhow!("merge failed: {err}"))?;
    ensure!(actual == normalize_scalar(&rendered), "rendered {actual:?}, expected {rendered}");
    Ok(())
}

#[then("merging fails with {message}")]
fn assert_failure(merge_context: &MergeContext, message: String) -> Result<()> {
    let result = merge_context
        .result
        .take()
        .ok_or_else(|| anyhow!("no merge was performed"))?;
    let err = result.err().ok_or_else(|| anyhow!("merge unexpectedly succeeded"))?;
    ensure!(err.to_string() == normalize_scalar(&message), "unexpected error: {err}");
    Ok(())
}
