// src/specs/cancel.rs
//! Cancel-construction infos for the research and lifeform-building regions.
//!
//! Two places on the page are involved:
//! - an inline script assigns the cancel URL (with its `token=`) to a
//!   variable such as `cancelLinkresearch`;
//! - the region's `a.abortNow` link calls e.g. `cancelresearch(id, listId, …)`
//!   from its `onclick`.
//!
//! Which `table.construction` holds the region depends on the dialect.

use serde::{Deserialize, Serialize};

use crate::config::Dialect;
use crate::config::consts::ABORT_LINK;
use crate::core::parse::{captures, parse_int_strict};
use crate::core::{Doc, patterns};
use crate::error::{ExtractError, Result};
use crate::specs::overview::construction_region;

/// What the game needs to cancel the running construction of one region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelInfo {
    pub token: String,
    pub tech_id: i64,
    pub list_id: i64,
}

pub fn extract_cancel_research_infos(doc: &Doc, dialect: &Dialect) -> Result<CancelInfo> {
    extract_cancel_infos(doc, dialect, "cancelLinkresearch", "cancelresearch", dialect.construction.research)
}

pub fn extract_cancel_lf_building_infos(doc: &Doc, dialect: &Dialect) -> Result<CancelInfo> {
    let Some(index) = dialect.construction.lf_buildings else {
        return Err(ExtractError::mismatch("dialect has no lifeform building region"));
    };
    extract_cancel_infos(doc, dialect, "cancelLinklfbuilding", "cancellfbuilding", index)
}

fn extract_cancel_infos(
    doc: &Doc,
    dialect: &Dialect,
    link_var: &str,
    function: &str,
    table_index: usize,
) -> Result<CancelInfo> {
    let token = find_token(doc, link_var)?
        .ok_or_else(|| ExtractError::mismatch(format!("{link_var} token not found")))?;

    let onclick = construction_region(doc, dialect, table_index)?
        .map(|table| table.select_first(ABORT_LINK))
        .transpose()?
        .flatten()
        .and_then(|a| a.attr("onclick"))
        .unwrap_or("");

    let Some(c) = captures(&patterns::cancel_call(function), onclick) else {
        return Err(ExtractError::mismatch(format!("no {function} call in construction region {table_index}")));
    };

    Ok(CancelInfo { token, tech_id: parse_int_strict(c[0])?, list_id: parse_int_strict(c[1])? })
}

/// Scans inline scripts for the variable holding the cancel link.
fn find_token(doc: &Doc, link_var: &str) -> Result<Option<String>> {
    let re = patterns::cancel_token(link_var);
    for script in doc.select("script")? {
        let src = script.raw_text();
        if let Some(c) = re.captures(&src).and_then(|c| c.get(1)) {
            return Ok(Some(c.as_str().to_string()));
        }
    }
    Ok(None)
}
