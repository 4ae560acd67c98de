//! Prompt text emission.
//!
//! Produces the analysis request handed to the downstream fengshui skill.
//! The section headers, line format, and closing block are a compatibility
//! contract with that consumer and must not drift.

use thiserror::Error;

use crate::plan::{CellKind, DirectionalGrid, FloorPlan};
use crate::session::Layout;

use super::config::PromptConfig;

/// Errors that can occur when generating a prompt
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PromptError {
    /// Nothing placed yet; matches the editor's refusal notice
    #[error("請先放置至少一個房間")]
    EmptyLayout,
}

/// Generate the analysis prompt for a replayed layout
pub fn render(layout: &Layout, config: &PromptConfig) -> Result<String, PromptError> {
    match layout {
        Layout::Canvas(plan) => render_canvas(plan, config),
        Layout::Grid(grid) => render_grid(grid, config),
    }
}

/// Generate the prompt for a canvas session.
///
/// Persons are listed with their bedroom's direction; the rooms section
/// lists every non-bedroom region. Both sections follow placement order
/// and are omitted entirely when empty.
pub fn render_canvas(plan: &FloorPlan, config: &PromptConfig) -> Result<String, PromptError> {
    if plan.regions().is_empty() {
        return Err(PromptError::EmptyLayout);
    }

    let mut family = Vec::new();
    for person in plan.persons() {
        if let Some(bedroom) = plan.region(person.bedroom) {
            let dir = plan.direction_of(bedroom);
            family.push((person.label.clone(), dir.label()));
        }
    }

    let mut rooms = Vec::new();
    for region in plan.regions() {
        if !region.is_bedroom() {
            let dir = plan.direction_of(region);
            rooms.push((region.label.clone(), dir.label()));
        }
    }

    Ok(compose(&family, &rooms, config))
}

/// Generate the prompt for a grid session.
///
/// Member and office cells fill the family section, room cells the rooms
/// section, both in fixed compass order. The cell's direction is its key.
pub fn render_grid(grid: &DirectionalGrid, config: &PromptConfig) -> Result<String, PromptError> {
    if grid.is_empty() {
        return Err(PromptError::EmptyLayout);
    }

    let mut family = Vec::new();
    let mut rooms = Vec::new();
    for (point, cell) in grid.iter() {
        match cell.kind {
            CellKind::Member | CellKind::Office => {
                family.push((cell.label.clone(), point.label()))
            }
            CellKind::Room => rooms.push((cell.label.clone(), point.label())),
        }
    }

    Ok(compose(&family, &rooms, config))
}

fn compose(family: &[(String, &str)], rooms: &[(String, &str)], config: &PromptConfig) -> String {
    let mut prompt = String::from("請幫我分析住宅風水：\n\n");

    if !family.is_empty() {
        prompt.push_str("【家庭成員臥室位置】\n");
        for (member, dir) in family {
            prompt.push_str(&format!("- {member}：{dir}\n"));
        }
        prompt.push('\n');
    }

    if !rooms.is_empty() {
        prompt.push_str("【房間/設施位置】\n");
        for (room, dir) in rooms {
            prompt.push_str(&format!("- {room}：{dir}\n"));
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "請根據易經陽宅風水理論分析：\n\
         1. 各成員的卦象與吉凶\n\
         2. 房間位置的風水影響\n\
         3. 改善建議\n\
         \n\
         （使用 {} Skill）",
        config.skill_name
    ));

    prompt
}
