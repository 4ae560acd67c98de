//! Full fengshui analysis of a replayed layout.
//!
//! The report serializes to the JSON shape the original calculator
//! emitted, so downstream consumers of that output keep working.

use serde::Serialize;

use crate::plan::{CellKind, Direction};
use crate::session::Layout;

use super::rooms::{judge, Verdict};
use super::trigram::{hexagram, Trigram};

/// Analysis of one family member's bedroom position
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MemberEntry {
    Analysis(MemberAnalysis),
    Error { member: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberAnalysis {
    pub member: String,
    pub role: &'static str,
    pub person_gua: &'static str,
    pub ideal_direction: &'static str,
    pub actual_direction: String,
    pub hexagram_number: u8,
    pub hexagram_name: &'static str,
    pub upper_gua: &'static str,
    pub upper_symbol: &'static str,
    pub lower_gua: &'static str,
    pub lower_symbol: &'static str,
    pub is_native_position: bool,
    pub status: &'static str,
}

/// Analysis of one room placement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomAnalysis {
    pub room: String,
    pub direction: String,
    pub status: Verdict,
    pub effect: &'static str,
}

/// The complete analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Report {
    pub family_analysis: Vec<MemberEntry>,
    pub room_analysis: Vec<RoomAnalysis>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Analyze a replayed layout
pub fn analyze(layout: &Layout) -> Report {
    let (family, rooms) = collect(layout);
    analyze_pairs(&family, &rooms)
}

/// (label, direction) pairs for members and rooms, in layout order
fn collect(layout: &Layout) -> (Vec<(String, Direction)>, Vec<(String, Direction)>) {
    match layout {
        Layout::Canvas(plan) => {
            let family = plan
                .persons()
                .iter()
                .filter_map(|p| {
                    let bedroom = plan.region(p.bedroom)?;
                    Some((p.label.clone(), plan.direction_of(bedroom)))
                })
                .collect();
            let rooms = plan
                .regions()
                .iter()
                .filter(|r| !r.is_bedroom())
                .map(|r| (r.label.clone(), plan.direction_of(r)))
                .collect();
            (family, rooms)
        }
        Layout::Grid(grid) => {
            let mut family = Vec::new();
            let mut rooms = Vec::new();
            for (point, cell) in grid.iter() {
                let entry = (cell.label.clone(), Direction::Point(point));
                match cell.kind {
                    CellKind::Member | CellKind::Office => family.push(entry),
                    CellKind::Room => rooms.push(entry),
                }
            }
            (family, rooms)
        }
    }
}

fn analyze_pairs(family: &[(String, Direction)], rooms: &[(String, Direction)]) -> Report {
    let mut report = Report::default();

    for (member, direction) in family {
        let Some(person_gua) = Trigram::for_member(member) else {
            report.family_analysis.push(MemberEntry::Error {
                member: member.clone(),
                error: format!("無法識別成員角色: {member}"),
            });
            continue;
        };
        // The center has no governing trigram, so no hexagram can form
        let Direction::Point(point) = direction else {
            report.family_analysis.push(MemberEntry::Error {
                member: member.clone(),
                error: format!("無法識別方位: {}", direction.label()),
            });
            continue;
        };
        let position_gua = Trigram::from_direction(*point);
        let hex = hexagram(person_gua, position_gua);

        if !hex.is_native() {
            report.issues.push(format!(
                "{member}住在{}（應住{}），形成「{}」卦",
                point.label(),
                person_gua.home_direction().label(),
                hex.name
            ));
        }

        report.family_analysis.push(MemberEntry::Analysis(MemberAnalysis {
            member: member.clone(),
            role: person_gua.role(),
            person_gua: person_gua.name(),
            ideal_direction: person_gua.home_direction().label(),
            actual_direction: point.label().to_string(),
            hexagram_number: hex.number,
            hexagram_name: hex.name,
            upper_gua: hex.upper.name(),
            upper_symbol: hex.upper.symbol(),
            lower_gua: hex.lower.name(),
            lower_symbol: hex.lower.symbol(),
            is_native_position: hex.is_native(),
            status: if hex.is_native() { "本位大吉" } else { "錯位" },
        }));
    }

    for (room, direction) in rooms {
        let (status, effect) = judge(room, direction.label());
        if status.is_bad() {
            report
                .issues
                .push(format!("{room}在{}：{effect}", direction.label()));
        }
        report.room_analysis.push(RoomAnalysis {
            room: room.clone(),
            direction: direction.label().to_string(),
            status,
            effect,
        });
    }

    if !report.issues.is_empty() {
        report.recommendations = recommendations(&report);
    }

    report
}

fn recommendations(report: &Report) -> Vec<String> {
    let mut out = Vec::new();

    // Two misplaced members whose positions are each other's home can swap
    let misplaced: Vec<&MemberAnalysis> = report
        .family_analysis
        .iter()
        .filter_map(|entry| match entry {
            MemberEntry::Analysis(a) if !a.is_native_position => Some(a),
            _ => None,
        })
        .collect();
    for (i, first) in misplaced.iter().enumerate() {
        for second in &misplaced[i + 1..] {
            if first.actual_direction == second.ideal_direction
                && second.actual_direction == first.ideal_direction
            {
                out.push(format!(
                    "建議 {} 與 {} 對調房間，可同時恢復「名位相等」",
                    first.member, second.member
                ));
            }
        }
    }

    for room in &report.room_analysis {
        match room.status {
            Verdict::VeryInauspicious => out.push(format!(
                "{}位置為大忌，若無法搬遷，需加強通風並保持門常關",
                room.room
            )),
            Verdict::Inauspicious => out.push(format!(
                "{}方位不理想，可透過減少該區域使用頻率或加強通風來緩解",
                room.room
            )),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{CellAssignment, CompassPoint, DirectionalGrid};

    fn grid_layout(cells: &[(CompassPoint, CellKind, &str)]) -> Layout {
        let mut grid = DirectionalGrid::new();
        for (point, kind, label) in cells {
            grid.assign(
                *point,
                CellAssignment {
                    kind: *kind,
                    label: label.to_string(),
                    icon: None,
                },
            );
        }
        Layout::Grid(grid)
    }

    #[test]
    fn test_native_member_has_no_issues() {
        let layout = grid_layout(&[(CompassPoint::Northwest, CellKind::Member, "父親")]);
        let report = analyze(&layout);
        assert!(report.issues.is_empty());
        match &report.family_analysis[0] {
            MemberEntry::Analysis(a) => {
                assert_eq!(a.hexagram_name, "乾為天");
                assert_eq!(a.status, "本位大吉");
                assert!(a.is_native_position);
            }
            other => panic!("unexpected entry: {other:?}"),
        }
    }

    #[test]
    fn test_misplaced_member_forms_hexagram_and_issue() {
        // 長子 (震) living in the northwest (乾): 雷天大壯
        let layout = grid_layout(&[(CompassPoint::Northwest, CellKind::Member, "長子")]);
        let report = analyze(&layout);
        match &report.family_analysis[0] {
            MemberEntry::Analysis(a) => {
                assert_eq!(a.hexagram_number, 34);
                assert_eq!(a.hexagram_name, "雷天大壯");
                assert_eq!(a.ideal_direction, "東");
                assert_eq!(a.status, "錯位");
            }
            other => panic!("unexpected entry: {other:?}"),
        }
        assert_eq!(
            report.issues,
            vec!["長子住在西北（應住東），形成「雷天大壯」卦".to_string()]
        );
    }

    #[test]
    fn test_unknown_member_becomes_error_entry() {
        let layout = grid_layout(&[(CompassPoint::East, CellKind::Member, "鄰居")]);
        let report = analyze(&layout);
        assert_eq!(
            report.family_analysis[0],
            MemberEntry::Error {
                member: "鄰居".to_string(),
                error: "無法識別成員角色: 鄰居".to_string(),
            }
        );
    }

    #[test]
    fn test_swap_recommendation() {
        // 父親 (home 西北) in the east, 長子 (home 東) in the northwest
        let layout = grid_layout(&[
            (CompassPoint::East, CellKind::Member, "父親"),
            (CompassPoint::Northwest, CellKind::Member, "長子"),
        ]);
        let report = analyze(&layout);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r == "建議 父親 與 長子 對調房間，可同時恢復「名位相等」"));
    }

    #[test]
    fn test_bad_room_issue_and_recommendation() {
        let layout = grid_layout(&[(CompassPoint::Northeast, CellKind::Room, "廁所")]);
        let report = analyze(&layout);
        assert_eq!(report.room_analysis[0].status, Verdict::VeryInauspicious);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].starts_with("廁所在東北："));
        assert_eq!(
            report.recommendations,
            vec!["廁所位置為大忌，若無法搬遷，需加強通風並保持門常關".to_string()]
        );
    }

    #[test]
    fn test_json_shape_matches_contract() {
        let layout = grid_layout(&[(CompassPoint::Northwest, CellKind::Member, "父親")]);
        let value = serde_json::to_value(analyze(&layout)).unwrap();
        let entry = &value["family_analysis"][0];
        assert_eq!(entry["member"], "父親");
        assert_eq!(entry["person_gua"], "乾");
        assert_eq!(entry["upper_symbol"], "☰");
        assert_eq!(entry["hexagram_number"], 1);
        assert_eq!(entry["is_native_position"], true);
        assert_eq!(value["issues"], serde_json::json!([]));
    }

    #[test]
    fn test_center_member_is_error_entry() {
        let pairs = vec![("父親".to_string(), Direction::Center)];
        let report = analyze_pairs(&pairs, &[]);
        assert_eq!(
            report.family_analysis[0],
            MemberEntry::Error {
                member: "父親".to_string(),
                error: "無法識別方位: 中央".to_string(),
            }
        );
    }

    #[test]
    fn test_center_toilet_is_analyzed() {
        let rooms = vec![("廁所".to_string(), Direction::Center)];
        let report = analyze_pairs(&[], &rooms);
        assert_eq!(report.room_analysis[0].status, Verdict::VeryInauspicious);
        assert_eq!(report.room_analysis[0].direction, "中央");
    }
}
