//! Prompt regression tests.
//!
//! The generated text is consumed verbatim by the downstream analysis
//! skill, so the full output is pinned with snapshots.

use floorplan_prompter::generate;
use insta::assert_snapshot;

#[test]
fn test_canvas_prompt_full_output() {
    let prompt = generate(
        "bedroom master-bedroom [x: 400, y: 100]\n\
         facility kitchen [x: 700, y: 300]\n\
         facility toilet [x: 100, y: 100]\n\
         person father [x: 400, y: 100]\n\
         person mother [x: 400, y: 100]",
    )
    .unwrap();

    assert_snapshot!(prompt, @r###"
    請幫我分析住宅風水：

    【家庭成員臥室位置】
    - 父親：北
    - 母親：北

    【房間/設施位置】
    - 廚房：東
    - 廁所：西北

    請根據易經陽宅風水理論分析：
    1. 各成員的卦象與吉凶
    2. 房間位置的風水影響
    3. 改善建議

    （使用 yijing-fengshui Skill）
    "###);
}

#[test]
fn test_rooms_only_prompt_omits_family_section() {
    let prompt = generate(
        "facility kitchen [x: 700, y: 300]\n\
         room living-room [x: 400, y: 300]",
    )
    .unwrap();

    assert_snapshot!(prompt, @r###"
    請幫我分析住宅風水：

    【房間/設施位置】
    - 廚房：東
    - 客廳：中央

    請根據易經陽宅風水理論分析：
    1. 各成員的卦象與吉凶
    2. 房間位置的風水影響
    3. 改善建議

    （使用 yijing-fengshui Skill）
    "###);
}

#[test]
fn test_bedrooms_without_residents_leave_rooms_section_out() {
    let prompt = generate("bedroom master-bedroom [x: 400, y: 100]").unwrap();

    assert_snapshot!(prompt, @r###"
    請幫我分析住宅風水：

    請根據易經陽宅風水理論分析：
    1. 各成員的卦象與吉凶
    2. 房間位置的風水影響
    3. 改善建議

    （使用 yijing-fengshui Skill）
    "###);
}

#[test]
fn test_grid_prompt_full_output() {
    let prompt = generate(
        r#"assign northwest member "父親"
assign southeast member "長女"
assign east room "廚房"
assign northeast room "廁所""#,
    )
    .unwrap();

    assert_snapshot!(prompt, @r###"
    請幫我分析住宅風水：

    【家庭成員臥室位置】
    - 父親：西北
    - 長女：東南

    【房間/設施位置】
    - 廚房：東
    - 廁所：東北

    請根據易經陽宅風水理論分析：
    1. 各成員的卦象與吉凶
    2. 房間位置的風水影響
    3. 改善建議

    （使用 yijing-fengshui Skill）
    "###);
}
