//! Direction rules for special rooms (kitchens and toilets).
//!
//! Rules are keyed by the Chinese direction label so center placements
//! participate (a toilet in the center is the worst case).

use serde::Serialize;

/// Auspiciousness verdict for a room placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "吉")]
    Auspicious,
    #[serde(rename = "中吉")]
    ModeratelyAuspicious,
    #[serde(rename = "小吉")]
    MildlyAuspicious,
    #[serde(rename = "中")]
    Neutral,
    #[serde(rename = "凶")]
    Inauspicious,
    #[serde(rename = "大凶")]
    VeryInauspicious,
    #[serde(rename = "未知")]
    Unknown,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Auspicious => "吉",
            Verdict::ModeratelyAuspicious => "中吉",
            Verdict::MildlyAuspicious => "小吉",
            Verdict::Neutral => "中",
            Verdict::Inauspicious => "凶",
            Verdict::VeryInauspicious => "大凶",
            Verdict::Unknown => "未知",
        }
    }

    pub fn is_bad(self) -> bool {
        matches!(self, Verdict::Inauspicious | Verdict::VeryInauspicious)
    }
}

/// Judge a room label at a direction label. Rooms without special rules
/// come back Unknown.
pub fn judge(room: &str, direction: &str) -> (Verdict, &'static str) {
    let lowered = room.to_lowercase();
    if room.contains("廚房") || lowered.contains("kitchen") {
        kitchen_rule(direction)
    } else if room.contains("廁所")
        || room.contains("浴室")
        || lowered.contains("toilet")
        || lowered.contains("bathroom")
    {
        toilet_rule(direction)
    } else {
        (Verdict::Unknown, "無特殊規則")
    }
}

fn kitchen_rule(direction: &str) -> (Verdict, &'static str) {
    match direction {
        "東" => (Verdict::Auspicious, "木火通明，家人得貴人扶持"),
        "東南" => (Verdict::Auspicious, "木火通明，有助家庭和諧"),
        "北" => (Verdict::ModeratelyAuspicious, "水火既濟，家人平安"),
        "東北" => (Verdict::ModeratelyAuspicious, "火土相生"),
        "南" => (Verdict::MildlyAuspicious, "火氣較旺，家人易急躁"),
        "西南" => (
            Verdict::Inauspicious,
            "裡鬼門，午後西曬不利食物保存，家人多病",
        ),
        "西北" => (
            Verdict::Inauspicious,
            "火燒天門，不利男主人健康（呼吸系統、大腸）",
        ),
        "西" => (Verdict::Inauspicious, "火金相剋，運氣反覆"),
        _ => (Verdict::Unknown, "無對應規則"),
    }
}

fn toilet_rule(direction: &str) -> (Verdict, &'static str) {
    match direction {
        "中央" => (Verdict::VeryInauspicious, "中宮穢氣，嚴重影響全家健康"),
        "東北" => (
            Verdict::VeryInauspicious,
            "鬼門位，陰暗潮濕，家人體弱多病",
        ),
        "西南" => (Verdict::Inauspicious, "傷女主人，脾胃不佳、婦科問題"),
        "西北" => (Verdict::Inauspicious, "傷男主人，事業及健康受損"),
        "南" => (Verdict::Inauspicious, "水火相沖，易生是非疾病"),
        "東" | "東南" => (Verdict::Neutral, "水木相生，需保持通風"),
        "北" => (Verdict::Neutral, "坎位屬水，尚可"),
        "西" => (Verdict::Neutral, "金水相生，尚可"),
        _ => (Verdict::Unknown, "無對應規則"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_east_is_auspicious() {
        assert_eq!(
            judge("廚房", "東"),
            (Verdict::Auspicious, "木火通明，家人得貴人扶持")
        );
    }

    #[test]
    fn test_kitchen_northwest_is_inauspicious() {
        let (verdict, effect) = judge("廚房", "西北");
        assert_eq!(verdict, Verdict::Inauspicious);
        assert!(effect.contains("火燒天門"));
    }

    #[test]
    fn test_central_toilet_is_worst() {
        let (verdict, _) = judge("廁所", "中央");
        assert_eq!(verdict, Verdict::VeryInauspicious);
        assert!(verdict.is_bad());
    }

    #[test]
    fn test_bathroom_counts_as_toilet() {
        assert_eq!(judge("浴室", "東北").0, Verdict::VeryInauspicious);
        assert_eq!(judge("bathroom", "北").0, Verdict::Neutral);
    }

    #[test]
    fn test_room_without_rules_is_unknown() {
        assert_eq!(judge("客廳", "東"), (Verdict::Unknown, "無特殊規則"));
    }

    #[test]
    fn test_kitchen_at_unruled_direction() {
        assert_eq!(judge("廚房", "中央"), (Verdict::Unknown, "無對應規則"));
    }
}
