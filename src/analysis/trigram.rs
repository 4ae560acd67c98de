//! The eight trigrams and the sixty-four hexagram table.
//!
//! Numbering follows the Earlier Heaven sequence (乾1 兌2 離3 震4 巽5
//! 坎6 艮7 坤8); directions follow the Later Heaven arrangement used in
//! yangzhai practice.

use crate::plan::CompassPoint;

/// One of the eight trigrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// Earlier Heaven number, 1 through 8
    pub fn number(self) -> u8 {
        match self {
            Trigram::Qian => 1,
            Trigram::Dui => 2,
            Trigram::Li => 3,
            Trigram::Zhen => 4,
            Trigram::Xun => 5,
            Trigram::Kan => 6,
            Trigram::Gen => 7,
            Trigram::Kun => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兌",
            Trigram::Li => "離",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Trigram::Qian => "☰",
            Trigram::Dui => "☱",
            Trigram::Li => "☲",
            Trigram::Zhen => "☳",
            Trigram::Xun => "☴",
            Trigram::Kan => "☵",
            Trigram::Gen => "☶",
            Trigram::Kun => "☷",
        }
    }

    /// The trigram's home direction
    pub fn home_direction(self) -> CompassPoint {
        match self {
            Trigram::Qian => CompassPoint::Northwest,
            Trigram::Dui => CompassPoint::West,
            Trigram::Li => CompassPoint::South,
            Trigram::Zhen => CompassPoint::East,
            Trigram::Xun => CompassPoint::Southeast,
            Trigram::Kan => CompassPoint::North,
            Trigram::Gen => CompassPoint::Northeast,
            Trigram::Kun => CompassPoint::Southwest,
        }
    }

    /// The family role this trigram governs
    pub fn role(self) -> &'static str {
        match self {
            Trigram::Qian => "父",
            Trigram::Dui => "少女",
            Trigram::Li => "中女",
            Trigram::Zhen => "長男",
            Trigram::Xun => "長女",
            Trigram::Kan => "中男",
            Trigram::Gen => "少男",
            Trigram::Kun => "母",
        }
    }

    pub fn element(self) -> &'static str {
        match self {
            Trigram::Qian | Trigram::Dui => "金",
            Trigram::Li => "火",
            Trigram::Zhen | Trigram::Xun => "木",
            Trigram::Kan => "水",
            Trigram::Gen | Trigram::Kun => "土",
        }
    }

    /// Trigram governing a compass direction
    pub fn from_direction(point: CompassPoint) -> Trigram {
        match point {
            CompassPoint::Northwest => Trigram::Qian,
            CompassPoint::West => Trigram::Dui,
            CompassPoint::South => Trigram::Li,
            CompassPoint::East => Trigram::Zhen,
            CompassPoint::Southeast => Trigram::Xun,
            CompassPoint::North => Trigram::Kan,
            CompassPoint::Northeast => Trigram::Gen,
            CompassPoint::Southwest => Trigram::Kun,
        }
    }

    /// Trigram for a family-member label, covering the common aliases
    pub fn for_member(label: &str) -> Option<Trigram> {
        let trigram = match label {
            "父" | "父親" | "男主人" | "老闆(男)" => Trigram::Qian,
            "母" | "母親" | "女主人" | "老闆(女)" => Trigram::Kun,
            "長子" | "長男" => Trigram::Zhen,
            "長女" => Trigram::Xun,
            "中男" | "次子" => Trigram::Kan,
            "中女" | "次女" => Trigram::Li,
            "少男" | "幼子" | "三子" => Trigram::Gen,
            "少女" | "幼女" | "三女" => Trigram::Dui,
            _ => return None,
        };
        Some(trigram)
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// (number, name) of the hexagram formed by HEXAGRAMS[upper - 1][lower - 1]
const HEXAGRAMS: [[(u8, &str); 8]; 8] = [
    // upper 乾
    [
        (1, "乾為天"),
        (10, "天澤履"),
        (13, "天火同人"),
        (25, "天雷无妄"),
        (44, "天風姤"),
        (6, "天水訟"),
        (33, "天山遯"),
        (12, "天地否"),
    ],
    // upper 兌
    [
        (43, "澤天夬"),
        (58, "兌為澤"),
        (49, "澤火革"),
        (17, "澤雷隨"),
        (28, "澤風大過"),
        (47, "澤水困"),
        (31, "澤山咸"),
        (45, "澤地萃"),
    ],
    // upper 離
    [
        (14, "火天大有"),
        (38, "火澤睽"),
        (30, "離為火"),
        (21, "火雷噬嗑"),
        (50, "火風鼎"),
        (64, "火水未濟"),
        (56, "火山旅"),
        (35, "火地晉"),
    ],
    // upper 震
    [
        (34, "雷天大壯"),
        (54, "雷澤歸妹"),
        (55, "雷火豐"),
        (51, "震為雷"),
        (32, "雷風恆"),
        (40, "雷水解"),
        (62, "雷山小過"),
        (16, "雷地豫"),
    ],
    // upper 巽
    [
        (9, "風天小畜"),
        (61, "風澤中孚"),
        (37, "風火家人"),
        (42, "風雷益"),
        (57, "巽為風"),
        (59, "風水渙"),
        (53, "風山漸"),
        (20, "風地觀"),
    ],
    // upper 坎
    [
        (5, "水天需"),
        (60, "水澤節"),
        (63, "水火既濟"),
        (3, "水雷屯"),
        (48, "水風井"),
        (29, "坎為水"),
        (39, "水山蹇"),
        (8, "水地比"),
    ],
    // upper 艮
    [
        (26, "山天大畜"),
        (41, "山澤損"),
        (22, "山火賁"),
        (27, "山雷頤"),
        (18, "山風蠱"),
        (4, "山水蒙"),
        (52, "艮為山"),
        (23, "山地剝"),
    ],
    // upper 坤
    [
        (11, "地天泰"),
        (19, "地澤臨"),
        (36, "地火明夷"),
        (24, "地雷復"),
        (46, "地風升"),
        (7, "地水師"),
        (15, "地山謙"),
        (2, "坤為地"),
    ],
];

/// A hexagram formed by stacking a person's trigram over a position's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hexagram {
    pub number: u8,
    pub name: &'static str,
    pub upper: Trigram,
    pub lower: Trigram,
}

impl Hexagram {
    /// The person sits in their own trigram's position
    pub fn is_native(&self) -> bool {
        self.upper == self.lower
    }
}

/// Look up the hexagram for an upper/lower trigram pair
pub fn hexagram(upper: Trigram, lower: Trigram) -> Hexagram {
    let (number, name) = HEXAGRAMS[upper.number() as usize - 1][lower.number() as usize - 1];
    Hexagram {
        number,
        name,
        upper,
        lower,
    }
}
