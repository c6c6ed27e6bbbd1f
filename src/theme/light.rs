//! Built-in light theme tokens.

use std::collections::BTreeMap;

use super::{Breakpoints, Direction, Font, Theme};

const SIZING: &[(&str, &str)] = &[
    ("scale0", "2px"),
    ("scale100", "4px"),
    ("scale200", "6px"),
    ("scale300", "8px"),
    ("scale400", "10px"),
    ("scale500", "12px"),
    ("scale550", "14px"),
    ("scale600", "16px"),
    ("scale650", "18px"),
    ("scale700", "20px"),
    ("scale750", "22px"),
    ("scale800", "24px"),
    ("scale850", "28px"),
    ("scale900", "32px"),
    ("scale950", "36px"),
    ("scale1000", "40px"),
    ("scale1200", "48px"),
    ("scale1400", "56px"),
    ("scale1600", "64px"),
    ("scale2400", "96px"),
    ("scale3200", "128px"),
    ("scale4800", "192px"),
];

const COLORS: &[(&str, &str)] = &[
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("primary", "#000000"),
    ("primaryA", "#000000"),
    ("primaryB", "#FFFFFF"),
    ("accent", "#276EF1"),
    ("negative", "#E11900"),
    ("positive", "#05944F"),
    ("warning", "#FFC043"),
    ("mono100", "#FFFFFF"),
    ("mono200", "#F6F6F6"),
    ("mono300", "#EEEEEE"),
    ("mono400", "#CBCBCB"),
    ("mono500", "#AFAFAF"),
    ("mono600", "#757575"),
    ("mono700", "#545454"),
    ("mono800", "#333333"),
    ("mono900", "#1F1F1F"),
    ("mono1000", "#000000"),
    ("contentPrimary", "#000000"),
    ("contentSecondary", "#545454"),
    ("contentTertiary", "#757575"),
    ("contentNegative", "#E11900"),
    ("contentPositive", "#05944F"),
    ("backgroundPrimary", "#FFFFFF"),
    ("backgroundSecondary", "#F6F6F6"),
    ("borderOpaque", "#E2E2E2"),
    ("borderSelected", "#000000"),
];

const SANS: &str = "system-ui, \"Helvetica Neue\", Helvetica, Arial, sans-serif";
const MONO: &str = "\"Lucida Console\", Monaco, monospace";

const TYPOGRAPHY: &[(&str, &str, &str, &str, &str)] = &[
    ("ParagraphXSmall", SANS, "12px", "normal", "20px"),
    ("ParagraphSmall", SANS, "14px", "normal", "20px"),
    ("ParagraphMedium", SANS, "16px", "normal", "24px"),
    ("ParagraphLarge", SANS, "18px", "normal", "28px"),
    ("LabelSmall", SANS, "14px", "500", "16px"),
    ("LabelMedium", SANS, "16px", "500", "20px"),
    ("HeadingSmall", SANS, "20px", "700", "28px"),
    ("MonoParagraphXSmall", MONO, "12px", "normal", "20px"),
];

pub(super) fn light_theme() -> Theme {
    let pairs = |table: &[(&str, &str)]| {
        table
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>()
    };

    let typography = TYPOGRAPHY
        .iter()
        .map(|(name, family, size, weight, line)| {
            (
                name.to_string(),
                Font {
                    font_family: family.to_string(),
                    font_size: size.to_string(),
                    font_weight: weight.to_string(),
                    line_height: line.to_string(),
                },
            )
        })
        .collect();

    Theme {
        name: "light".to_string(),
        direction: Direction::Ltr,
        breakpoints: Breakpoints::default(),
        sizing: pairs(SIZING),
        colors: pairs(COLORS),
        typography,
    }
}
