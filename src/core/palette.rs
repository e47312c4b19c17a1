//! Named color tables.

use serde::{Deserialize, Serialize};

/// An RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_ratatui(self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.0, self.1, self.2)
    }
}

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);

/// Names that make up the primary palette.
pub const PRIMARY_COLOR_NAMES: [&str; 8] = [
    "yellow", "blue", "green", "red", "purple", "white", "black", "orange",
];

/// Named colors (X11 names).
pub const ALL_COLORS: &[(&str, Rgb)] = &[
    ("aliceblue", Rgb(240, 248, 255)),
    ("antiquewhite", Rgb(250, 235, 215)),
    ("aquamarine", Rgb(127, 255, 212)),
    ("azure", Rgb(240, 255, 255)),
    ("beige", Rgb(245, 245, 220)),
    ("black", Rgb(0, 0, 0)),
    ("blue", Rgb(0, 0, 255)),
    ("blueviolet", Rgb(138, 43, 226)),
    ("brown", Rgb(165, 42, 42)),
    ("burlywood", Rgb(222, 184, 135)),
    ("cadetblue", Rgb(95, 158, 160)),
    ("chartreuse", Rgb(127, 255, 0)),
    ("chocolate", Rgb(210, 105, 30)),
    ("coral", Rgb(255, 127, 80)),
    ("cornflowerblue", Rgb(100, 149, 237)),
    ("crimson", Rgb(220, 20, 60)),
    ("cyan", Rgb(0, 255, 255)),
    ("darkgoldenrod", Rgb(184, 134, 11)),
    ("darkgreen", Rgb(0, 100, 0)),
    ("darkorange", Rgb(255, 140, 0)),
    ("darkorchid", Rgb(153, 50, 204)),
    ("deeppink", Rgb(255, 20, 147)),
    ("deepskyblue", Rgb(0, 191, 255)),
    ("dodgerblue", Rgb(30, 144, 255)),
    ("firebrick", Rgb(178, 34, 34)),
    ("forestgreen", Rgb(34, 139, 34)),
    ("gold", Rgb(255, 215, 0)),
    ("goldenrod", Rgb(218, 165, 32)),
    ("gray", Rgb(190, 190, 190)),
    ("green", Rgb(0, 255, 0)),
    ("greenyellow", Rgb(173, 255, 47)),
    ("hotpink", Rgb(255, 105, 180)),
    ("indianred", Rgb(205, 92, 92)),
    ("khaki", Rgb(240, 230, 140)),
    ("lavender", Rgb(230, 230, 250)),
    ("lawngreen", Rgb(124, 252, 0)),
    ("lightblue", Rgb(173, 216, 230)),
    ("lightcoral", Rgb(240, 128, 128)),
    ("lightgreen", Rgb(144, 238, 144)),
    ("lightpink", Rgb(255, 182, 193)),
    ("lightsalmon", Rgb(255, 160, 122)),
    ("lightseagreen", Rgb(32, 178, 170)),
    ("limegreen", Rgb(50, 205, 50)),
    ("magenta", Rgb(255, 0, 255)),
    ("maroon", Rgb(176, 48, 96)),
    ("mediumorchid", Rgb(186, 85, 211)),
    ("mediumpurple", Rgb(147, 112, 219)),
    ("midnightblue", Rgb(25, 25, 112)),
    ("navy", Rgb(0, 0, 128)),
    ("olivedrab", Rgb(107, 142, 35)),
    ("orange", Rgb(255, 165, 0)),
    ("orangered", Rgb(255, 69, 0)),
    ("orchid", Rgb(218, 112, 214)),
    ("palegreen", Rgb(152, 251, 152)),
    ("peachpuff", Rgb(255, 218, 185)),
    ("pink", Rgb(255, 192, 203)),
    ("plum", Rgb(221, 160, 221)),
    ("purple", Rgb(160, 32, 240)),
    ("red", Rgb(255, 0, 0)),
    ("royalblue", Rgb(65, 105, 225)),
    ("salmon", Rgb(250, 128, 114)),
    ("seagreen", Rgb(46, 139, 87)),
    ("sienna", Rgb(160, 82, 45)),
    ("skyblue", Rgb(135, 206, 235)),
    ("slateblue", Rgb(106, 90, 205)),
    ("springgreen", Rgb(0, 255, 127)),
    ("steelblue", Rgb(70, 130, 180)),
    ("tan", Rgb(210, 180, 140)),
    ("teal", Rgb(0, 128, 128)),
    ("tomato", Rgb(255, 99, 71)),
    ("turquoise", Rgb(64, 224, 208)),
    ("violet", Rgb(238, 130, 238)),
    ("wheat", Rgb(245, 222, 179)),
    ("white", Rgb(255, 255, 255)),
    ("yellow", Rgb(255, 255, 0)),
    ("yellowgreen", Rgb(154, 205, 50)),
];

/// Look up a color by name.
pub fn named(name: &str) -> Option<Rgb> {
    ALL_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, rgb)| rgb)
}

/// The subset of `ALL_COLORS` whose names are in `PRIMARY_COLOR_NAMES`.
pub fn primary_colors() -> Vec<Rgb> {
    ALL_COLORS
        .iter()
        .filter(|(name, _)| PRIMARY_COLOR_NAMES.contains(name))
        .map(|&(_, rgb)| rgb)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors_cover_every_name() {
        let primaries = primary_colors();
        assert_eq!(primaries.len(), PRIMARY_COLOR_NAMES.len());
        for name in PRIMARY_COLOR_NAMES {
            assert!(named(name).is_some(), "missing primary color {}", name);
        }
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(named("red"), Some(RED));
        assert_eq!(named("black"), Some(BLACK));
        assert_eq!(named("not-a-color"), None);
    }

    #[test]
    fn test_color_names_are_unique() {
        let mut names: Vec<&str> = ALL_COLORS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        let len = names.len();
        names.dedup();
        assert_eq!(names.len(), len);
    }
}
