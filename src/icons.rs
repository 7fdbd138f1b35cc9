//! Icons bundled with the gallery.

use svg_icon::IconMap;

pub const STAR: &str = include_str!("../assets/icons/star.svg");
pub const HEART: &str = include_str!("../assets/icons/heart.svg");
pub const CHECK: &str = include_str!("../assets/icons/check.svg");
pub const CANCEL: &str = include_str!("../assets/icons/cancel.svg");

pub fn bundled_icons() -> IconMap {
    [("star", STAR), ("heart", HEART), ("check", CHECK), ("cancel", CANCEL)]
        .into_iter()
        .map(|(name, markup)| (name.to_string(), markup.to_string()))
        .collect()
}
