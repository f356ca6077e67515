//! Roommate Cards

use crate::models::Roommate;

/// Avatar palette, picked by `id % len` so a roommate keeps their color
pub const AVATAR_COLORS: [&str; 5] = ["#6c5ce7", "#00b894", "#e17055", "#0984e3", "#fdcb6e"];

#[derive(Debug, Clone, PartialEq)]
pub struct RoommateCard {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub color: &'static str,
}

/// "Taylor Brown" -> "TB": first letter of the first two words
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn avatar_color(id: u32) -> &'static str {
    AVATAR_COLORS[id as usize % AVATAR_COLORS.len()]
}

pub fn project_cards(roommates: &[Roommate]) -> Vec<RoommateCard> {
    roommates
        .iter()
        .map(|r| RoommateCard {
            id: r.id,
            name: r.name.clone(),
            email: r.email.clone(),
            initials: initials(&r.name),
            color: avatar_color(r.id),
        })
        .collect()
}
