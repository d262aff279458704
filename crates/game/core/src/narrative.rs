//! Narrative text shown when characters are born and when the lineage is
//! summarised. Pure string building; printing is up to the caller.

use crate::character::Character;
use crate::lineage::{ClassCounts, TierCounts};
use crate::tier::Tier;

/// Flavour line announced when a birth escalates into `tier`.
pub const fn tier_announcement(tier: Tier) -> Option<&'static str> {
    match tier {
        Tier::Normal => None,
        Tier::Awakened => Some(
            "Woah! Your birth was special... you have inherited much stronger bonds than usual! \
             Check if you obtained the Sharingan.",
        ),
        Tier::Empowered => {
            Some("This is unbelievable. You are a prodigy. Think Kekkei Touta in Naruto.")
        }
        Tier::Unleashed => Some(
            "There could be nothing stronger. You are blessed with the power of many different \
             bloodlines intertwining to create a near omnipotent being - yourself.",
        ),
    }
}

/// Announcements for every escalation passed on the way to `tier`, in order.
pub fn escalation_lines(tier: Tier) -> Vec<&'static str> {
    Tier::ALL
        .iter()
        .take_while(|step| **step <= tier)
        .filter_map(|step| tier_announcement(*step))
        .collect()
}

pub fn introduction(character: &Character) -> String {
    format!(
        "My name is {}! I am a mighty {} with proficient skill in {} and a special attribute in {}. \
         Additionally, I've always been reaaaally good at {}.",
        character.name(),
        character.class(),
        character.weapon_skill(),
        character.attribute(),
        character.ability(),
    )
}

pub fn inherited_line(character: &Character) -> String {
    format!(
        "Your total skill points gained from ancestors is {}",
        character.inheritance().bonus
    )
}

pub fn stats_line(character: &Character) -> String {
    format!("Here are my stats: {}", character.stats())
}

/// Full birth announcement: escalation flavour, introduction, inherited
/// bonus and final stats.
pub fn birth(character: &Character) -> Vec<String> {
    let mut lines: Vec<String> = character
        .inheritance()
        .tier
        .map(escalation_lines)
        .unwrap_or_default()
        .into_iter()
        .map(str::to_owned)
        .collect();
    lines.push(introduction(character));
    lines.push(inherited_line(character));
    lines.push(stats_line(character));
    lines
}

pub fn family_tree_types(counts: &ClassCounts) -> String {
    format!(
        "Your family tree contains: {} warriors, {} rogues, {} mages.",
        counts.warriors, counts.rogues, counts.mages
    )
}

pub fn family_tree_super_inheritances(counts: &TierCounts) -> String {
    format!(
        "Your family tree contains: {} normal members, {} awakened members (sharingan users), \
         {} empowered members (kekkei touta), {} unleashed members (post war narutos).",
        counts.normal, counts.awakened, counts.empowered, counts.unleashed
    )
}
