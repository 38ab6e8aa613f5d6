//! # Character Generation
//!
//! Fifth-edition style ability rolls, class tables, starting gear, and
//! character-sheet export.
//!
//! ```text
//! roll_ability_score()  4d6, each 1 re-rolled once, keep highest 3
//! generate_character()  6 rolls, sorted, primary/secondary first
//! generate_gold()       60 (10%) | 40 (30%) | 20 (60%)
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rand::{Rng, RngCore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Strength,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
    Dexterity,
}

impl Ability {
    /// Canonical order used for assignment and display.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
        Ability::Dexterity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
            Ability::Dexterity => "Dexterity",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Barbarian,
    Rogue,
    Wizard,
    Paladin,
    Warlock,
    Cleric,
    Monk,
    Ranger,
}

/// Starting equipment for a class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gear {
    pub weapons: Vec<String>,
    pub armor: Vec<String>,
    pub items: Vec<String>,
}

const TRAVEL_KIT: &[&str] = &[
    "Bedroll",
    "Mess kit",
    "Tinderbox",
    "Torches (10)",
    "Rations (10 days)",
    "Waterskin",
    "Hemp rope (50 feet)",
];

impl Class {
    pub const ALL: [Class; 8] = [
        Class::Barbarian,
        Class::Rogue,
        Class::Wizard,
        Class::Paladin,
        Class::Warlock,
        Class::Cleric,
        Class::Monk,
        Class::Ranger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Class::Barbarian => "Barbarian",
            Class::Rogue => "Rogue",
            Class::Wizard => "Wizard",
            Class::Paladin => "Paladin",
            Class::Warlock => "Warlock",
            Class::Cleric => "Cleric",
            Class::Monk => "Monk",
            Class::Ranger => "Ranger",
        }
    }

    /// (primary, secondary) abilities.
    pub fn key_abilities(self) -> (Ability, Ability) {
        use Ability::*;
        match self {
            Class::Barbarian => (Strength, Constitution),
            Class::Rogue => (Dexterity, Intelligence),
            Class::Wizard => (Intelligence, Wisdom),
            Class::Paladin => (Strength, Charisma),
            Class::Warlock => (Charisma, Constitution),
            Class::Cleric => (Wisdom, Constitution),
            Class::Monk => (Dexterity, Wisdom),
            Class::Ranger => (Dexterity, Wisdom),
        }
    }

    pub fn starting_gear(self) -> Gear {
        let (weapons, armor, pack): (&[&str], &[&str], &[&str]) = match self {
            Class::Barbarian => (
                &["Greataxe", "Handaxe (2)", "Javelin (4)"],
                &["Leather armor", "Shield"],
                &["Explorer's pack"],
            ),
            Class::Rogue => (
                &["Rapier", "Shortbow", "Arrows (20)", "Dagger (2)"],
                &["Leather armor"],
                &["Burglar's pack", "Thieves' tools"],
            ),
            Class::Wizard => (
                &["Quarterstaff", "Dagger (2)"],
                &[],
                &["Scholar's pack", "Spellbook", "Component pouch"],
            ),
            Class::Paladin => (
                &["Longsword", "Shield", "Javelin (5)"],
                &["Chain mail"],
                &["Explorer's pack", "Holy symbol"],
            ),
            Class::Warlock => (
                &["Light crossbow", "Crossbow bolts (20)", "Dagger (2)"],
                &["Leather armor"],
                &["Scholar's pack", "Arcane focus", "Simple weapon"],
            ),
            Class::Cleric => (
                &["Mace", "Light crossbow", "Crossbow bolts (20)", "Shield"],
                &["Scale mail"],
                &["Explorer's pack", "Holy symbol"],
            ),
            Class::Monk => (&["Shortsword", "Dart (10)"], &[], &["Dungeoneer's pack"]),
            Class::Ranger => (
                &["Longbow", "Arrows (20)", "Shortsword (2)", "Handaxe (2)"],
                &["Leather armor"],
                &["Explorer's pack"],
            ),
        };
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Gear {
            weapons: owned(weapons),
            armor: owned(armor),
            items: pack.iter().chain(TRAVEL_KIT).map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One score per ability, indexed by [`Ability`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbilityScores([u8; 6]);

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> u8 {
        self.0[ability.index()]
    }

    fn set(&mut self, ability: Ability, score: u8) {
        self.0[ability.index()] = score;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, u8)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

/// Everything a roll produces. Always regenerated as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub class: Option<Class>,
    pub scores: AbilityScores,
    pub gear: Gear,
    pub gold: u32,
}

impl Character {
    pub fn roll(class: Option<Class>, rng: &mut dyn RngCore) -> Self {
        Self {
            class,
            scores: generate_character(class, rng),
            gear: class.map(Class::starting_gear).unwrap_or_default(),
            gold: generate_gold(rng),
        }
    }

    /// "(Primary)" / "(Secondary)" tag for an ability, if any.
    pub fn marker(&self, ability: Ability) -> Option<&'static str> {
        let (primary, secondary) = self.class?.key_abilities();
        if ability == primary {
            Some("Primary")
        } else if ability == secondary {
            Some("Secondary")
        } else {
            None
        }
    }
}

/// Four d6, any 1 re-rolled once, sum of the highest three.
pub fn roll_ability_score(rng: &mut dyn RngCore) -> u8 {
    let mut rolls: [u8; 4] = [0; 4];
    for roll in rolls.iter_mut() {
        let mut value = rng.gen_range(1..=6u8);
        if value == 1 {
            value = rng.gen_range(1..=6u8);
        }
        *roll = value;
    }
    rolls.sort_unstable_by(|a, b| b.cmp(a));
    rolls[..3].iter().sum()
}

pub fn generate_character(class: Option<Class>, rng: &mut dyn RngCore) -> AbilityScores {
    let mut rolls: Vec<u8> = (0..Ability::ALL.len()).map(|_| roll_ability_score(rng)).collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));

    let mut scores = AbilityScores::default();
    let mut remaining = rolls.into_iter();

    let reserved = class.map(Class::key_abilities);
    if let Some((primary, secondary)) = reserved {
        scores.set(primary, remaining.next().unwrap_or_default());
        scores.set(secondary, remaining.next().unwrap_or_default());
    }

    for ability in Ability::ALL {
        if reserved.is_some_and(|(p, s)| ability == p || ability == s) {
            continue;
        }
        scores.set(ability, remaining.next().unwrap_or_default());
    }
    scores
}

pub fn generate_gold(rng: &mut dyn RngCore) -> u32 {
    match rng.gen_range(0..100u32) {
        0..10 => 60,
        10..40 => 40,
        _ => 20,
    }
}

// ============================================================================
// Export
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Text,
    Html,
}

impl SheetFormat {
    fn extension(self) -> &'static str {
        match self {
            SheetFormat::Text => "txt",
            SheetFormat::Html => "html",
        }
    }
}

/// `<Class>_Character_<YYYY-MM-DD_HH-MM-SS>.<ext>`
pub fn sheet_file_name(character: &Character, format: SheetFormat, at: DateTime<Local>) -> String {
    let class = character.class.map(Class::name).unwrap_or("Adventurer");
    format!(
        "{}_Character_{}.{}",
        class,
        at.format("%Y-%m-%d_%H-%M-%S"),
        format.extension()
    )
}

/// Write the sheet into `dir` and return the full path.
pub fn export_sheet(
    character: &Character,
    format: SheetFormat,
    dir: &Path,
    at: DateTime<Local>,
) -> io::Result<PathBuf> {
    let contents = match format {
        SheetFormat::Text => render_text_sheet(character),
        SheetFormat::Html => render_html_sheet(character),
    };
    fs::create_dir_all(dir)?;
    let path = dir.join(sheet_file_name(character, format, at));
    fs::write(&path, contents)?;
    Ok(path)
}

const FOOTER: &str = "Generated by Toolbox RPG Character Creator";

pub fn render_text_sheet(character: &Character) -> String {
    let mut out = String::new();
    out.push_str("===============================\n");
    out.push_str("       D&D 5E CHARACTER SHEET\n");
    out.push_str("===============================\n\n");

    if let Some(class) = character.class {
        out.push_str(&format!("Class: {class}\n\n"));
    }

    out.push_str("ABILITY SCORES:\n");
    out.push_str("---------------\n");
    for (ability, score) in character.scores.iter() {
        let marker = character
            .marker(ability)
            .map(|m| format!(" ({m})"))
            .unwrap_or_default();
        out.push_str(&format!("{:<13}: {:>2}{}\n", ability.name(), score, marker));
    }

    out.push_str(&format!("\nGOLD: {} gp\n\n", character.gold));

    for (heading, list) in [
        ("WEAPONS", &character.gear.weapons),
        ("ARMOR", &character.gear.armor),
        ("EQUIPMENT", &character.gear.items),
    ] {
        if list.is_empty() {
            continue;
        }
        out.push_str(&format!("{heading}:\n{}\n", "-".repeat(heading.len() + 1)));
        for entry in list {
            out.push_str(&format!("• {entry}\n"));
        }
        out.push('\n');
    }

    out.push_str(FOOTER);
    out.push('\n');
    out
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_html_sheet(character: &Character) -> String {
    let mut out = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>D&amp;D 5E Character Sheet</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; line-height: 1.6; }
        .header { text-align: center; border-bottom: 2px solid #333; padding-bottom: 10px; margin-bottom: 20px; }
        .section { margin-bottom: 20px; }
        .section h3 { color: #333; border-bottom: 1px solid #ccc; padding-bottom: 5px; }
        .stats { display: grid; grid-template-columns: repeat(2, 1fr); gap: 10px; }
        .stat { padding: 8px; background: #f5f5f5; border-radius: 4px; }
        .primary { background: #ffd700; font-weight: bold; }
        .secondary { background: #c0c0c0; font-weight: bold; }
        .footer { margin-top: 30px; text-align: center; color: #666; font-size: 12px; }
        @media print { body { margin: 0; } }
    </style>
</head>
<body>
    <div class="header">
        <h1>D&amp;D 5E CHARACTER SHEET</h1>
"#,
    );

    if let Some(class) = character.class {
        out.push_str(&format!("        <h2>{class}</h2>\n"));
    }
    out.push_str("    </div>\n");

    out.push_str("    <div class=\"section\">\n        <h3>Ability Scores</h3>\n        <div class=\"stats\">\n");
    for (ability, score) in character.scores.iter() {
        let css = match character.marker(ability) {
            Some("Primary") => "stat primary",
            Some(_) => "stat secondary",
            None => "stat",
        };
        out.push_str(&format!(
            "            <div class=\"{css}\">{}: {score}</div>\n",
            ability.name()
        ));
    }
    out.push_str("        </div>\n    </div>\n");

    out.push_str(&format!(
        "    <div class=\"section\">\n        <h3>Gold</h3>\n        <p><strong>{} gp</strong></p>\n    </div>\n",
        character.gold
    ));

    for (heading, list) in [
        ("Weapons", &character.gear.weapons),
        ("Armor", &character.gear.armor),
        ("Equipment", &character.gear.items),
    ] {
        if list.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "    <div class=\"section\">\n        <h3>{heading}</h3>\n        <ul>\n"
        ));
        for entry in list {
            out.push_str(&format!("            <li>{}</li>\n", escape_html(entry)));
        }
        out.push_str("        </ul>\n    </div>\n");
    }

    out.push_str(&format!(
        "    <div class=\"footer\">\n        <p>{FOOTER}</p>\n        <p><em>To convert to PDF: open this file in a browser and use Print, then Save as PDF</em></p>\n    </div>\n</body>\n</html>\n"
    ));
    out
}
