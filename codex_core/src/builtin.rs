//! Built-in reference dataset
//!
//! A playable slice of the reference tables, compiled in so the engine and
//! its tests run with no data files on disk. Applications with their own
//! catalogs load them via `Codex::load` instead.

use crate::class::{
    Capstone, ClassDescriptor, FeatureGrant, PreparedFormula, SpellcastingConfig,
    SubclassDescriptor, UnarmoredDefense,
};
use crate::item::{AbilityBonus, AbilityOverride, ItemDescriptor, ItemKind};
use crate::origin::{BackgroundDescriptor, FeatDescriptor, SpeciesDescriptor, SpellGrant};
use crate::registry::Codex;
use crate::spell::{School, SpellDescriptor};
use crate::types::{ArmorKind, CasterArchetype};

use crate::types::Ability::*;

fn grant(level: u8, name: &str) -> FeatureGrant {
    FeatureGrant {
        level,
        name: name.to_string(),
    }
}

impl Codex {
    /// Registry populated with the built-in reference dataset
    pub fn builtin() -> Self {
        let mut codex = Codex::new();
        for species in builtin_species() {
            codex.insert_species(species);
        }
        for class in builtin_classes() {
            codex.insert_class(class);
        }
        for subclass in builtin_subclasses() {
            codex.insert_subclass(subclass);
        }
        for background in builtin_backgrounds() {
            codex.insert_background(background);
        }
        for feat in builtin_feats() {
            codex.insert_feat(feat);
        }
        for item in builtin_items() {
            codex.insert_item(item);
        }
        for spell in builtin_spells() {
            codex.insert_spell(spell);
        }
        codex
    }
}

fn builtin_species() -> Vec<SpeciesDescriptor> {
    vec![
        SpeciesDescriptor {
            id: "human".to_string(),
            name: "Human".to_string(),
            hp_bonus_per_level: 0,
            speed: 30,
            traits: vec!["Resourceful".to_string(), "Skillful".to_string()],
        },
        SpeciesDescriptor {
            id: "hill_dwarf".to_string(),
            name: "Dwarf (Hill)".to_string(),
            hp_bonus_per_level: 1,
            speed: 25,
            traits: vec!["Darkvision".to_string(), "Dwarven Toughness".to_string()],
        },
        SpeciesDescriptor {
            id: "elf".to_string(),
            name: "Elf".to_string(),
            hp_bonus_per_level: 0,
            speed: 30,
            traits: vec!["Darkvision".to_string(), "Fey Ancestry".to_string()],
        },
        SpeciesDescriptor {
            id: "halfling".to_string(),
            name: "Halfling".to_string(),
            hp_bonus_per_level: 0,
            speed: 25,
            traits: vec!["Lucky".to_string(), "Brave".to_string()],
        },
    ]
}

fn builtin_classes() -> Vec<ClassDescriptor> {
    let standard_asi = vec![4, 8, 12, 16, 19];

    vec![
        ClassDescriptor {
            id: "barbarian".to_string(),
            name: "Barbarian".to_string(),
            hit_die: 12,
            save_proficiencies: vec![Strength, Constitution],
            skill_options: vec![
                "Animal Handling".to_string(),
                "Athletics".to_string(),
                "Intimidation".to_string(),
                "Nature".to_string(),
                "Perception".to_string(),
                "Survival".to_string(),
            ],
            stat_priority: vec![Strength, Constitution, Dexterity],
            subclass_level: 3,
            asi_levels: standard_asi.clone(),
            capstone: Some(Capstone {
                abilities: vec![Strength, Constitution],
                bonus: 4,
                cap: 25,
            }),
            unarmored_defense: Some(UnarmoredDefense {
                base: 10,
                abilities: vec![Dexterity, Constitution],
            }),
            all_saves_at: None,
            spellcasting: None,
            features: vec![
                grant(1, "Rage"),
                grant(2, "Reckless Attack"),
                grant(2, "Danger Sense"),
                grant(5, "Extra Attack"),
                grant(20, "Primal Champion"),
            ],
        },
        ClassDescriptor {
            id: "fighter".to_string(),
            name: "Fighter".to_string(),
            hit_die: 10,
            save_proficiencies: vec![Strength, Constitution],
            skill_options: vec![
                "Acrobatics".to_string(),
                "Athletics".to_string(),
                "History".to_string(),
                "Insight".to_string(),
                "Intimidation".to_string(),
                "Perception".to_string(),
            ],
            stat_priority: vec![Strength, Constitution, Dexterity],
            subclass_level: 3,
            asi_levels: vec![4, 6, 8, 12, 14, 16, 19],
            capstone: None,
            unarmored_defense: None,
            all_saves_at: None,
            spellcasting: None,
            features: vec![
                grant(1, "Second Wind"),
                grant(2, "Action Surge"),
                grant(5, "Extra Attack"),
                grant(9, "Indomitable"),
            ],
        },
        ClassDescriptor {
            id: "monk".to_string(),
            name: "Monk".to_string(),
            hit_die: 8,
            save_proficiencies: vec![Strength, Dexterity],
            skill_options: vec![
                "Acrobatics".to_string(),
                "Athletics".to_string(),
                "History".to_string(),
                "Insight".to_string(),
                "Religion".to_string(),
                "Stealth".to_string(),
            ],
            stat_priority: vec![Dexterity, Wisdom, Constitution],
            subclass_level: 3,
            asi_levels: standard_asi.clone(),
            capstone: Some(Capstone {
                abilities: vec![Dexterity, Wisdom],
                bonus: 4,
                cap: 25,
            }),
            unarmored_defense: Some(UnarmoredDefense {
                base: 10,
                abilities: vec![Dexterity, Wisdom],
            }),
            all_saves_at: Some(14),
            spellcasting: None,
            features: vec![
                grant(1, "Martial Arts"),
                grant(2, "Ki"),
                grant(5, "Extra Attack"),
                grant(14, "Diamond Soul"),
            ],
        },
        ClassDescriptor {
            id: "rogue".to_string(),
            name: "Rogue".to_string(),
            hit_die: 8,
            save_proficiencies: vec![Dexterity, Intelligence],
            skill_options: vec![
                "Acrobatics".to_string(),
                "Deception".to_string(),
                "Insight".to_string(),
                "Investigation".to_string(),
                "Perception".to_string(),
                "Sleight of Hand".to_string(),
                "Stealth".to_string(),
            ],
            stat_priority: vec![Dexterity, Intelligence, Constitution],
            subclass_level: 3,
            asi_levels: vec![4, 8, 10, 12, 16, 19],
            capstone: None,
            unarmored_defense: None,
            all_saves_at: None,
            spellcasting: None,
            features: vec![
                grant(1, "Sneak Attack"),
                grant(2, "Cunning Action"),
                grant(7, "Evasion"),
            ],
        },
        ClassDescriptor {
            id: "wizard".to_string(),
            name: "Wizard".to_string(),
            hit_die: 6,
            save_proficiencies: vec![Intelligence, Wisdom],
            skill_options: vec![
                "Arcana".to_string(),
                "History".to_string(),
                "Insight".to_string(),
                "Investigation".to_string(),
                "Medicine".to_string(),
                "Religion".to_string(),
            ],
            stat_priority: vec![Intelligence, Constitution, Dexterity],
            subclass_level: 3,
            asi_levels: standard_asi.clone(),
            capstone: None,
            unarmored_defense: None,
            all_saves_at: None,
            spellcasting: Some(SpellcastingConfig {
                archetype: CasterArchetype::Full,
                ability: Intelligence,
                cantrips_known: vec![3, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
                spells_known: None,
                prepared: Some(PreparedFormula {
                    divisor: 1,
                    round_up: false,
                }),
                resource_pool: None,
            }),
            features: vec![
                grant(1, "Arcane Recovery"),
                grant(18, "Spell Mastery"),
            ],
        },
        ClassDescriptor {
            id: "cleric".to_string(),
            name: "Cleric".to_string(),
            hit_die: 8,
            save_proficiencies: vec![Wisdom, Charisma],
            skill_options: vec![
                "History".to_string(),
                "Insight".to_string(),
                "Medicine".to_string(),
                "Persuasion".to_string(),
                "Religion".to_string(),
            ],
            stat_priority: vec![Wisdom, Constitution, Strength],
            subclass_level: 3,
            asi_levels: standard_asi.clone(),
            capstone: None,
            unarmored_defense: None,
            all_saves_at: None,
            spellcasting: Some(SpellcastingConfig {
                archetype: CasterArchetype::Full,
                ability: Wisdom,
                cantrips_known: vec![3, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
                spells_known: None,
                prepared: Some(PreparedFormula {
                    divisor: 1,
                    round_up: false,
                }),
                resource_pool: None,
            }),
            features: vec![grant(1, "Divine Order"), grant(2, "Channel Divinity")],
        },
        ClassDescriptor {
            id: "sorcerer".to_string(),
            name: "Sorcerer".to_string(),
            hit_die: 6,
            save_proficiencies: vec![Constitution, Charisma],
            skill_options: vec![
                "Arcana".to_string(),
                "Deception".to_string(),
                "Insight".to_string(),
                "Intimidation".to_string(),
                "Persuasion".to_string(),
                "Religion".to_string(),
            ],
            stat_priority: vec![Charisma, Constitution, Dexterity],
            subclass_level: 3,
            asi_levels: standard_asi.clone(),
            capstone: None,
            unarmored_defense: None,
            all_saves_at: None,
            spellcasting: Some(SpellcastingConfig {
                archetype: CasterArchetype::Full,
                ability: Charisma,
                cantrips_known: vec![4, 4, 4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
                spells_known: Some(vec![
                    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 12, 13, 13, 14, 14, 15, 15, 15, 15,
                ]),
                prepared: None,
                resource_pool: Some("sorcery_points".to_string()),
            }),
            features: vec![grant(2, "Font of Magic"), grant(3, "Metamagic")],
        },
        ClassDescriptor {
            id: "warlock".to_string(),
            name: "Warlock".to_string(),
            hit_die: 8,
            save_proficiencies: vec![Wisdom, Charisma],
            skill_options: vec![
                "Arcana".to_string(),
                "Deception".to_string(),
                "History".to_string(),
                "Intimidation".to_string(),
                "Investigation".to_string(),
                "Nature".to_string(),
            ],
            stat_priority: vec![Charisma, Constitution, Dexterity],
            subclass_level: 3,
            asi_levels: standard_asi.clone(),
            capstone: None,
            unarmored_defense: None,
            all_saves_at: None,
            spellcasting: Some(SpellcastingConfig {
                archetype: CasterArchetype::Pact,
                ability: Charisma,
                cantrips_known: vec![2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
                spells_known: Some(vec![
                    2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15,
                ]),
                prepared: None,
                resource_pool: None,
            }),
            features: vec![
                grant(1, "Eldritch Invocations"),
                grant(11, "Mystic Arcanum (6th level)"),
                grant(13, "Mystic Arcanum (7th level)"),
                grant(15, "Mystic Arcanum (8th level)"),
                grant(17, "Mystic Arcanum (9th level)"),
            ],
        },
        ClassDescriptor {
            id: "paladin".to_string(),
            name: "Paladin".to_string(),
            hit_die: 10,
            save_proficiencies: vec![Wisdom, Charisma],
            skill_options: vec![
                "Athletics".to_string(),
                "Insight".to_string(),
                "Intimidation".to_string(),
                "Medicine".to_string(),
                "Persuasion".to_string(),
                "Religion".to_string(),
            ],
            stat_priority: vec![Strength, Charisma, Constitution],
            subclass_level: 3,
            asi_levels: standard_asi.clone(),
            capstone: None,
            unarmored_defense: None,
            all_saves_at: None,
            spellcasting: Some(SpellcastingConfig {
                archetype: CasterArchetype::Half,
                ability: Charisma,
                cantrips_known: Vec::new(),
                spells_known: None,
                prepared: Some(PreparedFormula {
                    divisor: 2,
                    round_up: true,
                }),
                resource_pool: None,
            }),
            features: vec![
                grant(1, "Lay on Hands"),
                grant(2, "Divine Smite"),
                grant(6, "Aura of Protection"),
            ],
        },
        ClassDescriptor {
            id: "ranger".to_string(),
            name: "Ranger".to_string(),
            hit_die: 10,
            save_proficiencies: vec![Strength, Dexterity],
            skill_options: vec![
                "Animal Handling".to_string(),
                "Athletics".to_string(),
                "Insight".to_string(),
                "Investigation".to_string(),
                "Nature".to_string(),
                "Perception".to_string(),
                "Stealth".to_string(),
                "Survival".to_string(),
            ],
            stat_priority: vec![Dexterity, Wisdom, Constitution],
            subclass_level: 3,
            asi_levels: standard_asi,
            capstone: None,
            unarmored_defense: None,
            all_saves_at: None,
            spellcasting: Some(SpellcastingConfig {
                archetype: CasterArchetype::Half,
                ability: Wisdom,
                cantrips_known: Vec::new(),
                spells_known: None,
                prepared: Some(PreparedFormula {
                    divisor: 2,
                    round_up: false,
                }),
                resource_pool: None,
            }),
            features: vec![grant(1, "Favored Enemy"), grant(5, "Extra Attack")],
        },
    ]
}

fn builtin_subclasses() -> Vec<SubclassDescriptor> {
    vec![
        SubclassDescriptor {
            id: "berserker".to_string(),
            name: "Path of the Berserker".to_string(),
            class: "barbarian".to_string(),
            unarmored_defense: None,
            hp_bonus_per_level: 0,
            spellcasting: None,
            features: vec![grant(3, "Frenzy"), grant(6, "Mindless Rage")],
        },
        SubclassDescriptor {
            id: "champion".to_string(),
            name: "Champion".to_string(),
            class: "fighter".to_string(),
            unarmored_defense: None,
            hp_bonus_per_level: 0,
            spellcasting: None,
            features: vec![grant(3, "Improved Critical"), grant(7, "Remarkable Athlete")],
        },
        SubclassDescriptor {
            id: "eldritch_knight".to_string(),
            name: "Eldritch Knight".to_string(),
            class: "fighter".to_string(),
            unarmored_defense: None,
            hp_bonus_per_level: 0,
            spellcasting: Some(SpellcastingConfig {
                archetype: CasterArchetype::Third,
                ability: Intelligence,
                cantrips_known: vec![0, 0, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
                spells_known: Some(vec![
                    0, 0, 3, 4, 4, 4, 5, 6, 6, 7, 8, 8, 9, 10, 10, 11, 11, 11, 12, 13,
                ]),
                prepared: None,
                resource_pool: None,
            }),
            features: vec![grant(3, "War Bond"), grant(7, "War Magic")],
        },
        SubclassDescriptor {
            id: "draconic_sorcery".to_string(),
            name: "Draconic Sorcery".to_string(),
            class: "sorcerer".to_string(),
            unarmored_defense: Some(UnarmoredDefense {
                base: 13,
                abilities: vec![Dexterity],
            }),
            hp_bonus_per_level: 1,
            spellcasting: None,
            features: vec![grant(3, "Draconic Resilience"), grant(6, "Elemental Affinity")],
        },
        SubclassDescriptor {
            id: "open_hand".to_string(),
            name: "Warrior of the Open Hand".to_string(),
            class: "monk".to_string(),
            unarmored_defense: None,
            hp_bonus_per_level: 0,
            spellcasting: None,
            features: vec![grant(3, "Open Hand Technique"), grant(6, "Wholeness of Body")],
        },
        SubclassDescriptor {
            id: "life_domain".to_string(),
            name: "Life Domain".to_string(),
            class: "cleric".to_string(),
            unarmored_defense: None,
            hp_bonus_per_level: 0,
            spellcasting: None,
            features: vec![grant(3, "Disciple of Life"), grant(6, "Blessed Healer")],
        },
    ]
}

fn builtin_backgrounds() -> Vec<BackgroundDescriptor> {
    vec![
        BackgroundDescriptor {
            id: "soldier".to_string(),
            name: "Soldier".to_string(),
            ability_scores: vec![Strength, Constitution],
            skill_proficiencies: vec!["Athletics".to_string(), "Intimidation".to_string()],
        },
        BackgroundDescriptor {
            id: "sage".to_string(),
            name: "Sage".to_string(),
            ability_scores: vec![Intelligence, Wisdom],
            skill_proficiencies: vec!["Arcana".to_string(), "History".to_string()],
        },
        BackgroundDescriptor {
            id: "acolyte".to_string(),
            name: "Acolyte".to_string(),
            ability_scores: vec![Wisdom, Charisma],
            skill_proficiencies: vec!["Insight".to_string(), "Religion".to_string()],
        },
        BackgroundDescriptor {
            id: "criminal".to_string(),
            name: "Criminal".to_string(),
            ability_scores: vec![Dexterity, Intelligence],
            skill_proficiencies: vec!["Sleight of Hand".to_string(), "Stealth".to_string()],
        },
    ]
}

fn builtin_feats() -> Vec<FeatDescriptor> {
    vec![
        FeatDescriptor {
            id: "tough".to_string(),
            name: "Tough".to_string(),
            hp_bonus_per_level: 2,
            armored_ac_bonus: 0,
            spell_grant: None,
        },
        FeatDescriptor {
            id: "defense_style".to_string(),
            name: "Fighting Style: Defense".to_string(),
            hp_bonus_per_level: 0,
            armored_ac_bonus: 1,
            spell_grant: None,
        },
        FeatDescriptor {
            id: "magic_initiate".to_string(),
            name: "Magic Initiate".to_string(),
            hp_bonus_per_level: 0,
            armored_ac_bonus: 0,
            spell_grant: Some(SpellGrant {
                ability: Intelligence,
                cantrips: 2,
                spells: 1,
            }),
        },
    ]
}

fn builtin_items() -> Vec<ItemDescriptor> {
    fn plain(id: &str, name: &str, kind: ItemKind) -> ItemDescriptor {
        ItemDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            ac_bonus: 0,
            save_bonus: 0,
            unarmored_ward: 0,
            ability_bonuses: Vec::new(),
            ability_overrides: Vec::new(),
        }
    }

    fn armor(id: &str, name: &str, base_ac: i32, kind: ArmorKind) -> ItemDescriptor {
        plain(
            id,
            name,
            ItemKind::Armor {
                base_ac,
                armor: kind,
            },
        )
    }

    let mut items = vec![
        // Weapons
        plain(
            "dagger",
            "Dagger",
            ItemKind::Weapon {
                damage: "1d4 piercing".to_string(),
            },
        ),
        plain(
            "quarterstaff",
            "Quarterstaff",
            ItemKind::Weapon {
                damage: "1d6 bludgeoning".to_string(),
            },
        ),
        plain(
            "longsword",
            "Longsword",
            ItemKind::Weapon {
                damage: "1d8 slashing".to_string(),
            },
        ),
        plain(
            "greataxe",
            "Greataxe",
            ItemKind::Weapon {
                damage: "1d12 slashing".to_string(),
            },
        ),
        // Armor
        armor("leather_armor", "Leather Armor", 11, ArmorKind::Light),
        armor("studded_leather", "Studded Leather", 12, ArmorKind::Light),
        armor("scale_mail", "Scale Mail", 14, ArmorKind::Medium),
        armor("half_plate", "Half Plate", 15, ArmorKind::Medium),
        armor("chain_mail", "Chain Mail", 16, ArmorKind::Heavy),
        armor("plate_armor", "Plate Armor", 18, ArmorKind::Heavy),
        plain("shield", "Shield", ItemKind::Shield { bonus: 2 }),
    ];

    // Magic variants are distinct catalog entries, not parsed name suffixes
    let mut plate_plus_1 = armor("plate_armor_plus_1", "Plate Armor +1", 18, ArmorKind::Heavy);
    plate_plus_1.ac_bonus = 1;
    items.push(plate_plus_1);

    let mut ring = plain("ring_of_protection", "Ring of Protection", ItemKind::Gear);
    ring.ac_bonus = 1;
    ring.save_bonus = 1;
    items.push(ring);

    let mut cloak = plain("cloak_of_protection", "Cloak of Protection", ItemKind::Gear);
    cloak.ac_bonus = 1;
    cloak.save_bonus = 1;
    items.push(cloak);

    let mut bracers = plain("bracers_of_defense", "Bracers of Defense", ItemKind::Gear);
    bracers.unarmored_ward = 2;
    items.push(bracers);

    let mut gauntlets = plain(
        "gauntlets_of_ogre_power",
        "Gauntlets of Ogre Power",
        ItemKind::Gear,
    );
    gauntlets.ability_overrides = vec![AbilityOverride {
        ability: Strength,
        value: 19,
    }];
    items.push(gauntlets);

    let mut headband = plain(
        "headband_of_intellect",
        "Headband of Intellect",
        ItemKind::Gear,
    );
    headband.ability_overrides = vec![AbilityOverride {
        ability: Intelligence,
        value: 19,
    }];
    items.push(headband);

    let mut amulet = plain("amulet_of_health", "Amulet of Health", ItemKind::Gear);
    amulet.ability_overrides = vec![AbilityOverride {
        ability: Constitution,
        value: 19,
    }];
    items.push(amulet);

    let mut belt = plain(
        "belt_of_hill_giant_strength",
        "Belt of Hill Giant Strength",
        ItemKind::Gear,
    );
    belt.ability_overrides = vec![AbilityOverride {
        ability: Strength,
        value: 21,
    }];
    items.push(belt);

    let mut ioun_stone = plain(
        "ioun_stone_of_fortitude",
        "Ioun Stone of Fortitude",
        ItemKind::Gear,
    );
    ioun_stone.ability_bonuses = vec![AbilityBonus {
        ability: Constitution,
        amount: 2,
        cap: 20,
    }];
    items.push(ioun_stone);

    items
}

fn builtin_spells() -> Vec<SpellDescriptor> {
    fn spell(id: &str, name: &str, level: u8, school: School, ritual: bool) -> SpellDescriptor {
        SpellDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            level,
            school,
            ritual,
        }
    }

    vec![
        spell("fire_bolt", "Fire Bolt", 0, School::Evocation, false),
        spell("eldritch_blast", "Eldritch Blast", 0, School::Evocation, false),
        spell("mage_hand", "Mage Hand", 0, School::Conjuration, false),
        spell("sacred_flame", "Sacred Flame", 0, School::Evocation, false),
        spell("detect_magic", "Detect Magic", 1, School::Divination, true),
        spell("magic_missile", "Magic Missile", 1, School::Evocation, false),
        spell("cure_wounds", "Cure Wounds", 1, School::Abjuration, false),
        spell("shield", "Shield", 1, School::Abjuration, false),
        spell("misty_step", "Misty Step", 2, School::Conjuration, false),
        spell("fireball", "Fireball", 3, School::Evocation, false),
        spell("counterspell", "Counterspell", 3, School::Abjuration, false),
    ]
}
