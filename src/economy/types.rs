use crate::items::types::Rarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillType {
    /// Adds to tap damage
    Attack,
    /// Adds to auto damage per second
    Speed,
    /// Reserved; contributes to no stat yet
    Crit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: u32,
    pub base_cost: f64,
    pub cost_multiplier: f64,
    pub effect_per_level: f64,
    pub skill_type: SkillType,
    pub rarity: Rarity,
}

impl Skill {
    /// Total stat contribution at the current level.
    pub fn contribution(&self) -> f64 {
        self.level as f64 * self.effect_per_level
    }

    /// Gold needed for the next level.
    pub fn next_cost(&self) -> f64 {
        super::logic::upgrade_cost(self.base_cost, self.cost_multiplier, self.level)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: u32,
    pub base_cost: f64,
    /// Gold per second per level
    pub base_income: f64,
    pub cost_multiplier: f64,
}

impl Building {
    /// Gold per second before item bonuses.
    pub fn income(&self) -> f64 {
        self.base_income * self.level as f64
    }

    pub fn next_cost(&self) -> f64 {
        super::logic::upgrade_cost(self.base_cost, self.cost_multiplier, self.level)
    }
}

#[allow(clippy::too_many_arguments)]
fn skill(
    id: &str,
    name: &str,
    description: &str,
    level: u32,
    base_cost: f64,
    cost_multiplier: f64,
    effect_per_level: f64,
    skill_type: SkillType,
    rarity: Rarity,
) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        level,
        base_cost,
        cost_multiplier,
        effect_per_level,
        skill_type,
        rarity,
    }
}

fn building(
    id: &str,
    name: &str,
    description: &str,
    base_cost: f64,
    base_income: f64,
    cost_multiplier: f64,
) -> Building {
    Building {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        level: 0,
        base_cost,
        base_income,
        cost_multiplier,
    }
}

/// Skills a new game starts with. Basic Fist is already learned.
pub fn initial_skills() -> Vec<Skill> {
    vec![
        skill(
            "s1",
            "Basic Fist",
            "The foundation of all martial arts.",
            1,
            50.0,
            1.4,
            5.0,
            SkillType::Attack,
            Rarity::Common,
        ),
        skill(
            "s2",
            "Iron Skin",
            "Harden your body against impact.",
            0,
            200.0,
            1.5,
            10.0,
            SkillType::Attack,
            Rarity::Uncommon,
        ),
        skill(
            "s3",
            "Wind Steps",
            "Move like the wind.",
            0,
            1000.0,
            1.6,
            2.0,
            SkillType::Speed,
            Rarity::Rare,
        ),
        skill(
            "s4",
            "Dragon Palm",
            "Strike with the force of a dragon.",
            0,
            5000.0,
            1.8,
            50.0,
            SkillType::Attack,
            Rarity::Epic,
        ),
        skill(
            "s5",
            "Nine Suns Art",
            "The ultimate internal cultivation.",
            0,
            50000.0,
            2.0,
            200.0,
            SkillType::Attack,
            Rarity::Legendary,
        ),
    ]
}

/// Buildings a new game starts with, all unbuilt.
pub fn initial_buildings() -> Vec<Building> {
    vec![
        building(
            "b1",
            "Tea House",
            "A small place to rest and gather gossip.",
            100.0,
            5.0,
            1.15,
        ),
        building(
            "b2",
            "Tavern",
            "Where heroes meet and money flows.",
            1000.0,
            45.0,
            1.15,
        ),
        building(
            "b3",
            "Money House",
            "The center of finance in the city.",
            12000.0,
            300.0,
            1.2,
        ),
    ]
}
