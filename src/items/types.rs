#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Upper-case tag used to prefix re-rolled shop items, e.g. `[EPIC]`.
    pub fn tag(&self) -> &'static str {
        match self {
            Rarity::Common => "COMMON",
            Rarity::Uncommon => "UNCOMMON",
            Rarity::Rare => "RARE",
            Rarity::Epic => "EPIC",
            Rarity::Legendary => "LEGENDARY",
        }
    }

    /// Shop price multiplier applied to the template price.
    pub fn price_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 5.0,
            Rarity::Rare => 20.0,
            Rarity::Epic => 100.0,
            Rarity::Legendary => 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// Synthesis ingredient
    Material,
    /// Passive stats while in the bag
    Artifact,
    Weapon,
    Consumable,
}

impl ItemType {
    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Material => "Material",
            ItemType::Artifact => "Artifact",
            ItemType::Weapon => "Weapon",
            ItemType::Consumable => "Consumable",
        }
    }
}

/// Optional stat modifiers carried by an item.
///
/// Absent fields contribute nothing. Non-finite values are treated as absent
/// so a malformed effect can never poison the derived stats.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemEffects {
    pub attack_flat: Option<f64>,
    /// Multiplier bonus, `1.0` doubles damage
    pub attack_percent: Option<f64>,
    pub luck: Option<f64>,
    pub craftsmanship: Option<f64>,
    /// Passive gold bonus, `0.1` is +10%
    pub gold_rate: Option<f64>,
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

impl ItemEffects {
    pub fn attack_flat(&self) -> f64 {
        finite_or_zero(self.attack_flat)
    }

    pub fn attack_percent(&self) -> f64 {
        finite_or_zero(self.attack_percent)
    }

    pub fn luck(&self) -> f64 {
        finite_or_zero(self.luck)
    }

    pub fn craftsmanship(&self) -> f64 {
        finite_or_zero(self.craftsmanship)
    }

    pub fn gold_rate(&self) -> f64 {
        finite_or_zero(self.gold_rate)
    }

    pub fn is_empty(&self) -> bool {
        self.attack_flat() == 0.0
            && self.attack_percent() == 0.0
            && self.luck() == 0.0
            && self.craftsmanship() == 0.0
            && self.gold_rate() == 0.0
    }

    /// Short stat summary for list rows, e.g. "+25 ATK +10 Luck".
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.attack_flat() != 0.0 {
            parts.push(format!("+{} ATK", self.attack_flat()));
        }
        if self.attack_percent() != 0.0 {
            parts.push(format!("+{:.0}% ATK", self.attack_percent() * 100.0));
        }
        if self.luck() != 0.0 {
            parts.push(format!("+{} Luck", self.luck()));
        }
        if self.craftsmanship() != 0.0 {
            parts.push(format!("+{} Craft", self.craftsmanship()));
        }
        if self.gold_rate() != 0.0 {
            parts.push(format!("+{:.0}% Gold", self.gold_rate() * 100.0));
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub rarity: Rarity,
    pub price: f64,
    pub effects: ItemEffects,
    /// Synthesis group tag, e.g. `scroll_ancient`
    pub part_of: Option<String>,
}

impl Item {
    /// Name with any leading `[RARITY]` tag removed.
    pub fn base_name(&self) -> &str {
        match self.name.strip_prefix('[') {
            Some(rest) => match rest.find("] ") {
                Some(end) => &rest[end + 2..],
                None => &self.name,
            },
            None => &self.name,
        }
    }
}
