//! English and Chinese UI strings.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    /// Parses a language code such as `en` or `zh-CN`. Unknown codes give None.
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_ascii_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or("");
        match primary {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("power", "Power"),
    ("gold", "Gold"),
    ("stage", "Stage"),
    ("battle", "Battle"),
    ("kungfu", "Kung Fu"),
    ("invest", "Invest"),
    ("shop", "Shop"),
    ("bag", "Bag"),
    ("refresh", "Refresh"),
    ("buy", "Buy"),
    ("train", "Train"),
    ("upgrade", "Upgrade"),
    ("synthesize", "Synthesize"),
    ("boss_challenge", "Boss Challenge"),
    ("minion", "Minion"),
    ("boss", "Boss"),
    ("searching", "Searching..."),
    ("luck", "Luck"),
    ("craft", "Craft"),
    ("effect", "Effect"),
    ("cost", "Cost"),
    ("income", "Income"),
    ("boss_warning", "Challenge the Boss?"),
    ("boss_desc", "Defeat to advance to next stage."),
    ("painting", "Paint"),
];

const ZH: &[(&str, &str)] = &[
    ("power", "战力"),
    ("gold", "铜钱"),
    ("stage", "关卡"),
    ("battle", "游历"),
    ("kungfu", "功法"),
    ("invest", "产业"),
    ("shop", "集市"),
    ("bag", "背包"),
    ("refresh", "刷新"),
    ("buy", "购买"),
    ("train", "修炼"),
    ("upgrade", "升级"),
    ("synthesize", "合成"),
    ("boss_challenge", "通缉"),
    ("minion", "杂鱼"),
    ("boss", "首领"),
    ("searching", "寻觅中..."),
    ("luck", "气运"),
    ("craft", "工艺"),
    ("effect", "效果"),
    ("cost", "消耗"),
    ("income", "收益"),
    ("boss_warning", "挑战首领？"),
    ("boss_desc", "击败首领进入下一关"),
    ("painting", "作画"),
];

/// Looks up `key` for `lang`, falling back to the key itself.
pub fn t(lang: Language, key: &str) -> &str {
    let table = match lang {
        Language::En => EN,
        Language::Zh => ZH,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
