use thiserror::Error;

use crate::combat::types::Enemy;
use crate::economy::types::{Building, Skill};
use crate::items::types::Item;

/// Opaque image data returned by a generator. Only ever cached, never decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Base64 image bytes as delivered by the service
    pub data: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArtError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("API key rejected (HTTP {status})")]
    Credential { status: u16 },
    #[error("image service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("response contained no image")]
    NoImage,
    #[error("could not read response: {0}")]
    Decode(String),
}

impl ArtError {
    /// True when the player should be asked for a new API key rather than
    /// just shown a failure.
    pub fn needs_credential(&self) -> bool {
        matches!(
            self,
            ArtError::MissingCredential | ArtError::Credential { .. }
        )
    }
}

/// Anything that can paint a subject.
///
/// Implementations run on the studio worker thread, so they may block.
pub trait ImageGenerator: Send + 'static {
    fn generate(&mut self, subject: &str) -> Result<ImagePayload, ArtError>;

    /// Replaces the credential used for later requests.
    fn set_credential(&mut self, _api_key: String) {}
}

/// A cache key plus the prompt subject for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtSubject {
    pub key: String,
    pub subject: String,
}

impl ArtSubject {
    /// Art for the enemy currently being fought.
    pub fn enemy(enemy: &Enemy) -> Self {
        if enemy.is_boss {
            Self {
                key: format!("boss_{}_{}", enemy.name, enemy.id),
                subject: format!("{} Boss Monster, fierce, demonic", enemy.name),
            }
        } else {
            Self {
                key: format!("monster_{}", enemy.name),
                subject: format!("{} enemy, weak, minion", enemy.name),
            }
        }
    }

    /// Portrait on the boss challenge banner.
    pub fn boss_avatar(boss: &Enemy) -> Self {
        Self {
            key: format!("boss_avatar_{}", boss.name),
            subject: format!("{} face, chinese painting", boss.name),
        }
    }

    pub fn skill(skill: &Skill) -> Self {
        Self {
            key: format!("skill_{}", skill.name),
            subject: format!("{}, martial arts technique book or stance", skill.name),
        }
    }

    pub fn building(building: &Building) -> Self {
        Self {
            key: format!("building_{}", building.name),
            subject: format!("Ancient Chinese {}, architecture", building.name),
        }
    }

    /// Items share art across rarities, so the rarity tag is left out.
    pub fn item(item: &Item) -> Self {
        let name = item.base_name().trim();
        Self {
            key: format!("item_{}", name),
            subject: format!("object {}, chinese ink painting", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::pool::item_pool;
    use crate::items::shop::make_listing;
    use crate::items::types::Rarity;

    #[test]
    fn test_credential_errors() {
        assert!(ArtError::MissingCredential.needs_credential());
        assert!(ArtError::Credential { status: 403 }.needs_credential());
        assert!(!ArtError::NoImage.needs_credential());
        assert!(!ArtError::Transport("timeout".to_string()).needs_credential());
    }

    #[test]
    fn test_enemy_keys() {
        let minion = Enemy::new("minion-1".to_string(), "Bandit".to_string(), 75, 1, false);
        assert_eq!(ArtSubject::enemy(&minion).key, "monster_Bandit");

        let boss = Enemy::new("boss-1-9".to_string(), "Wolf King".to_string(), 750, 1, true);
        assert_eq!(ArtSubject::enemy(&boss).key, "boss_Wolf King_boss-1-9");
        assert_eq!(ArtSubject::boss_avatar(&boss).key, "boss_avatar_Wolf King");
    }

    #[test]
    fn test_item_key_ignores_rarity_tag() {
        let sword = &item_pool()[1];
        let epic = make_listing(sword, Rarity::Epic, 0, 0);
        assert_eq!(ArtSubject::item(&epic), ArtSubject::item(sword));
        assert_eq!(ArtSubject::item(sword).key, "item_Iron Sword");
    }
}
