//! Tile art lookup.
//!
//! [`resolve`] turns a [`TileId`] into a primary asset key plus an optional
//! fallback, and [`AssetCatalog::select`] turns that into a path, walking
//! primary → fallback → `Blank`. The catalog never changes after it is built.

use std::collections::HashMap;
use std::sync::OnceLock;

use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

use crate::tile::{Honor, Suit, TileId};

pub const DEFAULT_BASE_URL: &str = "/assets/tiles/svg";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
pub enum AssetKey {
    Back,
    Blank,
    Front,
    Ton,
    Nan,
    Shaa,
    Pei,
    Haku,
    Hatsu,
    Chun,
    Man1,
    Man2,
    Man3,
    Man4,
    Man5,
    #[strum(serialize = "Man5-Dora")]
    Man5Dora,
    Man6,
    Man7,
    Man8,
    Man9,
    Pin1,
    Pin2,
    Pin3,
    Pin4,
    Pin5,
    #[strum(serialize = "Pin5-Dora")]
    Pin5Dora,
    Pin6,
    Pin7,
    Pin8,
    Pin9,
    Sou1,
    Sou2,
    Sou3,
    Sou4,
    Sou5,
    #[strum(serialize = "Sou5-Dora")]
    Sou5Dora,
    Sou6,
    Sou7,
    Sou8,
    Sou9,
}

const MAN: [AssetKey; 9] = [
    AssetKey::Man1,
    AssetKey::Man2,
    AssetKey::Man3,
    AssetKey::Man4,
    AssetKey::Man5,
    AssetKey::Man6,
    AssetKey::Man7,
    AssetKey::Man8,
    AssetKey::Man9,
];

const PIN: [AssetKey; 9] = [
    AssetKey::Pin1,
    AssetKey::Pin2,
    AssetKey::Pin3,
    AssetKey::Pin4,
    AssetKey::Pin5,
    AssetKey::Pin6,
    AssetKey::Pin7,
    AssetKey::Pin8,
    AssetKey::Pin9,
];

const SOU: [AssetKey; 9] = [
    AssetKey::Sou1,
    AssetKey::Sou2,
    AssetKey::Sou3,
    AssetKey::Sou4,
    AssetKey::Sou5,
    AssetKey::Sou6,
    AssetKey::Sou7,
    AssetKey::Sou8,
    AssetKey::Sou9,
];

impl AssetKey {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// `rank` outside 1..=9 yields `None`.
    pub fn suited(rank: u8, suit: Suit) -> Option<Self> {
        let row = match suit {
            Suit::Man => &MAN,
            Suit::Pin => &PIN,
            Suit::Sou => &SOU,
        };
        row.get(usize::from(rank).checked_sub(1)?).copied()
    }

    pub fn red_five(suit: Suit) -> Self {
        match suit {
            Suit::Man => AssetKey::Man5Dora,
            Suit::Pin => AssetKey::Pin5Dora,
            Suit::Sou => AssetKey::Sou5Dora,
        }
    }

    pub fn honor(h: Honor) -> Self {
        match h {
            Honor::East => AssetKey::Ton,
            Honor::South => AssetKey::Nan,
            Honor::West => AssetKey::Shaa,
            Honor::North => AssetKey::Pei,
            Honor::White => AssetKey::Haku,
            Honor::Green => AssetKey::Hatsu,
            Honor::Red => AssetKey::Chun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualResolution {
    pub primary: AssetKey,
    pub fallback: Option<AssetKey>,
}

impl VisualResolution {
    fn with_fallback(primary: AssetKey, fallback: AssetKey) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
        }
    }
}

pub fn resolve(id: TileId) -> VisualResolution {
    match id {
        TileId::Back => VisualResolution::with_fallback(AssetKey::Back, AssetKey::Blank),
        TileId::Blank => VisualResolution {
            primary: AssetKey::Blank,
            fallback: None,
        },
        TileId::Honor(h) => VisualResolution::with_fallback(AssetKey::honor(h), AssetKey::Blank),
        TileId::Number { rank, suit } => match AssetKey::suited(rank.get(), suit) {
            Some(key) => VisualResolution::with_fallback(key, AssetKey::Blank),
            None => resolve(TileId::Blank),
        },
        // missing red-five art falls back to the plain five, not to blank
        TileId::RedFive(suit) => VisualResolution::with_fallback(
            AssetKey::red_five(suit),
            AssetKey::suited(5, suit).unwrap_or(AssetKey::Blank),
        ),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("asset catalog has no Blank entry")]
    MissingBlank,
}

#[derive(Debug, Clone)]
pub struct AssetCatalog {
    paths: HashMap<AssetKey, String>,
    blank: String,
}

impl AssetCatalog {
    /// The process-wide catalog under [`DEFAULT_BASE_URL`].
    pub fn standard() -> &'static AssetCatalog {
        static STANDARD: OnceLock<AssetCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| AssetCatalog::with_base(DEFAULT_BASE_URL))
    }

    /// Every key, as `{base}/{Key}.svg`.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let paths: HashMap<_, _> = AssetKey::iter()
            .map(|key| (key, format!("{}/{}.svg", base, key.name())))
            .collect();
        let blank = paths[&AssetKey::Blank].clone();
        Self { paths, blank }
    }

    /// A possibly partial catalog. Blank must be present since every lookup
    /// ends there.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (AssetKey, S)>,
        S: Into<String>,
    {
        let paths: HashMap<_, _> = entries
            .into_iter()
            .map(|(key, path)| (key, path.into()))
            .collect();
        let blank = paths
            .get(&AssetKey::Blank)
            .cloned()
            .ok_or(CatalogError::MissingBlank)?;
        Ok(Self { paths, blank })
    }

    pub fn path(&self, key: AssetKey) -> Option<&str> {
        self.paths.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn select(&self, res: &VisualResolution) -> &str {
        self.path(res.primary)
            .or_else(|| res.fallback.and_then(|key| self.path(key)))
            .unwrap_or(&self.blank)
    }

    pub fn url_for(&self, id: TileId) -> &str {
        self.select(&resolve(id))
    }
}
