use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::tile::TileId;

const BUILTIN_JSON: &str = include_str!("../data/problems.json");

/// One authored discard drill. Tile fields are raw tokens; they are only
/// classified when rendered or validated.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub situation: String,
    pub hand: Vec<String>,
    pub dora: String,
    pub expected: String,
    pub reason: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Problem {
    pub fn hand_tiles(&self) -> Vec<TileId> {
        self.hand.iter().map(|t| TileId::classify(t)).collect()
    }

    /// The dora tile itself, as authored.
    pub fn dora_tile(&self) -> TileId {
        TileId::classify(&self.dora)
    }

    pub fn expected_tile(&self) -> TileId {
        TileId::classify(&self.expected)
    }

    /// Red fives count as the plain five here.
    pub fn is_expected(&self, slot: usize) -> bool {
        let expected = self.expected_tile();
        self.hand
            .get(slot)
            .map(|t| TileId::classify(t))
            .is_some_and(|t| t != TileId::Blank && t.same_kind(&expected))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileField {
    Hand(usize),
    Dora,
    Expected,
}

impl fmt::Display for TileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileField::Hand(slot) => write!(f, "hand[{}]", slot),
            TileField::Dora => f.write_str("dora"),
            TileField::Expected => f.write_str("expected"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileIssue {
    #[error("{problem}: {field} token {token:?} is not a tile")]
    Unrecognised {
        problem: String,
        field: TileField,
        token: String,
    },
    #[error("{problem}: expected discard {expected:?} is not in the hand")]
    ExpectedNotInHand { problem: String, expected: String },
}

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid problem json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("problem set is empty")]
    Empty,
    #[error("problem set has {} tile issue(s)", .0.len())]
    Invalid(Vec<TileIssue>),
}

/// Ordered, never empty.
#[derive(Debug, Clone)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    pub fn new(problems: Vec<Problem>) -> Result<Self, ProblemError> {
        if problems.is_empty() {
            return Err(ProblemError::Empty);
        }
        Ok(Self { problems })
    }

    /// The drills shipped with the app. The JSON is embedded at compile time
    /// and `builtin_set_is_clean` parses it, so the `expect` cannot fire in a
    /// tested build.
    pub fn builtin() -> Self {
        let problems: Vec<Problem> =
            serde_json::from_str(BUILTIN_JSON).expect("builtin problems must be valid JSON");
        Self { problems }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ProblemError> {
        let problems: Vec<Problem> = serde_json::from_str(json)?;
        Self::new(problems)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ProblemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Wraps around, so every index is valid.
    pub fn get(&self, index: usize) -> &Problem {
        &self.problems[index % self.problems.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }

    /// Tokens that would render as blank, and expected discards missing from
    /// their hand.
    pub fn validate(&self) -> Vec<TileIssue> {
        let mut issues = vec![];
        for p in &self.problems {
            let fields = p
                .hand
                .iter()
                .enumerate()
                .map(|(slot, token)| (TileField::Hand(slot), token))
                .chain([
                    (TileField::Dora, &p.dora),
                    (TileField::Expected, &p.expected),
                ]);
            for (field, token) in fields {
                if TileId::classify(token) == TileId::Blank && token != "blank" {
                    issues.push(TileIssue::Unrecognised {
                        problem: p.id.clone(),
                        field,
                        token: token.clone(),
                    });
                }
            }

            if !(0..p.hand.len()).any(|slot| p.is_expected(slot)) {
                issues.push(TileIssue::ExpectedNotInHand {
                    problem: p.id.clone(),
                    expected: p.expected.clone(),
                });
            }
        }
        issues
    }

    pub fn validated(self) -> Result<Self, ProblemError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(ProblemError::Invalid(issues))
        }
    }
}
