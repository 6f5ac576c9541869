use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Man,
    Pin,
    Sou,
}

impl Suit {
    pub const ALL: [Suit; 3] = [Suit::Man, Suit::Pin, Suit::Sou];

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'm' => Some(Suit::Man),
            'p' => Some(Suit::Pin),
            's' => Some(Suit::Sou),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Man => 'm',
            Suit::Pin => 'p',
            Suit::Sou => 's',
        }
    }
}

/// 1..=9 only. Red fives are a separate variant, not rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const FIVE: Rank = Rank(5);

    pub fn new(n: u8) -> Option<Self> {
        (1..=9).contains(&n).then_some(Rank(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Honor {
    East,
    South,
    West,
    North,
    White,
    Green,
    Red,
}

impl Honor {
    pub const ALL: [Honor; 7] = [
        Honor::East,
        Honor::South,
        Honor::West,
        Honor::North,
        Honor::White,
        Honor::Green,
        Honor::Red,
    ];

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "東" => Some(Honor::East),
            "南" => Some(Honor::South),
            "西" => Some(Honor::West),
            "北" => Some(Honor::North),
            "白" => Some(Honor::White),
            "發" => Some(Honor::Green),
            "中" => Some(Honor::Red),
            _ => None,
        }
    }

    /// `1z`..`7z` numbering.
    pub fn from_index(n: u8) -> Option<Self> {
        Honor::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Honor::East => "東",
            Honor::South => "南",
            Honor::West => "西",
            Honor::North => "北",
            Honor::White => "白",
            Honor::Green => "發",
            Honor::Red => "中",
        }
    }
}

/// A tile token after classification. Every token maps to exactly one of
/// these; anything unrecognised becomes [`TileId::Blank`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TileId {
    Number { rank: Rank, suit: Suit },
    RedFive(Suit),
    Honor(Honor),
    Back,
    #[default]
    Blank,
}

impl TileId {
    pub fn classify(token: &str) -> Self {
        let id = Self::parse(token);
        if id == TileId::Blank && token != "blank" {
            tracing::debug!(token, "unrecognised tile token, rendering as blank");
        }
        id
    }

    fn parse(token: &str) -> Self {
        match token {
            "back" => return TileId::Back,
            "blank" => return TileId::Blank,
            _ => {}
        }
        if let Some(h) = Honor::from_symbol(token) {
            return TileId::Honor(h);
        }

        let bytes = token.as_bytes();
        if bytes.len() != 2 {
            return TileId::Blank;
        }
        let Some(n) = (bytes[0] as char).to_digit(10) else {
            return TileId::Blank;
        };
        let n = n as u8;

        match bytes[1] as char {
            'z' => Honor::from_index(n).map_or(TileId::Blank, TileId::Honor),
            c => match Suit::from_letter(c) {
                Some(suit) if n == 0 => TileId::RedFive(suit),
                Some(suit) => TileId::number(n, suit),
                None => TileId::Blank,
            },
        }
    }

    pub fn number(rank: u8, suit: Suit) -> Self {
        Rank::new(rank).map_or(TileId::Blank, |rank| TileId::Number { rank, suit })
    }

    pub fn suit(&self) -> Option<Suit> {
        match *self {
            TileId::Number { suit, .. } | TileId::RedFive(suit) => Some(suit),
            _ => None,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match *self {
            TileId::Number { rank, .. } => Some(rank),
            TileId::RedFive(_) => Some(Rank::FIVE),
            _ => None,
        }
    }

    /// 赤牌を無視した同一性（正解判定用）
    pub fn base_kind(&self) -> Self {
        match *self {
            TileId::RedFive(suit) => TileId::Number {
                rank: Rank::FIVE,
                suit,
            },
            other => other,
        }
    }

    pub fn same_kind(&self, other: &TileId) -> bool {
        self.base_kind() == other.base_kind()
    }

    /// Human-facing symbol: kanji for honors, the token otherwise.
    pub fn symbol(&self) -> String {
        match self {
            TileId::Honor(h) => h.symbol().to_string(),
            other => other.to_string(),
        }
    }
}

impl From<&str> for TileId {
    fn from(token: &str) -> Self {
        TileId::classify(token)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileId::Number { rank, suit } => write!(f, "{}{}", rank.get(), suit.letter()),
            TileId::RedFive(suit) => write!(f, "0{}", suit.letter()),
            TileId::Honor(h) => write!(f, "{}z", h.index()),
            TileId::Back => f.write_str("back"),
            TileId::Blank => f.write_str("blank"),
        }
    }
}
