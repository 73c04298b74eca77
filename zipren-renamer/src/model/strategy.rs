use std::{fmt::Display, str::FromStr};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Strategy {
    Timestamp,
    #[default]
    Sequential,
    RandomId,
}

impl Strategy {
    pub const VALUES: [&'static str; 3] = ["timestamp", "sequential", "uuid"];
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Timestamp => write!(f, "timestamp"),
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::RandomId => write!(f, "uuid"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timestamp" => Ok(Strategy::Timestamp),
            "sequential" => Ok(Strategy::Sequential),
            "uuid" => Ok(Strategy::RandomId),
            _ => Err(format!("unknown rename method: {}", s)),
        }
    }
}
