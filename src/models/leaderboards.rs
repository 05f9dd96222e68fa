use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Ranking a leaderboard is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardsType {
    /// Commands used.
    Commands,
    /// Currency held.
    Currency,
    /// Experience earned.
    #[default]
    Experience,
    /// Pastas created.
    Pasta,
    /// Reputation received.
    Reputation,
}

impl LeaderboardsType {
    /// Lowercase name used in routes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Commands => "commands",
            Self::Currency => "currency",
            Self::Experience => "experience",
            Self::Pasta => "pasta",
            Self::Reputation => "reputation",
        }
    }
}

impl fmt::Display for LeaderboardsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects which leaderboard page to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardsOptions {
    guild_id: Option<u64>,
    kind: LeaderboardsType,
    amount: u32,
    offset: u32,
}

impl Default for LeaderboardsOptions {
    fn default() -> Self {
        Self {
            guild_id: None,
            kind: LeaderboardsType::default(),
            amount: 12,
            offset: 0,
        }
    }
}

impl LeaderboardsOptions {
    /// Global leaderboard of the given kind with default paging.
    pub fn new(kind: LeaderboardsType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Restricts the leaderboard to a single guild.
    #[must_use]
    pub fn guild(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Sets the number of entries per page.
    #[must_use]
    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// Sets how many entries to skip.
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the guild filter, if any.
    pub fn guild_id(&self) -> Option<u64> {
        self.guild_id
    }

    /// Returns the leaderboard kind.
    pub fn kind(&self) -> LeaderboardsType {
        self.kind
    }

    /// Renders `/leaderboards[/{guild}]/{kind}?amount={n}&offset={n}`.
    pub fn route(&self) -> String {
        let guild = self
            .guild_id
            .map(|id| format!("/{id}"))
            .unwrap_or_default();
        format!(
            "/leaderboards{guild}/{}?amount={}&offset={}",
            self.kind, self.amount, self.offset
        )
    }
}

/// One page of a leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardsObject {
    total_pages: i32,
    current_page: i32,
    #[serde(default)]
    items: Vec<LeaderboardsItem>,
}

impl LeaderboardsObject {
    /// Returns the total number of pages.
    pub fn total_pages(&self) -> i32 {
        self.total_pages
    }
    /// Returns the page this object represents.
    pub fn current_page(&self) -> i32 {
        self.current_page
    }
    /// Returns the entries on this page.
    pub fn items(&self) -> &[LeaderboardsItem] {
        &self.items
    }
}

impl std::ops::Deref for LeaderboardsObject {
    type Target = Vec<LeaderboardsItem>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// A single leaderboard entry.
///
/// The entry schema is owned by the API, so fields are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaderboardsItem(Map<String, Value>);

impl LeaderboardsItem {
    /// Returns the raw value of `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns `field` as a string, if it is one.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns `field` as an integer, if it is one.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    /// Returns every field of the entry.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// A user's inventory, returned verbatim from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInventory(Value);

impl UserInventory {
    /// Returns the raw inventory JSON.
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Consumes the inventory, returning the raw JSON.
    pub fn into_json(self) -> Value {
        self.0
    }
}
