use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A `(host, visitor)` goal count.
pub type Score = (u32, u32);

/// Clock position of an event: the regular minute plus optional added time.
///
/// Ordering compares `regular` first and then `regular + added`, so
/// `40 < 45 < 45+2 < 46`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventTime {
    pub regular: u32,
    pub added: Option<u32>,
}

impl EventTime {
    pub fn new(regular: u32, added: Option<u32>) -> Self {
        Self { regular, added }
    }

    /// A regular-time minute without added time.
    pub fn at(regular: u32) -> Self {
        Self::new(regular, None)
    }

    /// `regular + added`, counting a missing `added` as zero.
    pub fn total(&self) -> u32 {
        self.regular.saturating_add(self.added.unwrap_or(0))
    }
}

impl Ord for EventTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.regular
            .cmp(&other.regular)
            .then_with(|| self.total().cmp(&other.total()))
            // Keeps Ord consistent with Eq: `45` and `45+0` are distinct values.
            .then_with(|| self.added.cmp(&other.added))
    }
}

impl PartialOrd for EventTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.added {
            Some(added) => write!(f, "{}+{}", self.regular, added),
            None => write!(f, "{}", self.regular),
        }
    }
}

/// Side credited with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Team {
    #[default]
    Host,
    Visitor,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Host => f.write_str("Host"),
            Team::Visitor => f.write_str("Visitor"),
        }
    }
}

/// Goal type code as printed next to the minute.
///
/// Ordinary goals carry no code in the bulletin and default to `m`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GoalType {
    #[default]
    OpenPlay,
    OwnGoal,
    Penalty,
    /// Any other combination of code letters, kept verbatim.
    Other(String),
}

impl GoalType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "m" => GoalType::OpenPlay,
            "om" => GoalType::OwnGoal,
            "rp" => GoalType::Penalty,
            other => GoalType::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            GoalType::OpenPlay => "m",
            GoalType::OwnGoal => "om",
            GoalType::Penalty => "rp",
            GoalType::Other(code) => code,
        }
    }
}

impl Serialize for GoalType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Goal(GoalType),
    RedCard,
    MissedPenalty,
}

impl EventKind {
    /// Discriminant string used by the JSON projection.
    pub fn event_type(&self) -> &'static str {
        match self {
            EventKind::Goal(GoalType::OwnGoal) => "OWN_GOAL",
            EventKind::Goal(GoalType::Penalty) => "PENALTY",
            EventKind::Goal(_) => "GOAL",
            EventKind::RedCard => "RED_CARD",
            EventKind::MissedPenalty => "MISSED_PENALTY",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Goal(goal_type) => write!(f, "goal ({})", goal_type.code()),
            EventKind::RedCard => f.write_str("red card"),
            EventKind::MissedPenalty => f.write_str("missed penalty"),
        }
    }
}

/// A single match event recovered from an event row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    pub time: EventTime,
    pub player: String,
    pub team: Team,
    pub kind: EventKind,
}

impl Event {
    pub fn goal(time: EventTime, player: impl Into<String>, team: Team, goal_type: GoalType) -> Self {
        Self {
            time,
            player: player.into(),
            team,
            kind: EventKind::Goal(goal_type),
        }
    }

    pub fn red_card(time: EventTime, player: impl Into<String>, team: Team) -> Self {
        Self {
            time,
            player: player.into(),
            team,
            kind: EventKind::RedCard,
        }
    }

    pub fn missed_penalty(time: EventTime, player: impl Into<String>, team: Team) -> Self {
        Self {
            time,
            player: player.into(),
            team,
            kind: EventKind::MissedPenalty,
        }
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if matches!(self.kind, EventKind::Goal(_)) { 5 } else { 4 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("event_type", self.kind.event_type())?;
        map.serialize_entry("time", &self.time)?;
        map.serialize_entry("player", &self.player)?;
        map.serialize_entry("team", &self.team)?;
        if let EventKind::Goal(goal_type) = &self.kind {
            map.serialize_entry("type", goal_type)?;
        }
        map.end()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}' {} {} ({})", self.time, self.kind, self.player, self.team)
    }
}

/// One match block of the bulletin.
///
/// Both scores are `None` for a fixture that has not kicked off; only
/// `ft_score` is `None` while the first half is still being reported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Match {
    pub host: Option<String>,
    pub visitor: Option<String>,
    #[serde(serialize_with = "serialize_kickoff")]
    pub kickoff: Option<NaiveTime>,
    pub ht_score: Option<Score>,
    pub ft_score: Option<Score>,
    pub events: Vec<Event>,
}

impl Match {
    /// Stable sort of the events by regular minute, then `regular + added`.
    ///
    /// `45` and `45+0` tie here and keep their row order, unlike under
    /// [`EventTime`]'s `Ord`.
    pub fn sort_events(&mut self) {
        self.events.sort_by_key(|e| (e.time.regular, e.time.total()));
    }
}

fn serialize_kickoff<S: Serializer>(kickoff: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match kickoff {
        Some(time) => serializer.collect_str(&time.format("%H.%M")),
        None => serializer.serialize_none(),
    }
}

fn fmt_score(score: &Option<Score>) -> String {
    score.map(|(host, visitor)| format!("{}-{}", host, visitor)).unwrap_or_default()
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vs {} {} ({}) {{",
            self.host.as_deref().unwrap_or_default(),
            self.visitor.as_deref().unwrap_or_default(),
            fmt_score(&self.ft_score),
            fmt_score(&self.ht_score),
        )?;
        for event in &self.events {
            writeln!(f, "    {}", event)?;
        }
        f.write_str("}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHead {
    pub competition: String,
    pub date: NaiveDate,
    /// `(current, total)` position in the page carousel.
    pub subpages: (u32, u32),
}

impl fmt::Display for ReportHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}, {}]",
            self.competition,
            self.date.format("%Y-%m-%d"),
            self.subpages.0,
            self.subpages.1
        )
    }
}

/// A parsed results page: head plus matches in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub head: ReportHead,
    pub body: Vec<Match>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.head.to_string();
        write!(f, "{}\n{}", head, "-".repeat(head.chars().count()))?;
        for m in &self.body {
            write!(f, "\n{}", m)?;
        }
        Ok(())
    }
}

/// Canonical JSON projection of a model value.
pub trait JsonValue: Serialize {
    fn json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl JsonValue for EventTime {}
impl JsonValue for Event {}
impl JsonValue for Match {}
impl JsonValue for ReportHead {}
impl JsonValue for Report {}
