//! User mood and the weekly mood log.

use serde::{Deserialize, Serialize};

/// Disposition signal that reorders the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sad,
    #[default]
    Neutral,
    Happy,
}

impl Mood {
    /// Banner shown above the upcoming task list.
    pub fn message(self) -> &'static str {
        match self {
            Mood::Sad => "Taking it easy - showing lighter tasks first",
            Mood::Happy => "Great energy - ready for challenges!",
            Mood::Neutral => "Balanced schedule for the day",
        }
    }
}

/// The five choices offered by the mood tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodChoice {
    Energized,
    Happy,
    Neutral,
    Sad,
    Stressed,
}

impl From<MoodChoice> for Mood {
    fn from(choice: MoodChoice) -> Self {
        match choice {
            MoodChoice::Energized | MoodChoice::Happy => Mood::Happy,
            MoodChoice::Neutral => Mood::Neutral,
            MoodChoice::Sad | MoodChoice::Stressed => Mood::Sad,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Short weekday label, e.g. "Mon"
    pub date: String,
    /// 1..=5
    pub mood: u8,
    pub emoji: String,
}

/// One entry per weekday label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        MoodLog { entries }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Record today's mood, replacing an earlier entry for the same day.
    pub fn record(&mut self, date: impl Into<String>, mood: u8, emoji: impl Into<String>) {
        let entry = MoodEntry {
            date: date.into(),
            mood,
            emoji: emoji.into(),
        };

        match self.entries.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn average(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }

        let total: u32 = self.entries.iter().map(|e| u32::from(e.mood)).sum();
        f64::from(total) / self.entries.len() as f64
    }
}
