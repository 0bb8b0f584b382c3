//! The fixed mood catalog.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Identifier of a catalog mood. Persisted as its lowercase name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoodId {
    Happy,
    Okay,
    Sad,
    Angry,
    Anxious,
}

/// One entry of the mood catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodOption {
    pub id: MoodId,
    pub label: &'static str,
    pub symbol: &'static str,
    /// Valence scalar; higher is more positive.
    pub value: f64,
    pub support_message: &'static str,
}

const MOODS: [MoodOption; 5] = [
    MoodOption {
        id: MoodId::Happy,
        label: "Happy",
        symbol: "😊",
        value: 4.0,
        support_message: "Love that energy! Want to keep the good vibes going?",
    },
    MoodOption {
        id: MoodId::Okay,
        label: "Okay",
        symbol: "😐",
        value: 3.0,
        support_message: "Feeling neutral is totally fine. Let's do a tiny recharge.",
    },
    MoodOption {
        id: MoodId::Sad,
        label: "Sad",
        symbol: "😢",
        value: 2.0,
        support_message: "It's okay to feel low. You're not alone. Want something gentle?",
    },
    MoodOption {
        id: MoodId::Angry,
        label: "Angry",
        symbol: "😡",
        value: 1.0,
        support_message: "That sounds tough. Let's release some tension safely.",
    },
    MoodOption {
        id: MoodId::Anxious,
        label: "Anxious",
        symbol: "😰",
        value: 1.5,
        support_message: "Anxiety can feel heavy. Let's try a calm, steady exercise.",
    },
];

/// Read-only access to the process-wide mood catalog.
pub struct MoodCatalog;

impl MoodCatalog {
    /// All moods in display order.
    pub fn all() -> &'static [MoodOption] {
        &MOODS
    }

    /// Look up a mood by id. Every id has exactly one entry.
    pub fn get(id: MoodId) -> &'static MoodOption {
        match id {
            MoodId::Happy => &MOODS[0],
            MoodId::Okay => &MOODS[1],
            MoodId::Sad => &MOODS[2],
            MoodId::Angry => &MOODS[3],
            MoodId::Anxious => &MOODS[4],
        }
    }

    /// Ids in display order.
    pub fn ids() -> impl Iterator<Item = MoodId> {
        MoodId::iter()
    }
}

impl MoodId {
    pub fn option(self) -> &'static MoodOption {
        MoodCatalog::get(self)
    }
}
