use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_WEEK: u32 = 1;
pub const MAX_WEEK: u32 = 48;

/// Zero-padded label used everywhere a week is shown: `Week 07`.
pub fn week_label(week: u32) -> String {
    format!("Week {week:02}")
}

pub fn week_in_range(week: u32) -> bool {
    (MIN_WEEK..=MAX_WEEK).contains(&week)
}

// ---------------------------------------------------------------------------
// MealType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    #[serde(alias = "Meat")]
    Meat,
    #[serde(alias = "Veg")]
    Veg,
    #[serde(alias = "lowCarb", alias = "LowCarb")]
    LowCarb,
}

impl MealType {
    pub fn all() -> &'static [MealType] {
        &[MealType::Meat, MealType::Veg, MealType::LowCarb]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Meat => "meat",
            MealType::Veg => "veg",
            MealType::LowCarb => "low_carb",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealType::Meat => "Meat",
            MealType::Veg => "Veg",
            MealType::LowCarb => "Low Carb",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for MealType {
    type Err = crate::error::MealOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "meat" => Ok(MealType::Meat),
            "veg" | "vegetarian" => Ok(MealType::Veg),
            "lowcarb" => Ok(MealType::LowCarb),
            _ => Err(crate::error::MealOrderError::InvalidMealType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DayName
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayName {
    #[serde(alias = "Monday")]
    Monday,
    #[serde(alias = "Tuesday")]
    Tuesday,
    #[serde(alias = "Wednesday")]
    Wednesday,
    #[serde(alias = "Thursday")]
    Thursday,
    #[serde(alias = "Friday")]
    Friday,
}

impl DayName {
    pub fn all() -> &'static [DayName] {
        &[
            DayName::Monday,
            DayName::Tuesday,
            DayName::Wednesday,
            DayName::Thursday,
            DayName::Friday,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayName::Monday => "Monday",
            DayName::Tuesday => "Tuesday",
            DayName::Wednesday => "Wednesday",
            DayName::Thursday => "Thursday",
            DayName::Friday => "Friday",
        }
    }

    /// Three-letter form used in the outbound message.
    pub fn short(self) -> &'static str {
        &self.as_str()[..3]
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DayName {
    type Err = crate::error::MealOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        DayName::all()
            .iter()
            .copied()
            .find(|d| {
                let full = d.as_str().to_lowercase();
                lower == full || lower == full[..3]
            })
            .ok_or_else(|| crate::error::MealOrderError::InvalidDay(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// One of the two week slots a session can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::A => "a",
            Slot::B => "b",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Slot {
    type Err = crate::error::MealOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Slot::A),
            "b" => Ok(Slot::B),
            _ => Err(crate::error::MealOrderError::InvalidSlot(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
