use serde::{Deserialize, Serialize};
use std::fmt;

// Stable key for a course row, assigned by the store and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    BPlus,
    B,
    CPlus,
    C,
    DPlus,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 8] = [
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::DPlus,
        Grade::D,
        Grade::F,
    ];

    // Fixed numeric weight of each letter grade.
    pub fn weight(self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::BPlus => 3.5,
            Grade::B => 3.0,
            Grade::CPlus => 2.5,
            Grade::C => 2.0,
            Grade::DPlus => 1.5,
            Grade::D => 1.0,
            Grade::F => 0.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Grade> {
        match symbol {
            "A" => Some(Grade::A),
            "B+" => Some(Grade::BPlus),
            "B" => Some(Grade::B),
            "C+" => Some(Grade::CPlus),
            "C" => Some(Grade::C),
            "D+" => Some(Grade::DPlus),
            "D" => Some(Grade::D),
            "F" => Some(Grade::F),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub credit_hours: f64,
    #[serde(with = "grade_symbol")]
    pub grade: Option<Grade>,
}

impl Course {
    // A fresh row: no name yet, one credit hour, grade A.
    pub fn with_defaults(id: CourseId) -> Self {
        Course {
            id,
            name: String::new(),
            credit_hours: 1.0,
            grade: Some(Grade::A),
        }
    }
}

// Grades persist as their display symbol, with the empty string for "no grade yet".
mod grade_symbol {
    use super::Grade;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        grade: &Option<Grade>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(grade.map_or("", Grade::symbol))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Grade>, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        if symbol.is_empty() {
            return Ok(None);
        }
        Grade::from_symbol(&symbol)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("unknown grade symbol `{}`", symbol)))
    }
}
