use crate::models::{Course, CourseId, Grade};
use thiserror::Error;

pub const MIN_CREDIT_HOURS: f64 = 0.0;
pub const MAX_CREDIT_HOURS: f64 = 4.0;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("no course with id {0}")]
    UnknownCourse(CourseId),
    #[error("unknown field `{0}`, expected one of: name, credits, grade")]
    UnknownField(String),
    #[error("credit hours must be a number, got `{0}`")]
    InvalidCreditHours(String),
    #[error("credit hours must be between 0 and 4, got {0}")]
    CreditHoursOutOfRange(f64),
    #[error("unknown grade `{0}`, expected a letter grade or an empty value")]
    UnknownGrade(String),
}

// A single field edit, already parsed and validated.
enum FieldValue {
    Name(String),
    CreditHours(f64),
    Grade(Option<Grade>),
}

// Parses a raw input value according to the field it targets. Credit hours must be a
// finite number within the accepted range; grades must be a known symbol or empty.
fn parse_field(field: &str, raw: &str) -> Result<FieldValue, StoreError> {
    match field {
        "name" => Ok(FieldValue::Name(raw.to_string())),
        "credits" => {
            let hours: f64 = raw
                .trim()
                .parse()
                .map_err(|_| StoreError::InvalidCreditHours(raw.trim().to_string()))?;
            if !(MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(&hours) {
                return Err(StoreError::CreditHoursOutOfRange(hours));
            }
            Ok(FieldValue::CreditHours(hours))
        }
        "grade" => {
            let symbol = raw.trim().to_ascii_uppercase();
            if symbol.is_empty() {
                return Ok(FieldValue::Grade(None));
            }
            match Grade::from_symbol(&symbol) {
                Some(grade) => Ok(FieldValue::Grade(Some(grade))),
                None => Err(StoreError::UnknownGrade(raw.trim().to_string())),
            }
        }
        other => Err(StoreError::UnknownField(other.to_string())),
    }
}

// Single source of truth for the course sheet. Mutations go through the methods below;
// every successful one invokes the registered listeners with the updated sequence.
pub struct CourseStore {
    courses: Vec<Course>,
    next_id: u64,
    listeners: Vec<Box<dyn FnMut(&[Course])>>,
}

impl CourseStore {
    // A fresh sheet always starts with one default row.
    pub fn new() -> Self {
        Self::restore(Vec::new())
    }

    // Replaces the sequence wholesale with a previously saved one. The id counter
    // continues past the highest restored id so ids are never reused.
    pub fn restore(courses: Vec<Course>) -> Self {
        let next_id = courses.iter().map(|c| c.id.0 + 1).max().unwrap_or(1);
        let mut store = CourseStore {
            courses,
            next_id,
            listeners: Vec::new(),
        };
        if store.courses.is_empty() {
            store.push_default();
        }
        store
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    // Registers a listener invoked after every successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Course]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // Appends one row with default values and returns its id.
    pub fn append(&mut self) -> CourseId {
        let id = self.push_default();
        self.notify();
        id
    }

    // Overwrites one field of the course with the given id, leaving every other record
    // and field untouched. A failed update mutates nothing and notifies nobody.
    pub fn update_field(&mut self, id: CourseId, field: &str, raw: &str) -> Result<(), StoreError> {
        let position = self
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::UnknownCourse(id))?;
        let value = parse_field(field, raw)?;
        let course = &mut self.courses[position];
        match value {
            FieldValue::Name(name) => course.name = name,
            FieldValue::CreditHours(hours) => course.credit_hours = hours,
            FieldValue::Grade(grade) => course.grade = grade,
        }
        self.notify();
        Ok(())
    }

    fn push_default(&mut self) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;
        self.courses.push(Course::with_defaults(id));
        id
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener(&self.courses);
        }
    }
}
