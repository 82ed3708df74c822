use crate::models::{Course, Grade};
use crate::utils::gpa::gpa;

// Formats the GPA for display; the undefined state (zero total credits) shows as N/A.
pub fn render_gpa(gpa: Option<f64>) -> String {
    match gpa {
        Some(value) => value.to_string(),
        None => String::from("N/A"),
    }
}

// Builds the printable course sheet, one line per course, with the live GPA underneath.
pub fn render_sheet(courses: &[Course]) -> String {
    let mut sheet = String::from("  id | name                 | credits | grade\n");
    for course in courses {
        sheet.push_str(&format!(
            "{:>4} | {:<20} | {:>7} | {}\n",
            course.id,
            course.name,
            course.credit_hours,
            course.grade.map_or("", Grade::symbol)
        ));
    }
    sheet.push_str(&format!("\nYour GPA: {}", render_gpa(gpa(courses))));
    sheet
}
