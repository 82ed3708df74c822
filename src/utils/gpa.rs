use crate::models::Course;

// One course's contribution to the grade points: grade weight times the magnitude of
// its credit hours. An empty grade contributes nothing regardless of credit hours.
fn grade_points(course: &Course) -> f64 {
    match course.grade {
        Some(grade) => grade.weight() * course.credit_hours.abs(),
        None => 0.0,
    }
}

pub fn total_grade_points(courses: &[Course]) -> f64 {
    courses.iter().map(grade_points).sum()
}

// Total credit hours are summed as entered (signed), unlike the per-course points.
pub fn total_credit_hours(courses: &[Course]) -> f64 {
    courses.iter().map(|course| course.credit_hours).sum()
}

// Credit-weighted grade average, rounded to three decimal places, recomputed from
// scratch on every call. Undefined (None) when the total credit hours are zero,
// which covers the empty sequence as well.
pub fn gpa(courses: &[Course]) -> Option<f64> {
    let credits = total_credit_hours(courses);
    if credits == 0.0 {
        return None;
    }
    Some(round_to_thousandths(total_grade_points(courses) / credits))
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseId, Grade};

    fn course(credit_hours: f64, grade: Option<Grade>) -> Course {
        Course {
            id: CourseId(0),
            name: String::new(),
            credit_hours,
            grade,
        }
    }

    #[test]
    fn single_three_credit_a_is_a_perfect_gpa() {
        let courses = [course(3.0, Some(Grade::A))];
        assert_eq!(gpa(&courses), Some(4.0));
    }

    #[test]
    fn two_courses_average_by_credit_weight() {
        let courses = [course(3.0, Some(Grade::A)), course(2.0, Some(Grade::B))];
        assert_eq!(total_grade_points(&courses), 18.0);
        assert_eq!(total_credit_hours(&courses), 5.0);
        assert_eq!(gpa(&courses), Some(3.6));
    }

    #[test]
    fn zero_total_credits_leaves_the_gpa_undefined() {
        let courses = [course(0.0, Some(Grade::A))];
        assert_eq!(gpa(&courses), None);
    }

    #[test]
    fn empty_sequence_leaves_the_gpa_undefined() {
        assert_eq!(gpa(&[]), None);
    }

    #[test]
    fn empty_grade_counts_credits_but_no_points() {
        let courses = [course(4.0, Some(Grade::A)), course(4.0, None)];
        assert_eq!(total_grade_points(&courses), 16.0);
        assert_eq!(total_credit_hours(&courses), 8.0);
        assert_eq!(gpa(&courses), Some(2.0));
    }

    #[test]
    fn gpa_is_rounded_to_three_decimals() {
        let courses = [course(1.0, Some(Grade::A)), course(2.0, Some(Grade::B))];
        // 10 points over 3 credits.
        assert_eq!(gpa(&courses), Some(3.333));
    }

    #[test]
    fn points_use_credit_magnitude_while_totals_stay_signed() {
        let courses = [course(-3.0, Some(Grade::A))];
        assert_eq!(total_grade_points(&courses), 12.0);
        assert_eq!(total_credit_hours(&courses), -3.0);
    }
}
