//! Compiled-in sample records, shown when the live backend is unreachable so
//! the demo stays usable offline. Never written back to the server.

use crate::clients::{Course, Enrollment, Student};

pub fn sample_students() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            first_name: "Ahmed".to_string(),
            last_name: "Benali".to_string(),
            email: "ahmed.benali@univ.dz".to_string(),
            university_id: Some("UC-2021-0042".to_string()),
        },
        Student {
            id: 2,
            first_name: "Lina".to_string(),
            last_name: "Cherif".to_string(),
            email: "lina.cherif@univ.dz".to_string(),
            university_id: Some("UC-2022-0117".to_string()),
        },
        Student {
            id: 3,
            first_name: "Yacine".to_string(),
            last_name: "Haddad".to_string(),
            email: "yacine.haddad@univ.dz".to_string(),
            university_id: None,
        },
    ]
}

pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            name: "Distributed Systems".to_string(),
            instructor: "Dr. Meziane".to_string(),
            category: "Computer Science".to_string(),
            schedule: "Mon/Wed 10:00-11:30".to_string(),
        },
        Course {
            id: 2,
            name: "Linear Algebra".to_string(),
            instructor: "Pr. Saadi".to_string(),
            category: "Mathematics".to_string(),
            schedule: "Tue/Thu 08:30-10:00".to_string(),
        },
        Course {
            id: 3,
            name: "Technical English".to_string(),
            instructor: "Ms. Kaci".to_string(),
            category: "Languages".to_string(),
            schedule: "Fri 13:00-15:00".to_string(),
        },
    ]
}

pub fn sample_enrollments() -> Vec<Enrollment> {
    vec![
        Enrollment {
            id: 1,
            student_id: 1,
            student_name: Some("Ahmed Benali".to_string()),
            course_id: 1,
            course_title: Some("Distributed Systems".to_string()),
        },
        Enrollment {
            id: 2,
            student_id: 1,
            student_name: Some("Ahmed Benali".to_string()),
            course_id: 2,
            course_title: Some("Linear Algebra".to_string()),
        },
        Enrollment {
            id: 3,
            student_id: 2,
            student_name: Some("Lina Cherif".to_string()),
            course_id: 3,
            course_title: Some("Technical English".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollments_reference_known_records() {
        let student_ids: Vec<u64> = sample_students().iter().map(|s| s.id).collect();
        let course_ids: Vec<u64> = sample_courses().iter().map(|c| c.id).collect();

        for enrollment in sample_enrollments() {
            assert!(student_ids.contains(&enrollment.student_id));
            assert!(course_ids.contains(&enrollment.course_id));
        }
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let mut ids: Vec<u64> = sample_students().iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), sample_students().len());
    }
}
