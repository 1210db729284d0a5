//! Course selection by week and identifier.
//!
//! A course is selected when its start falls in the requested ISO week, or
//! when the requested id is the id of the course itself, of its teacher or
//! of its subject. Each condition is checked on its own; any single match
//! is enough.

use super::Course;

/// Criteria of a course query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseFilter {
    /// ISO week number to match against course starts. Values outside
    /// 1..=53 are accepted and never match.
    pub week: i64,
    /// Raw id matched against course, teacher and subject ids.
    pub id: i64,
}

impl CourseFilter {
    pub fn new(week: i64, id: i64) -> Self {
        Self { week, id }
    }

    pub fn matches_week(&self, course: &Course) -> bool {
        i64::from(course.week()) == self.week
    }

    /// True when `id` designates the course, its teacher or its subject.
    pub fn matches_reference(&self, course: &Course) -> bool {
        course.matches_id(self.id)
            || course.teacher().id() == self.id
            || course.subject().id() == self.id
    }

    pub fn matches(&self, course: &Course) -> bool {
        self.matches_week(course) || self.matches_reference(course)
    }

    /// Keeps the matching courses, in scan order.
    pub fn apply<I>(&self, courses: I) -> Vec<Course>
    where
        I: IntoIterator<Item = Course>,
    {
        courses.into_iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::{CourseKind, Subject, Teacher};
    use crate::domain::foundation::{week_of_year, CourseId, SubjectId, TeacherId};
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn course(id: i64, teacher: i64, subject: i64, start: NaiveDateTime) -> Course {
        Course::reconstitute(
            CourseId::new(id),
            CourseKind::Td,
            Subject::reconstitute(SubjectId::new(subject), format!("S{}", subject), 3),
            Teacher::reconstitute(TeacherId::new(teacher), format!("T{}", teacher)),
            start,
            60,
        )
    }

    /// The startup dataset: Blouin=1, Bieber=2, Web=1, all in week 1 of 2015.
    fn seeded() -> Vec<Course> {
        vec![
            course(1, 1, 1, at(2015, 1, 1, 8)),
            course(2, 2, 1, at(2015, 1, 2, 14)),
            course(3, 1, 1, at(2015, 1, 2, 10)),
        ]
    }

    fn ids(courses: &[Course]) -> Vec<i64> {
        courses.iter().map(|c| c.id().value()).collect()
    }

    #[test]
    fn week_match_selects_every_course_of_the_week() {
        let result = CourseFilter::new(1, 99).apply(seeded());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn id_matches_course_or_teacher() {
        // course 2 matches twice: its own id and its teacher (Bieber, id 2)
        let result = CourseFilter::new(2, 2).apply(seeded());
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn subject_id_selects_all_courses_of_the_subject() {
        let result = CourseFilter::new(2, 1).apply(seeded());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn id_matching_only_course_three() {
        let result = CourseFilter::new(2, 3).apply(seeded());
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn nothing_matches_gives_empty_result() {
        let result = CourseFilter::new(2, 99).apply(seeded());
        assert!(result.is_empty());
    }

    #[test]
    fn conditions_are_independent() {
        // matches by week AND by teacher id: still selected exactly once
        let both = course(10, 4, 5, at(2015, 1, 5, 9));
        let by_teacher_only = course(11, 4, 6, at(2015, 3, 2, 9));
        let by_subject_only = course(12, 7, 4, at(2015, 3, 2, 9));

        let filter = CourseFilter::new(2, 4);
        assert!(filter.matches_week(&both) && filter.matches_reference(&both));

        let result = filter.apply(vec![both, by_teacher_only, by_subject_only]);
        assert_eq!(ids(&result), vec![10, 11, 12]);
    }

    #[test]
    fn scan_order_is_preserved() {
        let courses = vec![
            course(3, 1, 1, at(2015, 1, 2, 10)),
            course(1, 1, 1, at(2015, 1, 1, 8)),
            course(2, 2, 1, at(2015, 1, 2, 14)),
        ];
        let result = CourseFilter::new(1, 0).apply(courses);
        assert_eq!(ids(&result), vec![3, 1, 2]);
    }

    #[test]
    fn out_of_range_week_is_not_an_error() {
        let result = CourseFilter::new(0, 0).apply(seeded());
        assert!(result.is_empty());
    }

    #[test]
    fn negative_week_still_matches_by_id() {
        assert!(CourseFilter::new(-1, 99).apply(seeded()).is_empty());

        let result = CourseFilter::new(-1, 2).apply(seeded());
        assert_eq!(ids(&result), vec![2]);
    }

    fn arb_course() -> impl Strategy<Value = Course> {
        (1i64..30, 1i64..6, 1i64..6, 0i64..400, 0u32..24).prop_map(|(id, t, s, day, hour)| {
            let start = at(2015, 1, 1, 0) + Duration::days(day) + Duration::hours(hour as i64);
            course(id, t, s, start)
        })
    }

    proptest! {
        #[test]
        fn prop_selected_iff_any_condition_holds(
            courses in prop::collection::vec(arb_course(), 0..40),
            week in -2i64..55,
            id in 0i64..30,
        ) {
            let result = CourseFilter::new(week, id).apply(courses.clone());

            let expected: Vec<i64> = courses
                .iter()
                .filter(|c| {
                    i64::from(week_of_year(c.start())) == week
                        || c.id() == id
                        || c.teacher().id() == id
                        || c.subject().id() == id
                })
                .map(|c| c.id().value())
                .collect();

            prop_assert_eq!(ids(&result), expected);
        }

        #[test]
        fn prop_filter_is_idempotent(
            courses in prop::collection::vec(arb_course(), 0..40),
            week in -2i64..55,
            id in 0i64..30,
        ) {
            let filter = CourseFilter::new(week, id);
            let first = filter.apply(courses.clone());
            let second = filter.apply(courses);
            prop_assert_eq!(&first, &second);

            let reapplied = filter.apply(first.clone());
            prop_assert_eq!(first, reapplied);
        }
    }
}
