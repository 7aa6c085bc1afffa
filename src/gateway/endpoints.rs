/// Logical resources routed through the gateway origin.
///
/// The mapping is static; asking for a resource that is not listed here is a
/// programming error, so there is no fallible lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Students,
    Courses,
    StudentCourses,
    Graphql,
    Services,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Students => "/students_service/",
            Self::Courses => "/courses_service/",
            Self::StudentCourses => "/studentcourses_service/",
            Self::Graphql => "/graphql_service/",
            Self::Services => "/services/",
        }
    }

    /// Path for a single record, e.g. `/students_service/7/`.
    pub fn item_path(&self, id: u64) -> String {
        format!("{}{}/", self.path(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collection_paths() {
        assert_eq!(Resource::Students.path(), "/students_service/");
        assert_eq!(Resource::Courses.path(), "/courses_service/");
        assert_eq!(Resource::StudentCourses.path(), "/studentcourses_service/");
        assert_eq!(Resource::Graphql.path(), "/graphql_service/");
        assert_eq!(Resource::Services.path(), "/services/");
    }

    #[test]
    fn test_item_path_keeps_trailing_slash() {
        assert_eq!(Resource::Students.item_path(7), "/students_service/7/");
        assert_eq!(Resource::Courses.item_path(42), "/courses_service/42/");
    }
}
