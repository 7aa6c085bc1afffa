use crate::gateway::{HttpClient, Resource};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

/// Transport used to reach the enrollment service.
///
/// The backend exposes the same records through a plain REST collection and
/// through a query-document endpoint; deployments run one or the other, never
/// both. The style is fixed at construction so call sites stay
/// transport-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrollmentStyle {
    #[default]
    QueryDocument,
    Rest,
}

/// One student-to-course link, normalized across both transports.
///
/// The REST collection carries only ids; the query-document endpoint also
/// returns display names, kept here as optionals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: u64,
    pub student_id: u64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub course_id: u64,
    #[serde(default)]
    pub course_title: Option<String>,
}

const ALL_ENROLLMENTS_QUERY: &str = "\
query {
  allStudentCourses {
    id
    student { id name }
    course { id title }
  }
}";

const ENROLL_MUTATION: &str = "\
mutation Enroll($studentId: Int!, $courseId: Int!) {
  enroll(studentId: $studentId, courseId: $courseId) {
    id
    student { id name }
    course { id title }
  }
}";

const REMOVE_ENROLLMENT_MUTATION: &str = "\
mutation RemoveEnrollment($id: Int!) {
  removeEnrollment(id: $id)
}";

pub struct EnrollmentsClient<'a> {
    http: &'a HttpClient,
    style: EnrollmentStyle,
}

impl<'a> EnrollmentsClient<'a> {
    pub(crate) fn new(http: &'a HttpClient, style: EnrollmentStyle) -> Self {
        Self { http, style }
    }

    pub fn style(&self) -> EnrollmentStyle {
        self.style
    }

    pub async fn list(&self) -> Result<Vec<Enrollment>> {
        debug!("Fetching all enrollments ({:?})", self.style);
        match self.style {
            EnrollmentStyle::Rest => {
                let data = self.http.get_json(Resource::StudentCourses.path()).await?;
                let records: Vec<RestEnrollment> = serde_json::from_value(data)
                    .map_err(|_| Error::invalid_response("unexpected enrollments payload"))?;
                Ok(records.into_iter().map(Enrollment::from).collect())
            }
            EnrollmentStyle::QueryDocument => {
                let data = self
                    .query_document(ALL_ENROLLMENTS_QUERY, json!({}))
                    .await?;
                let records: Vec<LinkedEnrollment> =
                    serde_json::from_value(unwrap_field(data, "allStudentCourses"))
                        .map_err(|_| Error::invalid_response("unexpected enrollments payload"))?;
                Ok(records.into_iter().map(Enrollment::from).collect())
            }
        }
    }

    /// Links a student to a course. Duplicate links are not prevented here;
    /// the backend decides whether to accept them.
    pub async fn enroll(&self, student_id: u64, course_id: u64) -> Result<Enrollment> {
        debug!("Enrolling student {} in course {}", student_id, course_id);
        match self.style {
            EnrollmentStyle::Rest => {
                let body = json!({"student_id": student_id, "course": course_id});
                let data = self
                    .http
                    .post_json(Resource::StudentCourses.path(), &body)
                    .await?;
                let record: RestEnrollment = serde_json::from_value(data)
                    .map_err(|_| Error::invalid_response("unexpected enrollment payload"))?;
                Ok(record.into())
            }
            EnrollmentStyle::QueryDocument => {
                let variables = json!({"studentId": student_id, "courseId": course_id});
                let data = self.query_document(ENROLL_MUTATION, variables).await?;
                let record: LinkedEnrollment =
                    serde_json::from_value(unwrap_field(data, "enroll"))
                        .map_err(|_| Error::invalid_response("unexpected enrollment payload"))?;
                Ok(record.into())
            }
        }
    }

    pub async fn remove(&self, enrollment_id: u64) -> Result<()> {
        debug!("Removing enrollment {}", enrollment_id);
        match self.style {
            EnrollmentStyle::Rest => {
                self.http
                    .delete(&Resource::StudentCourses.item_path(enrollment_id))
                    .await
            }
            EnrollmentStyle::QueryDocument => {
                let variables = json!({"id": enrollment_id});
                self.query_document(REMOVE_ENROLLMENT_MUTATION, variables)
                    .await
                    .map(|_| ())
            }
        }
    }

    /// Sends one query document and unwraps the `{data: ...}` envelope when
    /// present. Query-level errors surface with the server's first message.
    async fn query_document(&self, query: &str, variables: Value) -> Result<Value> {
        let body = json!({"query": query, "variables": variables});
        let response = self.http.post_json(Resource::Graphql.path(), &body).await?;

        if let Some(errors) = response.get("errors").and_then(Value::as_array) {
            let message = errors
                .first()
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("query failed")
                .to_string();
            return Err(Error::http(200, message));
        }

        if let Some(data) = response.get("data") {
            return Ok(data.clone());
        }
        Ok(response)
    }
}

/// Wire shape on the REST collection.
#[derive(Debug, Deserialize)]
struct RestEnrollment {
    id: u64,
    student_id: u64,
    course: u64,
}

impl From<RestEnrollment> for Enrollment {
    fn from(r: RestEnrollment) -> Self {
        Self {
            id: r.id,
            student_id: r.student_id,
            student_name: None,
            course_id: r.course,
            course_title: None,
        }
    }
}

/// Wire shape on the query-document endpoint.
#[derive(Debug, Deserialize)]
struct LinkedEnrollment {
    id: u64,
    student: StudentRef,
    course: CourseRef,
}

#[derive(Debug, Deserialize)]
struct StudentRef {
    id: u64,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CourseRef {
    id: u64,
    #[serde(default)]
    title: Option<String>,
}

impl From<LinkedEnrollment> for Enrollment {
    fn from(r: LinkedEnrollment) -> Self {
        Self {
            id: r.id,
            student_id: r.student.id,
            student_name: r.student.name,
            course_id: r.course.id,
            course_title: r.course.title,
        }
    }
}

fn unwrap_field(data: Value, field: &str) -> Value {
    match data {
        Value::Object(mut map) => match map.remove(field) {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}
