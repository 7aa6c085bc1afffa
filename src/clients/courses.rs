use crate::gateway::{HttpClient, Resource};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub name: String,
    pub instructor: String,
    pub category: String,
    /// Free-text, e.g. "Mon/Wed 10:00-11:30".
    pub schedule: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCourse {
    pub name: String,
    pub instructor: String,
    pub category: String,
    pub schedule: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

pub struct CoursesClient<'a> {
    http: &'a HttpClient,
}

impl<'a> CoursesClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Course>> {
        debug!("Fetching all courses");
        let data = self.http.get_json(Resource::Courses.path()).await?;
        serde_json::from_value(data).map_err(|_| Error::invalid_response("unexpected courses payload"))
    }

    pub async fn get(&self, id: u64) -> Result<Course> {
        debug!("Fetching course {}", id);
        let data = self.http.get_json(&Resource::Courses.item_path(id)).await?;
        serde_json::from_value(data).map_err(|_| Error::invalid_response("unexpected course payload"))
    }

    pub async fn create(&self, course: &NewCourse) -> Result<Course> {
        debug!("Creating course {}", course.name);
        let body = serde_json::to_value(course)?;
        let data = self.http.post_json(Resource::Courses.path(), &body).await?;
        serde_json::from_value(data).map_err(|_| Error::invalid_response("unexpected course payload"))
    }

    pub async fn update(&self, id: u64, patch: &CourseUpdate) -> Result<Course> {
        debug!("Updating course {}", id);
        let body = serde_json::to_value(patch)?;
        let data = self
            .http
            .put_json(&Resource::Courses.item_path(id), &body)
            .await?;
        serde_json::from_value(data).map_err(|_| Error::invalid_response("unexpected course payload"))
    }

    pub async fn remove(&self, id: u64) -> Result<()> {
        debug!("Deleting course {}", id);
        self.http.delete(&Resource::Courses.item_path(id)).await
    }
}
