use crate::gateway::{HttpClient, Resource};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university_id: Option<String>,
}

/// Creation payload; the id is assigned server-side.
#[derive(Debug, Clone, Serialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_id: Option<String>,
}

/// Partial update; unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_id: Option<String>,
}

pub struct StudentsClient<'a> {
    http: &'a HttpClient,
}

impl<'a> StudentsClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Student>> {
        debug!("Fetching all students");
        let data = self.http.get_json(Resource::Students.path()).await?;
        serde_json::from_value(data)
            .map_err(|_| Error::invalid_response("unexpected students payload"))
    }

    pub async fn get(&self, id: u64) -> Result<Student> {
        debug!("Fetching student {}", id);
        let data = self.http.get_json(&Resource::Students.item_path(id)).await?;
        serde_json::from_value(data).map_err(|_| Error::invalid_response("unexpected student payload"))
    }

    pub async fn create(&self, student: &NewStudent) -> Result<Student> {
        debug!("Creating student {} {}", student.first_name, student.last_name);
        let body = serde_json::to_value(student)?;
        let data = self.http.post_json(Resource::Students.path(), &body).await?;
        serde_json::from_value(data).map_err(|_| Error::invalid_response("unexpected student payload"))
    }

    pub async fn update(&self, id: u64, patch: &StudentUpdate) -> Result<Student> {
        debug!("Updating student {}", id);
        let body = serde_json::to_value(patch)?;
        let data = self
            .http
            .put_json(&Resource::Students.item_path(id), &body)
            .await?;
        serde_json::from_value(data).map_err(|_| Error::invalid_response("unexpected student payload"))
    }

    pub async fn remove(&self, id: u64) -> Result<()> {
        debug!("Deleting student {}", id);
        self.http.delete(&Resource::Students.item_path(id)).await
    }
}
