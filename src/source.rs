//! Record sources: live gateway, compiled-in fixtures, or live-with-fallback.
//!
//! Callers that only display collections depend on [`RecordSource`] instead of
//! the concrete client, which makes the disconnected demo mode an explicit
//! strategy rather than ad-hoc error handling at every call site.

use crate::clients::{CampusClient, Course, Enrollment, Student};
use crate::{Result, fixtures};
use async_trait::async_trait;
use tracing::warn;

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn students(&self) -> Result<Vec<Student>>;
    async fn courses(&self) -> Result<Vec<Course>>;
    async fn enrollments(&self) -> Result<Vec<Enrollment>>;
}

/// Delegates every fetch to the gateway.
pub struct LiveSource<'a> {
    client: &'a CampusClient,
}

impl<'a> LiveSource<'a> {
    pub fn new(client: &'a CampusClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource for LiveSource<'_> {
    async fn students(&self) -> Result<Vec<Student>> {
        self.client.students().list().await
    }

    async fn courses(&self) -> Result<Vec<Course>> {
        self.client.courses().list().await
    }

    async fn enrollments(&self) -> Result<Vec<Enrollment>> {
        self.client.enrollments().list().await
    }
}

/// Always serves the compiled-in samples. Cannot fail.
#[derive(Debug, Default)]
pub struct FixtureSource;

#[async_trait]
impl RecordSource for FixtureSource {
    async fn students(&self) -> Result<Vec<Student>> {
        Ok(fixtures::sample_students())
    }

    async fn courses(&self) -> Result<Vec<Course>> {
        Ok(fixtures::sample_courses())
    }

    async fn enrollments(&self) -> Result<Vec<Enrollment>> {
        Ok(fixtures::sample_enrollments())
    }
}

/// Tries the gateway first and falls back to fixtures on any failure, logging
/// the reason. Fixtures are display-only and never merged with live data.
pub struct FallbackSource<'a> {
    live: LiveSource<'a>,
}

impl<'a> FallbackSource<'a> {
    pub fn new(client: &'a CampusClient) -> Self {
        Self {
            live: LiveSource::new(client),
        }
    }
}

#[async_trait]
impl RecordSource for FallbackSource<'_> {
    async fn students(&self) -> Result<Vec<Student>> {
        match self.live.students().await {
            Ok(students) => Ok(students),
            Err(e) => {
                warn!("Falling back to fixture students: {}", e);
                Ok(fixtures::sample_students())
            }
        }
    }

    async fn courses(&self) -> Result<Vec<Course>> {
        match self.live.courses().await {
            Ok(courses) => Ok(courses),
            Err(e) => {
                warn!("Falling back to fixture courses: {}", e);
                Ok(fixtures::sample_courses())
            }
        }
    }

    async fn enrollments(&self) -> Result<Vec<Enrollment>> {
        match self.live.enrollments().await {
            Ok(enrollments) => Ok(enrollments),
            Err(e) => {
                warn!("Falling back to fixture enrollments: {}", e);
                Ok(fixtures::sample_enrollments())
            }
        }
    }
}
