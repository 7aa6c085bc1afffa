mod ai;
mod courses;
mod enrollments;
mod students;

pub use ai::{AiClient, DEFAULT_SUMMARY_RATIO, Summary, Translation};
pub use courses::{Course, CourseUpdate, CoursesClient, NewCourse};
pub use enrollments::{Enrollment, EnrollmentStyle, EnrollmentsClient};
pub use students::{NewStudent, Student, StudentUpdate, StudentsClient};

use crate::config::Config;
use crate::gateway::{HttpClient, Resource};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Root of the access layer: one wrapper per origin plus typed facades.
///
/// Constructed explicitly from configuration and passed to whoever needs it;
/// nothing here runs at load time.
pub struct CampusClient {
    gateway: HttpClient,
    ai: HttpClient,
    enrollment_style: EnrollmentStyle,
}

impl CampusClient {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.gateway.timeout_secs);

        Ok(Self {
            gateway: HttpClient::new(&config.gateway.base_url, timeout)?,
            ai: HttpClient::new(&config.ai.base_url, timeout)?,
            enrollment_style: EnrollmentStyle::default(),
        })
    }

    /// Selects the enrollment transport for this deployment.
    pub fn with_enrollment_style(mut self, style: EnrollmentStyle) -> Self {
        self.enrollment_style = style;
        self
    }

    pub fn gateway_url(&self) -> &str {
        self.gateway.base_url()
    }

    pub fn students(&self) -> StudentsClient<'_> {
        StudentsClient::new(&self.gateway)
    }

    pub fn courses(&self) -> CoursesClient<'_> {
        CoursesClient::new(&self.gateway)
    }

    pub fn enrollments(&self) -> EnrollmentsClient<'_> {
        EnrollmentsClient::new(&self.gateway, self.enrollment_style)
    }

    pub fn ai(&self) -> AiClient<'_> {
        AiClient::new(&self.ai)
    }

    /// Service name to metadata map published by the gateway, used for
    /// health checks and diagnostics.
    pub async fn services_info(&self) -> Result<HashMap<String, Value>> {
        let data = self.gateway.get_json(Resource::Services.path()).await?;
        serde_json::from_value(data)
            .map_err(|_| Error::invalid_response("unexpected services payload"))
    }
}
