use crate::configuration::ScoresApiSettings;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use standings::Student;

/// Why a load of the students list failed. The `Display` text is what the
/// error view shows.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("Failed to fetch students data")]
    Status(StatusCode),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

pub struct ScoresClient {
    http_client: Client,
    students_url: String,
}

impl ScoresClient {
    pub fn new(settings: &ScoresApiSettings) -> Self {
        Self {
            http_client: Client::new(),
            students_url: settings.students_url(),
        }
    }

    /// One `GET` of the students list. Malformed records are skipped, but the
    /// body as a whole must be a JSON array.
    #[tracing::instrument(
        name = "Fetching students with total scores",
        skip(self),
        fields(url = %self.students_url)
    )]
    pub async fn fetch_students(&self) -> Result<Vec<Student>, LoadError> {
        let response = self
            .http_client
            .get(&self.students_url)
            .send()
            .await
            .map_err(LoadError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let body = response.bytes().await.map_err(LoadError::Transport)?;
        let records: Vec<Value> = serde_json::from_slice(&body)?;
        Ok(decode_students(records))
    }
}

fn decode_students(records: Vec<Value>) -> Vec<Student> {
    let total = records.len();
    let students: Vec<Student> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(student) => Some(student),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed student record");
                None
            }
        })
        .collect();
    if students.len() < total {
        tracing::warn!(
            skipped = total - students.len(),
            total,
            "Some student records could not be decoded"
        );
    }
    students
}
