use crate::core::report::build_report;
use crate::core::{ConfigProvider, GuidanceReport, PetRecord, Pipeline, Storage};
use crate::utils::error::{PawmiError, Result};
use reqwest::Client;
use std::io::Write;
use std::time::Duration;
use zip::write::{FileOptions, ZipWriter};

pub const OUTPUT_BASENAME: &str = "feeding_guidance";

pub struct GuidancePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> GuidancePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds()))
            .build()?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }

    fn rendered_files<'a>(&self, report: &'a GuidanceReport) -> Vec<(String, &'a str)> {
        self.config
            .output_formats()
            .iter()
            .filter_map(|format| {
                let content = match format.as_str() {
                    "csv" => report.csv_output.as_str(),
                    "json" => report.json_output.as_str(),
                    "txt" => report.text_output.as_str(),
                    other => {
                        tracing::warn!("Skipping unsupported output format: {}", other);
                        return None;
                    }
                };
                Some((format!("{}.{}", OUTPUT_BASENAME, format), content))
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GuidancePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<PetRecord>> {
        tracing::debug!("Fetching pet list from: {}", self.config.api_endpoint());

        let mut request = self.client.get(self.config.api_endpoint());
        if let Some(headers) = self.config.request_headers() {
            for (key, value) in headers {
                request = request.header(key.as_str(), value.as_str());
            }
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        // 單次請求，不重試
        if !response.status().is_success() {
            return Err(PawmiError::FetchFailed {
                status: response.status().as_u16(),
            });
        }

        let pets: Vec<PetRecord> = response.json().await?;
        Ok(pets)
    }

    async fn transform(&self, pets: Vec<PetRecord>) -> Result<GuidanceReport> {
        let unit = self.config.feeding_unit();
        tracing::debug!("Computing feeding guidance for {} pets in {}", pets.len(), unit);
        build_report(&pets, unit)
    }

    async fn load(&self, report: &GuidanceReport) -> Result<String> {
        let files = self.rendered_files(report);

        if let Some(archive_name) = self.config.archive_name() {
            tracing::debug!("Creating ZIP file with {} files", files.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, content) in &files {
                    zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                    zip.write_all(content.as_bytes())?;
                }
                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(archive_name, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), archive_name));
        }

        for (name, content) in &files {
            tracing::debug!("Writing {} ({} bytes)", name, content.len());
            self.storage.write_file(name, content.as_bytes()).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FeedingUnit;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn file_names(&self) -> Vec<String> {
            let files = self.files.lock().await;
            let mut names: Vec<String> = files.keys().cloned().collect();
            names.sort();
            names
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                PawmiError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        api_endpoint: String,
        unit: FeedingUnit,
        output_formats: Vec<String>,
        archive_name: Option<String>,
        headers: Option<HashMap<String, String>>,
    }

    impl MockConfig {
        fn new(api_endpoint: String) -> Self {
            Self {
                api_endpoint,
                unit: FeedingUnit::Kilograms,
                output_formats: vec!["csv".to_string(), "json".to_string()],
                archive_name: None,
                headers: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn output_path(&self) -> &str {
            "test_output"
        }

        fn feeding_unit(&self) -> FeedingUnit {
            self.unit
        }

        fn output_formats(&self) -> &[String] {
            &self.output_formats
        }

        fn archive_name(&self) -> Option<&str> {
            self.archive_name.as_deref()
        }

        fn request_timeout_seconds(&self) -> u64 {
            5
        }

        fn request_headers(&self) -> Option<&HashMap<String, String>> {
            self.headers.as_ref()
        }
    }

    fn pets_json() -> serde_json::Value {
        serde_json::json!([
            {"id": "1", "name": "Max", "breed": "Labrador", "imageUrl": "max.png",
             "age": "3", "weight": "10", "traits": ["activo"]},
            {"id": "2", "name": "Luna", "breed": "Chihuahua", "imageUrl": "luna.png",
             "age": "0.5", "weight": "2", "traits": []}
        ])
    }

    #[tokio::test]
    async fn test_extract_successful_api_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/pets");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(pets_json());
        });

        let pipeline =
            GuidancePipeline::new(MockStorage::new(), MockConfig::new(server.url("/pets"))).unwrap();
        let pets = pipeline.extract().await.unwrap();

        api_mock.assert();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].name, "Max");
        assert_eq!(pets[1].image_url, "luna.png");
    }

    #[tokio::test]
    async fn test_extract_sends_configured_headers() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/pets").header("x-api-key", "secret");
            then.status(200).json_body(serde_json::json!([]));
        });

        let mut config = MockConfig::new(server.url("/pets"));
        config.headers = Some(HashMap::from([(
            "x-api-key".to_string(),
            "secret".to_string(),
        )]));

        let pipeline = GuidancePipeline::new(MockStorage::new(), config).unwrap();
        let pets = pipeline.extract().await.unwrap();

        api_mock.assert();
        assert!(pets.is_empty());
    }

    #[tokio::test]
    async fn test_extract_error_status_is_fetch_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/pets");
            then.status(500);
        });

        let pipeline =
            GuidancePipeline::new(MockStorage::new(), MockConfig::new(server.url("/pets"))).unwrap();
        let err = pipeline.extract().await.unwrap_err();

        api_mock.assert_hits(1);
        assert!(matches!(err, PawmiError::FetchFailed { status: 500 }));
    }

    #[tokio::test]
    async fn test_extract_non_array_body_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pets");
            then.status(200).json_body(serde_json::json!({"pets": []}));
        });

        let pipeline =
            GuidancePipeline::new(MockStorage::new(), MockConfig::new(server.url("/pets"))).unwrap();
        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, PawmiError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_transform_uses_configured_unit() {
        let mut config = MockConfig::new("http://localhost/pets".to_string());
        config.unit = FeedingUnit::Pounds;
        let pipeline = GuidancePipeline::new(MockStorage::new(), config).unwrap();

        let pets: Vec<PetRecord> = serde_json::from_value(pets_json()).unwrap();
        let report = pipeline.transform(pets).await.unwrap();

        // 10 * 0.03 * 1.1 = 0.33 kg
        assert_eq!(report.guidance[0].daily_amount, "0.73 lbs");
        assert_eq!(report.guidance[1].schedule, ["08:00", "12:00", "16:00", "20:00"]);
    }

    #[tokio::test]
    async fn test_load_writes_each_format() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new("http://localhost/pets".to_string());
        config.output_formats = vec!["csv".to_string(), "json".to_string(), "txt".to_string()];
        let pipeline = GuidancePipeline::new(storage.clone(), config).unwrap();

        let pets: Vec<PetRecord> = serde_json::from_value(pets_json()).unwrap();
        let report = pipeline.transform(pets).await.unwrap();
        let output = pipeline.load(&report).await.unwrap();

        assert_eq!(output, "test_output");
        assert_eq!(
            storage.file_names().await,
            [
                "feeding_guidance.csv",
                "feeding_guidance.json",
                "feeding_guidance.txt"
            ]
        );

        let txt = storage.read_file("feeding_guidance.txt").await.unwrap();
        assert_eq!(String::from_utf8(txt).unwrap(), report.text_output);
    }

    #[tokio::test]
    async fn test_load_bundles_zip_archive() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new("http://localhost/pets".to_string());
        config.archive_name = Some("guidance.zip".to_string());
        let pipeline = GuidancePipeline::new(storage.clone(), config).unwrap();

        let pets: Vec<PetRecord> = serde_json::from_value(pets_json()).unwrap();
        let report = pipeline.transform(pets).await.unwrap();
        let output = pipeline.load(&report).await.unwrap();

        assert_eq!(output, "test_output/guidance.zip");
        assert_eq!(storage.file_names().await, ["guidance.zip"]);

        let zip_data = storage.read_file("guidance.zip").await.unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        assert_eq!(names, ["feeding_guidance.csv", "feeding_guidance.json"]);
    }
}
