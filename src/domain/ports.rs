use crate::domain::model::{FeedingUnit, GuidanceReport, PetRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn feeding_unit(&self) -> FeedingUnit;
    fn output_formats(&self) -> &[String];
    /// 壓縮檔名稱；`None` 表示輸出個別檔案
    fn archive_name(&self) -> Option<&str>;
    fn request_timeout_seconds(&self) -> u64;
    fn request_headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PetRecord>>;
    async fn transform(&self, pets: Vec<PetRecord>) -> Result<GuidanceReport>;
    async fn load(&self, report: &GuidanceReport) -> Result<String>;
}
