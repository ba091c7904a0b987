use crate::domain::model::{AccessoryDocument, Context, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn sort_records(&self) -> bool;
    fn bundle(&self) -> bool;
    /// Bridge addressing shared by every accessory in the input.
    fn base_context(&self) -> Context;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<AccessoryDocument>;
    async fn transform(&self, document: AccessoryDocument) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
