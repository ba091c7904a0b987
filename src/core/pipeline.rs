use crate::core::{AccessoryDocument, ConfigProvider, FlatRecord, Pipeline, Storage, TransformResult};
use crate::domain::accessory::build_catalog;
use crate::domain::model::RawAccessory;
use crate::utils::error::{EtlError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const JSON_FILENAME: &str = "catalog.json";
pub const CSV_FILENAME: &str = "catalog.csv";
pub const BUNDLE_FILENAME: &str = "catalog.zip";
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Reads an `/accessories` document and writes the flattened service catalog.
pub struct CatalogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CatalogPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

/// 同時接受 `{"accessories": [...]}` 與裸陣列
pub fn parse_document(data: &[u8]) -> Result<AccessoryDocument> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    let document = match value {
        serde_json::Value::Array(_) => AccessoryDocument {
            accessories: serde_json::from_value::<Vec<RawAccessory>>(value)?,
        },
        serde_json::Value::Object(_) => serde_json::from_value(value)?,
        other => {
            return Err(EtlError::ProcessingError {
                message: format!(
                    "Expected an accessories object or array, found {}",
                    json_kind(&other)
                ),
            })
        }
    };
    Ok(document)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow<'a> {
    bridge_id: &'a str,
    host: &'a str,
    port: u16,
    instance_id: &'a str,
    accessory_id: u64,
    service_code: &'a str,
    name: Option<&'a str>,
    category: &'a str,
    full_name: &'a str,
    sort_key: &'a str,
    unique_id: &'a str,
    descriptions: &'a str,
    get_characteristics: &'a str,
    put_characteristics: String,
    event_registers: String,
}

impl<'a> CsvRow<'a> {
    fn from_record(record: &'a FlatRecord) -> Result<Self> {
        Ok(Self {
            bridge_id: &record.bridge_id,
            host: &record.host,
            port: record.port,
            instance_id: &record.instance_id,
            accessory_id: record.accessory_id,
            service_code: &record.service_code,
            name: record.name.as_deref(),
            category: &record.category,
            full_name: &record.full_name,
            sort_key: &record.sort_key,
            unique_id: &record.unique_id,
            descriptions: &record.descriptions,
            get_characteristics: &record.get_characteristics,
            put_characteristics: serde_json::to_string(&record.put_characteristics)?,
            event_registers: serde_json::to_string(&record.event_registers)?,
        })
    }
}

pub fn records_to_csv(records: &[FlatRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(CsvRow::from_record(record)?)?;
    }
    writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("Failed to flush CSV output: {}", e),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    generated_at: DateTime<Utc>,
    bridge_id: &'a str,
    record_count: usize,
    skipped_services: usize,
    files: Vec<&'a str>,
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CatalogPipeline<S, C> {
    async fn extract(&self) -> Result<AccessoryDocument> {
        tracing::debug!("Reading accessories from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        let document = parse_document(&data)?;

        if document.accessories.is_empty() {
            tracing::warn!("Input contains no accessories");
        }

        Ok(document)
    }

    async fn transform(&self, document: AccessoryDocument) -> Result<TransformResult> {
        let base = self.config.base_context();
        let catalog = build_catalog(&document, &base, self.config.sort_records());

        Ok(TransformResult {
            records: catalog.records,
            skipped: catalog.skipped,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut outputs: Vec<(&str, Vec<u8>)> = Vec::new();

        for format in self.config.output_formats() {
            match format.as_str() {
                "json" => {
                    let data = serde_json::to_vec_pretty(&result.records)?;
                    outputs.push((JSON_FILENAME, data));
                }
                "csv" => outputs.push((CSV_FILENAME, records_to_csv(&result.records)?)),
                other => {
                    return Err(EtlError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            }
        }

        for (filename, data) in &outputs {
            let path = self.output_file(filename);
            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, data).await?;
        }

        if self.config.bundle() {
            let base = self.config.base_context();
            let manifest = Manifest {
                generated_at: Utc::now(),
                bridge_id: &base.bridge_id,
                record_count: result.records.len(),
                skipped_services: result.skipped,
                files: outputs.iter().map(|(name, _)| *name).collect(),
            };

            // 打包成 ZIP
            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

                for (filename, data) in &outputs {
                    zip.start_file(*filename, SimpleFileOptions::default())?;
                    zip.write_all(data)?;
                }

                zip.start_file(MANIFEST_FILENAME, SimpleFileOptions::default())?;
                zip.write_all(&serde_json::to_vec_pretty(&manifest)?)?;

                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            let path = self.output_file(BUNDLE_FILENAME);
            tracing::debug!("Writing ZIP bundle ({} bytes) to {}", zip_data.len(), path);
            self.storage.write_file(&path, &zip_data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
