use crate::core::{cleaning, CleanResult, ConfigProvider, Pipeline, Record, Storage, Summary, Table};
use crate::utils::error::{CleanError, Result};
use std::collections::HashMap;

pub struct RecordCleaner<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RecordCleaner<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn parse_table(data: &[u8]) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new().from_reader(data);
        let headers = reader.headers()?.clone();

        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(CleanError::FormatError {
                message: "input has no usable header row".to_string(),
            });
        }

        let columns: Vec<String> = headers.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut fields = HashMap::new();
            for (i, column) in columns.iter().enumerate() {
                fields.insert(column.clone(), record.get(i).unwrap_or("").to_string());
            }
            rows.push(Record::new(fields));
        }

        Ok(Table::new(columns, rows))
    }

    fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            writer.write_record(table.columns.iter().map(|c| row.get(c)))?;
        }
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|e| CleanError::IoError(std::io::Error::other(e.to_string())))
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RecordCleaner<S, C> {
    async fn extract(&self) -> Result<Table> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        let table = Self::parse_table(&data)?;
        tracing::debug!(
            "Parsed {} rows with {} columns",
            table.len(),
            table.columns.len()
        );
        Ok(table)
    }

    async fn transform(&self, table: Table) -> Result<CleanResult> {
        let projected = cleaning::project(&table)?;

        let mut result = cleaning::partition(&projected);
        tracing::debug!(
            "Partitioned {} rows into {} valid / {} invalid",
            projected.len(),
            result.valid.len(),
            result.invalid.len()
        );

        // 只正規化有效列；無效檔保留原始欄名
        result.valid = cleaning::normalize_names(result.valid);
        Ok(result)
    }

    async fn load(&self, result: CleanResult) -> Result<Summary> {
        let invalid_path = self.config.invalid_output_path().to_string();
        let clean_path = self.config.clean_output_path().to_string();

        // Serialize both tables before writing either, so a serialization
        // failure never leaves one output file behind.
        let invalid_bytes = Self::to_csv_bytes(&result.invalid)?;
        let clean_bytes = Self::to_csv_bytes(&result.valid)?;

        self.storage.write_file(&invalid_path, &invalid_bytes).await?;
        self.storage.write_file(&clean_path, &clean_bytes).await?;
        tracing::debug!(
            "Wrote {} invalid rows to {} and {} cleaned rows to {}",
            result.invalid.len(),
            invalid_path,
            result.valid.len(),
            clean_path
        );

        Ok(Summary {
            valid_count: result.valid.len(),
            invalid_count: result.invalid.len(),
            invalid_path,
            clean_path,
        })
    }
}
