//! JSON file log source.
//!
//! Reads per-trainee JSON files from a data directory:
//!
//! ```text
//! <root>/logs/<trainee>.json       daily logs
//! <root>/hiring/<trainee>.json     hiring status
//! <root>/schedules/<trainee>.json  employer work schedule
//! ```
//!
//! Log files may hold either a bare array of logs or the API envelope
//! `{"status": "success", "data": {"logs": [...]}}`.

use std::path::{Path, PathBuf};

use ojt_core::{DailyLog, HiringStatus, TraineeId, WorkSchedule};
use serde::Deserialize;
use tokio::fs;
use tracing::{debug, info};

use super::{LogSource, Result, StorageError};

/// File-based JSON log source.
pub struct JsonLogSource {
    root: PathBuf,
}

impl JsonLogSource {
    /// Open a data directory, creating the subdirectories it needs.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("logs")).await?;
        fs::create_dir_all(root.join("hiring")).await?;
        fs::create_dir_all(root.join("schedules")).await?;

        Ok(Self { root })
    }

    /// Open an existing data directory without creating anything.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(StorageError::NotFound(format!(
                "data directory {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Root of the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn logs_path(&self, trainee: TraineeId) -> PathBuf {
        self.root.join("logs").join(format!("{}.json", trainee))
    }
    fn hiring_path(&self, trainee: TraineeId) -> PathBuf {
        self.root.join("hiring").join(format!("{}.json", trainee))
    }
    fn schedule_path(&self, trainee: TraineeId) -> PathBuf {
        self.root.join("schedules").join(format!("{}.json", trainee))
    }

    /// Replace the logs of a trainee.
    pub async fn save_logs(&self, trainee: TraineeId, logs: &[DailyLog]) -> Result<()> {
        write_json(&self.logs_path(trainee), &logs).await
    }

    /// Replace the hiring status of a trainee.
    pub async fn save_hiring_status(&self, trainee: TraineeId, status: &HiringStatus) -> Result<()> {
        write_json(&self.hiring_path(trainee), status).await
    }

    /// Replace the work schedule that applies to a trainee.
    pub async fn save_work_schedule(&self, trainee: TraineeId, schedule: &WorkSchedule) -> Result<()> {
        write_json(&self.schedule_path(trainee), schedule).await
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LogFile {
    Bare(Vec<DailyLog>),
    Envelope { data: LogData },
}

#[derive(Deserialize)]
struct LogData {
    #[serde(default)]
    logs: Vec<DailyLog>,
}

impl LogFile {
    fn into_logs(self) -> Vec<DailyLog> {
        match self {
            LogFile::Bare(logs) => logs,
            LogFile::Envelope { data } => data.logs,
        }
    }
}

#[async_trait::async_trait]
impl LogSource for JsonLogSource {
    async fn load_logs(&self, trainee: TraineeId) -> Result<Vec<DailyLog>> {
        let mut logs = read_json::<LogFile>(&self.logs_path(trainee))
            .await?
            .map(LogFile::into_logs)
            .unwrap_or_default();

        // Newest first, same as the attendance API.
        logs.sort_by(|a, b| b.log_date.cmp(&a.log_date));

        info!(trainee = %trainee, count = logs.len(), "loaded daily logs");
        Ok(logs)
    }

    async fn load_hiring_status(&self, trainee: TraineeId) -> Result<Option<HiringStatus>> {
        let status = read_json(&self.hiring_path(trainee)).await?;
        debug!(trainee = %trainee, found = status.is_some(), "loaded hiring status");
        Ok(status)
    }

    async fn load_work_schedule(&self, trainee: TraineeId) -> Result<Option<WorkSchedule>> {
        read_json(&self.schedule_path(trainee)).await
    }

    async fn list_trainees(&self) -> Result<Vec<TraineeId>> {
        let mut trainees = Vec::new();
        let mut rd = fs::read_dir(self.root.join("logs")).await?;
        while let Some(entry) = rd.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            if let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse().ok())
            {
                trainees.push(id);
            }
        }
        trainees.sort();
        Ok(trainees)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json.as_bytes()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_missing_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonLogSource::new(dir.path()).await.unwrap();
        let trainee = TraineeId::new(1);

        assert!(source.load_logs(trainee).await.unwrap().is_empty());
        assert!(source.load_hiring_status(trainee).await.unwrap().is_none());
        assert!(source.load_work_schedule(trainee).await.unwrap().is_none());
        assert!(source.list_trainees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_logs_round_trip_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonLogSource::new(dir.path()).await.unwrap();
        let trainee = TraineeId::new(7);

        let logs = vec![
            DailyLog::new(date(2024, 6, 3), 8.0),
            DailyLog::new(date(2024, 6, 5), 7.5).with_warning("Saturday is not a working day"),
            DailyLog::new(date(2024, 6, 4), 8.0),
        ];
        source.save_logs(trainee, &logs).await.unwrap();

        let loaded = source.load_logs(trainee).await.unwrap();
        let dates: Vec<_> = loaded.iter().map(|l| l.log_date).collect();
        assert_eq!(dates, vec![date(2024, 6, 5), date(2024, 6, 4), date(2024, 6, 3)]);
        assert!(loaded[0].has_warning());

        assert_eq!(source.list_trainees().await.unwrap(), vec![trainee]);
    }

    #[tokio::test]
    async fn test_reads_api_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonLogSource::new(dir.path()).await.unwrap();
        let envelope = r#"{
            "status": "success",
            "data": {
                "logs": [{"log_date": "2024-06-03", "total_hours": 8.0, "validation_warning": null}],
                "total_hours": 8.0,
                "total_days": 1
            }
        }"#;
        fs::write(dir.path().join("logs").join("3.json"), envelope).await.unwrap();

        let logs = source.load_logs(TraineeId::new(3)).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].total_hours, 8.0);
    }

    #[tokio::test]
    async fn test_hiring_status_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonLogSource::new(dir.path()).await.unwrap();
        let trainee = TraineeId::new(9);
        let status = HiringStatus {
            is_hired: true,
            has_ojt_started: true,
            ojt_start_date: Some(date(2024, 1, 1)),
            all_requirements_validated: true,
            supervisor_name: None,
        };
        source.save_hiring_status(trainee, &status).await.unwrap();

        assert_eq!(source.load_hiring_status(trainee).await.unwrap(), Some(status));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonLogSource::new(dir.path()).await.unwrap();
        fs::write(dir.path().join("logs").join("4.json"), "{not json").await.unwrap();

        let err = source.load_logs(TraineeId::new(4)).await.unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonLogSource::open(dir.path().join("nope")).err().unwrap();
        assert!(matches!(err, StorageError::NotFound(_)));
    }
}
