//! Progress tracking service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use ojt_core::{DailyLog, DateRange, ProgressState, TraineeId};
use ojt_storage::LogSource;
use tracing::info;

use crate::aggregator::aggregate;
use crate::calculator::progress;
use crate::config::EngineConfig;
use crate::error::TrackerError;
use crate::filter::filter;
use crate::report::TraineeReport;
use crate::validator::annotate;

/// Progress tracking service.
///
/// Every call fetches a fresh snapshot and recomputes; nothing derived is
/// kept between calls.
#[async_trait]
pub trait ProgressTracker: Send + Sync {
    /// Current progress of a trainee.
    async fn get_progress(&self, trainee: TraineeId) -> Result<ProgressState, TrackerError>;

    /// Logs of a trainee inside a date range, with schedule warnings filled in.
    async fn logs_in_range(
        &self,
        trainee: TraineeId,
        range: DateRange,
    ) -> Result<Vec<DailyLog>, TrackerError>;

    /// Full report for a trainee as of `today`.
    async fn report(
        &self,
        trainee: TraineeId,
        range: DateRange,
        today: NaiveDate,
    ) -> Result<TraineeReport, TrackerError>;
}

/// Progress tracker over a [`LogSource`].
pub struct BasicProgressTracker<S: LogSource> {
    storage: Arc<S>,
    config: EngineConfig,
}

impl<S: LogSource> BasicProgressTracker<S> {
    /// Create a tracker with the default configuration.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, EngineConfig::default())
    }

    /// Create a tracker with a configuration.
    pub fn with_config(storage: S, config: EngineConfig) -> Self {
        Self {
            storage: Arc::new(storage),
            config,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Load logs, annotated against the trainee's schedule when one exists.
    async fn load_annotated(&self, trainee: TraineeId) -> Result<Vec<DailyLog>, TrackerError> {
        let logs = self.storage.load_logs(trainee).await?;
        match self.storage.load_work_schedule(trainee).await? {
            Some(schedule) => Ok(annotate(&logs, &schedule)),
            None => Ok(logs),
        }
    }
}

#[async_trait]
impl<S: LogSource + 'static> ProgressTracker for BasicProgressTracker<S> {
    async fn get_progress(&self, trainee: TraineeId) -> Result<ProgressState, TrackerError> {
        let logs = self.storage.load_logs(trainee).await?;
        Ok(progress(&aggregate(&logs), self.config.hours_required)?)
    }

    async fn logs_in_range(
        &self,
        trainee: TraineeId,
        range: DateRange,
    ) -> Result<Vec<DailyLog>, TrackerError> {
        let logs = self.load_annotated(trainee).await?;
        Ok(filter(&logs, range).to_vec())
    }

    async fn report(
        &self,
        trainee: TraineeId,
        range: DateRange,
        today: NaiveDate,
    ) -> Result<TraineeReport, TrackerError> {
        let hiring = self
            .storage
            .load_hiring_status(trainee)
            .await?
            .ok_or(TrackerError::UnknownTrainee(trainee))?;
        let logs = self.load_annotated(trainee).await?;

        let report = TraineeReport::build(&logs, Some(&hiring), range, today, &self.config)?;
        info!(
            trainee = %trainee,
            hours = report.summary.hours_completed,
            percentage = report.progress.progress_percentage,
            status = %report.status,
            "computed trainee report"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use ojt_core::{DaySchedule, HiringStatus, PlacementStatus, WorkSchedule};
    use ojt_storage::Result as StorageResult;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    struct MockLogSource {
        logs: Vec<DailyLog>,
        hiring: Option<HiringStatus>,
        schedule: Option<WorkSchedule>,
    }

    #[async_trait]
    impl LogSource for MockLogSource {
        async fn load_logs(&self, _trainee: TraineeId) -> StorageResult<Vec<DailyLog>> { Ok(self.logs.clone()) }
        async fn load_hiring_status(&self, _trainee: TraineeId) -> StorageResult<Option<HiringStatus>> { Ok(self.hiring.clone()) }
        async fn load_work_schedule(&self, _trainee: TraineeId) -> StorageResult<Option<WorkSchedule>> { Ok(self.schedule.clone()) }
        async fn list_trainees(&self) -> StorageResult<Vec<TraineeId>> { Ok(vec![TraineeId::new(1)]) }
    }

    fn timed(day: u32, hours: f64) -> DailyLog {
        DailyLog::new(date(6, day), hours).with_times(
            date(6, day).and_hms_opt(8, 0, 0).unwrap(),
            date(6, day).and_hms_opt(17, 0, 0),
        )
    }

    fn source() -> MockLogSource {
        let hours = DaySchedule::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        );
        MockLogSource {
            // June 2024: the 6th is a Thursday, the 7th a Friday, the 8th a Saturday.
            logs: vec![timed(8, 4.0), timed(7, 8.0), timed(6, 8.0)],
            hiring: Some(HiringStatus {
                is_hired: true,
                has_ojt_started: true,
                ojt_start_date: Some(date(6, 3)),
                all_requirements_validated: true,
                supervisor_name: None,
            }),
            schedule: Some(WorkSchedule::new().with_day(chrono::Weekday::Fri, hours)),
        }
    }

    #[tokio::test]
    async fn test_get_progress() {
        let tracker = BasicProgressTracker::new(source());
        let state = tracker.get_progress(TraineeId::new(1)).await.unwrap();
        assert_eq!(state.hours_completed, 20.0);
        assert_eq!(state.remaining_hours, 466.0);
    }

    #[tokio::test]
    async fn test_report_counts_annotated_warnings() {
        let tracker = BasicProgressTracker::new(source());
        let report = tracker
            .report(TraineeId::new(1), DateRange::unbounded(), date(6, 10))
            .await
            .unwrap();

        // Saturday and Thursday are off-schedule; their hours still count.
        assert_eq!(report.warning_count, 2);
        assert_eq!(report.summary.hours_completed, 20.0);
        assert_eq!(report.status, PlacementStatus::Ongoing);
        assert!(report.estimate.presumed_end_date.is_some());
    }

    #[tokio::test]
    async fn test_empty_schedule_adds_no_warnings() {
        let mut source = source();
        source.schedule = Some(WorkSchedule::new());
        let tracker = BasicProgressTracker::new(source);
        let report = tracker
            .report(TraineeId::new(1), DateRange::unbounded(), date(6, 10))
            .await
            .unwrap();
        assert_eq!(report.warning_count, 0);
        assert_eq!(report.summary.hours_completed, 20.0);
    }

    #[tokio::test]
    async fn test_logs_in_range() {
        let tracker = BasicProgressTracker::new(source());
        let logs = tracker
            .logs_in_range(TraineeId::new(1), DateRange::new(Some(date(6, 8)), None))
            .await
            .unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(
            logs[0].validation_warning.as_deref(),
            Some("Saturday is not a working day")
        );
    }

    #[tokio::test]
    async fn test_unknown_trainee() {
        let mut source = source();
        source.hiring = None;
        let tracker = BasicProgressTracker::new(source);
        let err = tracker
            .report(TraineeId::new(1), DateRange::unbounded(), date(6, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::UnknownTrainee(_)));
    }

    #[tokio::test]
    async fn test_invalid_config_surfaces() {
        let config = EngineConfig {
            hours_required: -1.0,
            ..Default::default()
        };
        let tracker = BasicProgressTracker::with_config(source(), config);
        assert_eq!(tracker.config().hours_required, -1.0);
        let err = tracker.get_progress(TraineeId::new(1)).await.unwrap_err();
        assert!(matches!(err, TrackerError::Engine(_)));
    }
}
