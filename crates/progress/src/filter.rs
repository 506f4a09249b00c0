//! Date-range views over a log snapshot.

use ojt_core::{AccrualSummary, DailyLog, DateRange};

use crate::aggregator::aggregate;

/// Select the logs dated inside `range`.
///
/// The view borrows the snapshot and never copies or reorders it. It can be
/// iterated any number of times.
pub fn filter(logs: &[DailyLog], range: DateRange) -> FilteredLogs<'_> {
    FilteredLogs { logs, range }
}

/// Lazy, restartable view of the logs inside a date range.
#[derive(Debug, Clone, Copy)]
pub struct FilteredLogs<'a> {
    logs: &'a [DailyLog],
    range: DateRange,
}

impl<'a> FilteredLogs<'a> {
    /// Range this view selects.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Iterate the selected logs in snapshot order.
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            inner: self.logs.iter(),
            range: self.range,
        }
    }

    /// Accrual over the selected logs.
    pub fn summary(&self) -> AccrualSummary {
        aggregate(self.iter())
    }

    /// Whether no log falls inside the range.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Copy the selected logs out.
    pub fn to_vec(&self) -> Vec<DailyLog> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for FilteredLogs<'a> {
    type Item = &'a DailyLog;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &FilteredLogs<'a> {
    type Item = &'a DailyLog;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`FilteredLogs`] view.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, DailyLog>,
    range: DateRange,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a DailyLog;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.range;
        self.inner.find(|log| range.contains(log.log_date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let range = self.range;
        self.inner.rfind(|log| range.contains(log.log_date))
    }
}
