//! Pure aggregation of records into chart-ready series.

use covstat_common::{HeatRecord, Record, STAFF_COLUMN, STUDENT_COLUMN, WEEKDAY_NAMES};
use serde::Serialize;

/// Row labels of the weekday grid, top to bottom.
pub const HEATMAP_ROW_LABELS: [&str; 2] = ["Students", "Staff"];

/// One staff/student bar pair per record, in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    /// ISO date of each pair
    pub labels: Vec<String>,
    /// New staff cases per date
    pub staff: Vec<i64>,
    /// New student cases per date
    pub students: Vec<i64>,
}

impl BarSeries {
    /// Split records into parallel staff and student columns.
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            labels: records.iter().map(Record::iso_date).collect(),
            staff: records.iter().map(|r| r.value(STAFF_COLUMN)).collect(),
            students: records.iter().map(|r| r.value(STUDENT_COLUMN)).collect(),
        }
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no dates at all.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value across both columns, or 0.
    pub fn max_value(&self) -> i64 {
        self.staff
            .iter()
            .chain(&self.students)
            .copied()
            .max()
            .unwrap_or_default()
    }

    /// Smallest value across both columns, or 0.
    pub fn min_value(&self) -> i64 {
        self.staff
            .iter()
            .chain(&self.students)
            .copied()
            .min()
            .unwrap_or_default()
    }
}

/// Case totals per weekday: row 0 is students, row 1 is staff, and the
/// columns run Monday through Sunday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeekdayTotals {
    /// `grid[row][weekday]`
    pub grid: [[i64; 7]; 2],
}

impl WeekdayTotals {
    /// Sum each population's values into its weekday bucket.
    ///
    /// Weekdays with no records stay at zero, so there are always seven
    /// columns.
    pub fn from_heat_records(records: &[HeatRecord]) -> Self {
        let mut grid = [[0; 7]; 2];
        for record in records {
            let day = usize::from(record.weekday.min(6));
            grid[0][day] += record.value(STUDENT_COLUMN);
            grid[1][day] += record.value(STAFF_COLUMN);
        }
        Self { grid }
    }

    /// Totals for students, Monday first.
    pub const fn students(&self) -> &[i64; 7] {
        &self.grid[0]
    }

    /// Totals for staff, Monday first.
    pub const fn staff(&self) -> &[i64; 7] {
        &self.grid[1]
    }

    /// `(row, weekday, value)` for every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(row, values)| values.iter().enumerate().map(move |(col, v)| (row, col, *v)))
    }

    /// Smallest cell value.
    pub fn min(&self) -> i64 {
        self.grid.iter().flatten().copied().min().unwrap_or_default()
    }

    /// Largest cell value.
    pub fn max(&self) -> i64 {
        self.grid.iter().flatten().copied().max().unwrap_or_default()
    }

    /// Column headings, Monday first.
    pub const fn weekday_labels() -> [&'static str; 7] {
        WEEKDAY_NAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covstat_common::test_utils::date;

    #[test]
    fn test_bar_series_from_records() {
        let records = vec![
            Record::new(date(2020, 10, 11), vec![5, 12]),
            Record::new(date(2020, 10, 12), vec![3, 104]),
        ];
        let series = BarSeries::from_records(&records);

        assert_eq!(series.labels, vec!["2020-10-11", "2020-10-12"]);
        assert_eq!(series.staff, vec![5, 3]);
        assert_eq!(series.students, vec![12, 104]);
        assert_eq!(series.max_value(), 104);
        assert_eq!(series.min_value(), 3);
    }

    #[test]
    fn test_bar_series_short_row_is_zero() {
        let series = BarSeries::from_records(&[Record::new(date(2020, 10, 11), vec![5])]);
        assert_eq!(series.students, vec![0]);
    }

    #[test]
    fn test_empty_bar_series() {
        let series = BarSeries::from_records(&[]);
        assert!(series.is_empty());
        assert_eq!(series.max_value(), 0);
    }

    #[test]
    fn test_weekday_totals_sum_per_bucket() {
        let records = vec![
            // Sunday
            HeatRecord::new(date(2020, 10, 11), vec![5, 12]),
            // Sunday
            HeatRecord::new(date(2020, 10, 4), vec![1, 8]),
            // Monday
            HeatRecord::new(date(2020, 10, 12), vec![3, 104]),
        ];
        let totals = WeekdayTotals::from_heat_records(&records);

        assert_eq!(totals.students(), &[104, 0, 0, 0, 0, 0, 20]);
        assert_eq!(totals.staff(), &[3, 0, 0, 0, 0, 0, 6]);
        assert_eq!(totals.min(), 0);
        assert_eq!(totals.max(), 104);
    }

    #[test]
    fn test_weekday_totals_always_seven_columns() {
        let totals = WeekdayTotals::from_heat_records(&[]);
        assert_eq!(totals.grid, [[0; 7]; 2]);
        assert_eq!(totals.cells().count(), 14);
    }

    #[test]
    fn test_cells_are_row_major() {
        let totals = WeekdayTotals::from_heat_records(&[HeatRecord::new(date(2020, 10, 12), vec![3, 4])]);
        let cells: Vec<_> = totals.cells().filter(|(_, _, v)| *v != 0).collect();
        assert_eq!(cells, vec![(0, 0, 4), (1, 0, 3)]);
    }
}
