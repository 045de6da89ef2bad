//! Reusable algorithm fixtures.
//!
//! Standard algorithms written purely against the recorder:
//!
//! - [`BubbleSort`]: adjacent compare/swap passes, range-marks the unsorted prefix.
//! - [`InsertionSort`]: swap-based insertion, value-marks the item being placed.
//! - [`SelectionSort`]: value-marks the running minimum, range-marks the unsorted suffix.
//! - [`EarlyExitSort`]: bubble sort that stops after a fixed number of passes.
//! - [`OutOfBoundsAlgorithm`]: fails deterministically after N compares.

use sortreel_core::RecordError;
use sortreel_record::{Algorithm, Recorder};

/// Classic bubble sort.
pub struct BubbleSort;

impl<T: Ord> Algorithm<T> for BubbleSort {
    fn name(&self) -> &str {
        "bubble"
    }

    fn run(&self, rec: &mut Recorder<T>) -> Result<(), RecordError> {
        bubble_passes(rec, usize::MAX)
    }
}

/// Insertion sort using adjacent swaps.
pub struct InsertionSort;

impl<T: Ord + Clone> Algorithm<T> for InsertionSort {
    fn name(&self) -> &str {
        "insertion"
    }

    fn run(&self, rec: &mut Recorder<T>) -> Result<(), RecordError> {
        for i in 1..rec.len() {
            let key = rec.get(i)?.clone();
            rec.mark_value(key, "key");
            let mut j = i;
            while j > 0 && rec.compare(j - 1, j)?.is_gt() {
                rec.swap(j - 1, j)?;
                j -= 1;
            }
            rec.unmark_value()?;
        }
        Ok(())
    }
}

/// Selection sort.
pub struct SelectionSort;

impl<T: Ord + Clone> Algorithm<T> for SelectionSort {
    fn name(&self) -> &str {
        "selection"
    }

    fn run(&self, rec: &mut Recorder<T>) -> Result<(), RecordError> {
        let n = rec.len();
        if n == 0 {
            return Ok(());
        }
        for i in 0..n {
            rec.mark_range(i, n, "unsorted");
            let mut min = i;
            let first = rec.get(i)?.clone();
            rec.mark_value(first, "min");
            for j in i + 1..n {
                if rec.compare(j, min)?.is_lt() {
                    min = j;
                    let smaller = rec.get(min)?.clone();
                    rec.mark_value(smaller, "min");
                }
            }
            if min != i {
                rec.swap(i, min)?;
            }
            rec.unmark_value()?;
        }
        rec.unmark_range()
    }
}

/// Bubble sort that gives up after `passes` passes.
///
/// Leaves most inputs unsorted, which exercises the failed-verdict path.
pub struct EarlyExitSort {
    pub passes: usize,
}

impl<T: Ord> Algorithm<T> for EarlyExitSort {
    fn name(&self) -> &str {
        "early_exit"
    }

    fn run(&self, rec: &mut Recorder<T>) -> Result<(), RecordError> {
        bubble_passes(rec, self.passes)
    }
}

/// Compares adjacent items, then indexes one past the end.
pub struct OutOfBoundsAlgorithm {
    pub compares_before_failure: usize,
}

impl<T: Ord> Algorithm<T> for OutOfBoundsAlgorithm {
    fn name(&self) -> &str {
        "out_of_bounds"
    }

    fn run(&self, rec: &mut Recorder<T>) -> Result<(), RecordError> {
        let n = rec.len();
        for k in 0..self.compares_before_failure {
            if n >= 2 {
                rec.compare(k % (n - 1), k % (n - 1) + 1)?;
            }
        }
        rec.swap(0, n)
    }
}

fn bubble_passes<T: Ord>(rec: &mut Recorder<T>, max_passes: usize) -> Result<(), RecordError> {
    let n = rec.len();
    for pass in 0..n.saturating_sub(1).min(max_passes) {
        let end = n - pass;
        rec.mark_range(0, end, "unsorted");
        let mut swapped = false;
        for j in 0..end - 1 {
            if rec.compare(j, j + 1)?.is_gt() {
                rec.swap(j, j + 1)?;
                swapped = true;
            }
        }
        rec.unmark_range()?;
        if !swapped {
            break;
        }
    }
    Ok(())
}
