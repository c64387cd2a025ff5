/// Descriptive statistics computed from one file's valid numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// Computes count, mean, median, mode, population variance, and standard
/// deviation. Returns `None` for an empty input so callers can report the
/// no-valid-numbers state distinctly from an all-zero summary.
pub fn compute_statistics(numbers: &[f64]) -> Option<StatsSummary> {
    if numbers.is_empty() {
        return None;
    }

    let count = numbers.len();
    let mean = numbers.iter().sum::<f64>() / count as f64;

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = if count % 2 != 0 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    // Population variance: divide by count, not count - 1
    let variance = numbers.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
    let std_dev = variance.sqrt();

    Some(StatsSummary {
        count,
        mean,
        median,
        mode: mode_of(numbers),
        variance,
        std_dev,
    })
}

/// Highest-frequency value. Ties keep the value that appeared first in the
/// input; the frequency table is built in encounter order so the result is
/// reproducible run to run.
fn mode_of(numbers: &[f64]) -> f64 {
    let mut frequencies: Vec<(f64, usize)> = Vec::new();
    for &n in numbers {
        match frequencies.iter_mut().find(|(value, _)| *value == n) {
            Some((_, count)) => *count += 1,
            None => frequencies.push((n, 1)),
        }
    }

    let mut best = frequencies[0];
    for &(value, count) in &frequencies[1..] {
        if count > best.1 {
            best = (value, count);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_summary_for_small_input() {
        let summary = compute_statistics(&[1.0, 2.0, 2.0, 3.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.mode, 2.0);
        assert_eq!(summary.variance, 0.5);
        assert!((summary.std_dev - 0.7071067811865476).abs() < 1e-12);
    }

    #[test]
    fn mean_is_sum_over_count() {
        let numbers = [3.5, -1.25, 10.0, 0.75];
        let summary = compute_statistics(&numbers).unwrap();
        let expected = numbers.iter().sum::<f64>() / numbers.len() as f64;
        assert!((summary.mean - expected).abs() < 1e-12);
    }

    #[test]
    fn odd_count_median_is_middle_element() {
        let summary = compute_statistics(&[9.0, 1.0, 5.0]).unwrap();
        assert_eq!(summary.median, 5.0);
    }

    #[test]
    fn even_count_median_averages_central_pair() {
        let summary = compute_statistics(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary.median, 2.5);
    }

    #[test]
    fn mode_tie_keeps_first_encountered_value() {
        // 3 and 1 both occur twice; 3 was seen first
        let summary = compute_statistics(&[3.0, 1.0, 3.0, 1.0, 2.0]).unwrap();
        assert_eq!(summary.mode, 3.0);
    }

    #[test]
    fn variance_is_non_negative_and_std_dev_is_its_root() {
        let summary = compute_statistics(&[-5.0, 0.0, 5.0, 2.5]).unwrap();
        assert!(summary.variance >= 0.0);
        assert_eq!(summary.std_dev, summary.variance.sqrt());
    }

    #[test]
    fn single_value_has_zero_spread() {
        let summary = compute_statistics(&[42.0]).unwrap();
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.mode, 42.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn empty_input_yields_no_summary() {
        assert_eq!(compute_statistics(&[]), None);
    }
}
