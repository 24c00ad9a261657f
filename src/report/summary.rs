use crate::measure::MetricName;

/// Textual digest of one recorded series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub samples: usize,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub last: f64,
}

impl SeriesSummary {
    #[must_use]
    pub fn from_series(series: &[f64]) -> Option<Self> {
        let (&first, &last) = (series.first()?, series.last()?);
        let (min, max, sum) = series.iter().fold((first, first, 0.0), |(lo, hi, sum), value| {
            (lo.min(*value), hi.max(*value), sum + value)
        });
        Some(Self {
            samples: series.len(),
            min,
            max,
            avg: sum / series.len() as f64,
            last,
        })
    }

    #[must_use]
    pub fn line(&self, metric: MetricName) -> String {
        format!(
            "{}: samples={} min={:.2} avg={:.2} max={:.2} last={:.2}",
            metric, self.samples, self.min, self.avg, self.max, self.last
        )
    }
}
