use std::time::{Duration, Instant};

use comfy_table::Table;

/// Wall-clock time spent in each phase of handling one expression.
pub struct Timings {
    points: Vec<(&'static str, Duration)>,
    last: Instant,
}

impl Timings {
    pub fn start() -> Self {
        Self {
            points: vec![],
            last: Instant::now(),
        }
    }

    pub fn lap(&mut self, label: &'static str) {
        let now = Instant::now();
        self.points.push((label, now.duration_since(self.last)));
        self.last = now;
    }

    pub fn report(&self) -> String {
        let millis = |d: &Duration| d.as_secs_f64() * 1000.0;
        let total = self.points.iter().map(|(_, d)| millis(d)).sum::<f64>();
        let mut table = Table::new();
        table.set_header(vec!["Phase", "Time (MS)", "%"]);
        for (label, time) in &self.points {
            let time = millis(time);
            let share = if total > 0.0 { time * 100.0 / total } else { 0.0 };
            table.add_row(vec![
                label.to_string(),
                format!("{time:.4}"),
                format!("{share:.4}"),
            ]);
        }

        table.add_row(vec![
            "Total".to_string(),
            format!("{total:.4}"),
            "100%".to_string(),
        ]);

        table.to_string()
    }
}
