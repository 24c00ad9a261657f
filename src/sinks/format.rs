use super::GaugeUpdate;

const MEASUREMENT: &str = "resprobe";

/// Render one update as an Influx line-protocol record (newline included).
///
/// Non-finite values have no line-protocol representation and yield `None`.
#[must_use]
pub fn influx_line(update: &GaugeUpdate) -> Option<String> {
    if !update.value.is_finite() {
        return None;
    }
    let tag = escape_tag(&update.name);
    let line = match update.timestamp.timestamp_nanos_opt() {
        Some(nanos) => format!(
            "{},metric={} value={} {}\n",
            MEASUREMENT, tag, update.value, nanos
        ),
        None => format!("{},metric={} value={}\n", MEASUREMENT, tag, update.value),
    };
    Some(line)
}

fn escape_tag(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, ',' | '=' | ' ') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
