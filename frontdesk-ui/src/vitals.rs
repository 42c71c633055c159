//! Performance Reporting
//!
//! Reads the browser's navigation and paint timings once and hands them to a
//! callback. Without a callback nothing is measured.

use std::fmt;

use wasm_bindgen::JsCast;
use web_sys::{PerformanceEntry, PerformanceResourceTiming};

/// Reported timings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VitalName {
    /// Time to first byte
    Ttfb,
    /// First contentful paint
    Fcp,
    /// First paint
    Fp,
}

impl fmt::Display for VitalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VitalName::Ttfb => "TTFB",
            VitalName::Fcp => "FCP",
            VitalName::Fp => "FP",
        };
        f.write_str(label)
    }
}

/// One measured timing, in milliseconds since navigation start
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VitalMetric {
    pub name: VitalName,
    pub value_ms: f64,
}

/// Map a performance entry to a metric, if it is one we report
pub fn metric_from_entry(
    entry_type: &str,
    name: &str,
    start_time: f64,
    response_start: Option<f64>,
) -> Option<VitalMetric> {
    let (name, value_ms) = match (entry_type, name) {
        ("navigation", _) => (VitalName::Ttfb, response_start?),
        ("paint", "first-contentful-paint") => (VitalName::Fcp, start_time),
        ("paint", "first-paint") => (VitalName::Fp, start_time),
        _ => return None,
    };

    (value_ms.is_finite() && value_ms >= 0.0).then_some(VitalMetric { name, value_ms })
}

/// Collect the timings and pass each one to `on_report`
pub fn report_web_vitals(on_report: Option<&dyn Fn(&VitalMetric)>) {
    let Some(on_report) = on_report else {
        return;
    };
    let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
        tracing::debug!("Performance API unavailable, no vitals reported");
        return;
    };

    for entry_type in ["navigation", "paint"] {
        for value in performance.get_entries_by_type(entry_type).iter() {
            let response_start = value
                .dyn_ref::<PerformanceResourceTiming>()
                .map(PerformanceResourceTiming::response_start);
            let Ok(entry) = value.dyn_into::<PerformanceEntry>() else {
                continue;
            };

            if let Some(metric) = metric_from_entry(
                &entry.entry_type(),
                &entry.name(),
                entry.start_time(),
                response_start,
            ) {
                on_report(&metric);
            }
        }
    }
}

/// Callback that writes a metric to the log
pub fn log_metric(metric: &VitalMetric) {
    tracing::info!("{}: {:.1} ms", metric.name, metric.value_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_entry_reports_ttfb() {
        let metric = metric_from_entry("navigation", "https://x/frontend/", 0.0, Some(42.5));
        assert_eq!(
            metric,
            Some(VitalMetric {
                name: VitalName::Ttfb,
                value_ms: 42.5
            })
        );
        assert_eq!(metric_from_entry("navigation", "x", 0.0, None), None);
    }

    #[test]
    fn test_paint_entries() {
        assert_eq!(
            metric_from_entry("paint", "first-contentful-paint", 120.0, None).map(|m| m.name),
            Some(VitalName::Fcp)
        );
        assert_eq!(
            metric_from_entry("paint", "first-paint", 80.0, None).map(|m| m.value_ms),
            Some(80.0)
        );
        assert_eq!(metric_from_entry("paint", "something-else", 1.0, None), None);
    }

    #[test]
    fn test_ignores_other_entries_and_bad_values() {
        assert_eq!(metric_from_entry("resource", "app.js", 10.0, Some(5.0)), None);
        assert_eq!(metric_from_entry("paint", "first-paint", f64::NAN, None), None);
        assert_eq!(metric_from_entry("paint", "first-paint", -1.0, None), None);
    }

    #[test]
    fn test_without_callback_does_nothing() {
        // Returns before touching any browser API
        report_web_vitals(None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(VitalName::Ttfb.to_string(), "TTFB");
        assert_eq!(VitalName::Fcp.to_string(), "FCP");
    }
}
