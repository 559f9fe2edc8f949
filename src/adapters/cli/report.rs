//! Report Rendering
//!
//! Human-readable stdout reports for both pipelines.

use std::fmt::Write;

use crate::application::{
    ExchangeReading, MomentumReport, MovingAverageSignal, PipelineError,
};

const RULE: &str = "==============================================";

/// Exit rules are advisory only; nothing enforces them
pub const RISK_NOTE: &str = "Risk Management Note: Exit trade after \u{b1}0.2% price movement \
                             or after 10 minutes (not actively implemented in this demo).";

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

pub fn moving_average_header(ticker: &str) -> String {
    format!("Simulating stock data for {}...\n", ticker)
}

pub fn moving_average_data(data: &[f64]) -> String {
    format!("Simulated Stock Data:\n{:?}\n\n", data)
}

pub fn moving_average_signal(signal: &MovingAverageSignal) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Computed Signal (Moving Average over last {} data points): {:.2}",
        signal.window_size, signal.moving_average
    );
    let _ = write!(out, "Final Investment Decision: {}", signal.label);
    out
}

pub fn signal_error(error: &PipelineError) -> String {
    match error {
        PipelineError::Signal(e) => format!("Error computing signal: {}", e),
        other => format!("Error: {}", other),
    }
}

pub fn exchange_reading(reading: &ExchangeReading) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Exchange: {}", reading.exchange);
    let _ = writeln!(
        out,
        "  Latest Price: {} | Mean Price: {:.2} | Price Z-Score: {:.2}",
        fmt_opt(reading.latest_price),
        reading.mean_price,
        reading.price_z
    );
    let _ = writeln!(
        out,
        "  Latest Volume: {} | Mean Volume: {:.2} | Volume Z-Score: {:.2}",
        fmt_opt(reading.latest_volume),
        reading.mean_volume,
        reading.volume_z
    );
    let _ = write!(out, "  Computed Momentum Score: {:.2}", reading.momentum.value());
    out
}

pub fn momentum_report(report: &MomentumReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Fetching intraday data from multiple exchanges in parallel...\n"
    );

    for failure in &report.failures {
        let _ = writeln!(
            out,
            "Error fetching data from {}: {}\n",
            failure.exchange, failure.error
        );
    }

    for reading in &report.readings {
        let _ = writeln!(out, "{}\n", exchange_reading(reading));
    }

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "Most Extreme Signal from {}: Momentum Score = {:.2}",
        report.most_extreme, report.extreme_score
    );
    let _ = writeln!(out, "Trading Decision: {}", report.label);
    let _ = writeln!(out, "{}\n", RULE);
    let _ = write!(out, "{}", RISK_NOTE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FailedSource;
    use crate::domain::{Decision, MomentumScore, SignalError};

    fn reading(exchange: &str, price_z: f64, volume_z: f64) -> ExchangeReading {
        ExchangeReading {
            exchange: exchange.into(),
            latest_price: Some(152.25),
            mean_price: 150.041,
            price_z,
            latest_volume: Some(2500),
            mean_volume: 1024.2,
            volume_z,
            momentum: MomentumScore::scored(price_z, volume_z),
        }
    }

    #[test]
    fn test_moving_average_lines() {
        let signal = MovingAverageSignal {
            window_size: 10,
            moving_average: 150.0,
            upper_threshold: 150.75,
            lower_threshold: 149.25,
            decision: Decision::Hold,
            label: "Hold",
        };
        assert_eq!(
            moving_average_signal(&signal),
            "Computed Signal (Moving Average over last 10 data points): 150.00\n\
             Final Investment Decision: Hold"
        );
        assert_eq!(
            moving_average_data(&[150.0, 150.12]),
            "Simulated Stock Data:\n[150.0, 150.12]\n\n"
        );
    }

    #[test]
    fn test_signal_error_line() {
        let err = PipelineError::Signal(SignalError::InsufficientData {
            required: 10,
            actual: 8,
        });
        assert_eq!(
            signal_error(&err),
            "Error computing signal: Insufficient data: requires 10 data points, got 8"
        );
        assert_eq!(
            signal_error(&PipelineError::NoSources),
            "Error: No source returned data; nothing to decide on"
        );
    }

    #[test]
    fn test_exchange_reading_lines() {
        let text = exchange_reading(&reading("NASDAQ", 3.8, 7.4));
        assert!(text.starts_with("Exchange: NASDAQ\n"));
        assert!(text.contains("Latest Price: 152.25 | Mean Price: 150.04 | Price Z-Score: 3.80"));
        assert!(text.contains("Latest Volume: 2500 | Mean Volume: 1024.20 | Volume Z-Score: 7.40"));
        assert!(text.ends_with("Computed Momentum Score: 28.12"));
    }

    #[test]
    fn test_momentum_report_layout() {
        let report = MomentumReport {
            readings: vec![reading("NYSE", 0.5, 0.2), reading("NASDAQ", 3.8, 7.4)],
            failures: vec![FailedSource {
                exchange: "BATS".into(),
                error: "Source unavailable: down".to_string(),
            }],
            most_extreme: "NASDAQ".into(),
            extreme_score: 28.12,
            threshold: 5.0,
            decision: Decision::Buy,
            label: "BUY",
        };

        let text = momentum_report(&report);
        assert!(text.contains("Error fetching data from BATS: Source unavailable: down"));
        assert!(text.contains("Most Extreme Signal from NASDAQ: Momentum Score = 28.12"));
        assert!(text.contains("Trading Decision: BUY"));
        assert!(text.ends_with(RISK_NOTE));
        assert!(text.find("Exchange: NYSE").unwrap() < text.find("Exchange: NASDAQ").unwrap());
    }
}
