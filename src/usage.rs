//! Token and cost accounting from an external usage reporter.
//!
//! The reporter (`ccusage --json --order desc` by default) prints daily
//! totals; a sample is the most recent day. A call's usage is the clamped
//! difference between samples taken before and after it. Sampling never
//! fails the caller: any problem degrades to "no sample".

use crate::interrupt::CancelToken;
use crate::process;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::time::Duration;

const SAMPLE_TIMEOUT: Duration = Duration::from_secs(10);

/// USD per million input tokens used for estimates.
pub const INPUT_PRICE_PER_MILLION: f64 = 3.0;
/// USD per million output tokens used for estimates.
pub const OUTPUT_PRICE_PER_MILLION: f64 = 15.0;

/// One day of cumulative usage as reported by the usage command.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSample {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_cost: f64,
}

/// Usage attributed to one or more generator calls.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageStats {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cost: f64,
}

impl UsageStats {
    pub fn is_empty(&self) -> bool {
        self.input_tokens == 0 && self.output_tokens == 0
    }

    /// Reported cost, or the token-based estimate when none was reported.
    pub fn effective_cost(&self) -> f64 {
        if self.cost > 0.0 {
            self.cost
        } else {
            estimated_cost(self.input_tokens, self.output_tokens)
        }
    }
}

impl Add for UsageStats {
    type Output = UsageStats;

    fn add(self, other: UsageStats) -> UsageStats {
        UsageStats {
            input_tokens: self.input_tokens + other.input_tokens,
            output_tokens: self.output_tokens + other.output_tokens,
            cost: self.cost + other.cost,
        }
    }
}

impl AddAssign for UsageStats {
    fn add_assign(&mut self, other: UsageStats) {
        *self = *self + other;
    }
}

impl Sum for UsageStats {
    fn sum<I: Iterator<Item = UsageStats>>(iter: I) -> UsageStats {
        iter.fold(UsageStats::default(), Add::add)
    }
}

impl fmt::Display for UsageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} input + {} output tokens (~{})",
            group_thousands(self.input_tokens),
            group_thousands(self.output_tokens),
            format_cost(self.effective_cost())
        )
    }
}

/// Parse the usage command's JSON report and take the most recent day.
pub fn parse_report(stdout: &str) -> Option<UsageSample> {
    let report: Value = serde_json::from_str(stdout).ok()?;
    let latest = report.get("daily")?.as_array()?.first()?.clone();
    serde_json::from_value(latest).ok()
}

/// Run `usage_cmd` and return the latest daily sample.
pub fn sample(usage_cmd: &str) -> Option<UsageSample> {
    let args = match process::split_command(usage_cmd) {
        Ok(args) => args,
        Err(e) => {
            tracing::debug!(error = %e, "usage command unusable");
            return None;
        }
    };

    let captured = match process::execute(&args, SAMPLE_TIMEOUT, &CancelToken::new()) {
        Ok(captured) => captured,
        Err(e) => {
            tracing::debug!(error = %e, "usage sampling failed");
            return None;
        }
    };

    if !captured.is_success() {
        tracing::debug!(exit_code = ?captured.exit_code, timed_out = captured.timed_out, "usage command failed");
        return None;
    }

    let sample = parse_report(&captured.stdout_text());
    if sample.is_none() {
        tracing::debug!("usage report had no daily entry");
    }
    sample
}

/// Usage between two samples, each field clamped at zero. Missing samples yield zeros.
pub fn difference(pre: Option<&UsageSample>, post: Option<&UsageSample>) -> UsageStats {
    let (Some(pre), Some(post)) = (pre, post) else {
        return UsageStats::default();
    };
    UsageStats {
        input_tokens: post.input_tokens.saturating_sub(pre.input_tokens),
        output_tokens: post.output_tokens.saturating_sub(pre.output_tokens),
        cost: (post.total_cost - pre.total_cost).max(0.0),
    }
}

pub fn estimated_cost(input_tokens: u64, output_tokens: u64) -> f64 {
    (input_tokens as f64 / 1_000_000.0) * INPUT_PRICE_PER_MILLION
        + (output_tokens as f64 / 1_000_000.0) * OUTPUT_PRICE_PER_MILLION
}

/// Dollar amount with precision depending on magnitude.
pub fn format_cost(cost: f64) -> String {
    if cost >= 1.0 {
        format!("${:.2}", cost)
    } else if cost >= 0.01 {
        format!("${:.3}", cost)
    } else {
        format!("${:.4}", cost)
    }
}

pub fn aggregate<'a, I: IntoIterator<Item = &'a UsageStats>>(stats: I) -> UsageStats {
    stats.into_iter().copied().sum()
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
