use serde::Deserialize;
use std::time::Duration;
use anyhow::{anyhow, bail, Context, Result};

pub const ENV_PREFIX: &str = "GR";

pub const DEFAULT_MAX: &str = "10ms";

pub const DEFAULT_ZBIAS: &str = "0.0";

/// Resolved injector configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    /// Arbitrary bytes for replaying execution. Empty disables injection.
    pub seed: Vec<u8>,
    /// Exclusive upper bound of injected delays.
    pub max: Duration,
    /// Probability of forcing a delay to zero.
    pub zero_bias: f64,
    /// Trace every injection decision.
    pub debug: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            seed: Vec::new(),
            max: Duration::from_millis(10),
            zero_bias: 0.0,
            debug: false,
        }
    }
}

impl ReplayConfig {
    pub fn new(seed: impl Into<Vec<u8>>, max: Duration) -> Self {
        Self {
            seed: seed.into(),
            max,
            ..Default::default()
        }
    }

    pub fn with_zero_bias(mut self, zero_bias: f64) -> Self {
        self.zero_bias = zero_bias;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.seed.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.seed.is_empty() {
            bail!("seed is empty");
        }
        if self.max.is_zero() {
            bail!("invalid max delay: {:?}", self.max);
        }
        if !(0.0..=1.0).contains(&self.zero_bias) {
            bail!("invalid zero bias: {}", self.zero_bias);
        }
        Ok(())
    }
}

/// Settings as read from the environment, before any parsing.
#[derive(Debug, Default, Deserialize)]
pub struct RawReplayConfig {
    pub seed: Option<String>,
    pub max: Option<String>,
    pub zbias: Option<String>,
    pub debug: Option<String>,
}

impl RawReplayConfig {
    pub fn resolve(self) -> Result<ReplayConfig> {
        let debug = self.debug.is_some_and(|v| !v.is_empty());
        let seed = self.seed.unwrap_or_default();
        if seed.is_empty() {
            return Ok(ReplayConfig {
                debug,
                ..Default::default()
            });
        }

        let max_str = non_empty_or(self.max, DEFAULT_MAX);
        let max = parse_duration(&max_str).context("Error while parsing GRMAX")?;
        if max.is_zero() {
            bail!("invalid GRMAX: {}", max_str);
        }

        let zbias_str = non_empty_or(self.zbias, DEFAULT_ZBIAS);
        let zero_bias: f64 = zbias_str
            .trim()
            .parse()
            .with_context(|| format!("Error while parsing GRZBIAS: {:?}", zbias_str))?;
        if !(0.0..=1.0).contains(&zero_bias) {
            bail!("invalid GRZBIAS: {}", zero_bias);
        }

        Ok(ReplayConfig {
            seed: seed.into_bytes(),
            max,
            zero_bias,
            debug,
        })
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads `GRSEED`, `GRMAX`, `GRZBIAS` and `GRDEBUG`, after loading `.env` if one exists.
pub fn load_replay_config() -> Result<ReplayConfig> {
    dotenv::dotenv().ok();
    let raw: RawReplayConfig = config::Config::builder()
        .add_source(config::Environment::with_prefix(ENV_PREFIX).prefix_separator(""))
        .build()?
        .try_deserialize()?;
    raw.resolve()
}

/// Parses durations such as `10ms`, `1.5s`, `250us` or `1m30s`.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    let (negative, mut rest) = match s.strip_prefix('-') {
        Some(unsigned) => (true, unsigned),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        bail!("invalid duration {:?}", s);
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let unit_nanos: u128 = match unit {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60 * 1_000_000_000,
            "h" => 3600 * 1_000_000_000,
            "" => bail!("missing unit in duration {:?}", s),
            other => bail!("unknown unit {:?} in duration {:?}", other, s),
        };

        let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
        if (whole.is_empty() && frac.is_empty()) || frac.contains('.') {
            bail!("invalid duration {:?}", s);
        }
        let whole: u128 = if whole.is_empty() { 0 } else { whole.parse()? };
        let mut nanos = whole
            .checked_mul(unit_nanos)
            .ok_or_else(|| anyhow!("duration out of range: {:?}", s))?;
        if !frac.is_empty() {
            // digits past 18 are below nanosecond resolution for every unit
            let digits = &frac[..frac.len().min(18)];
            let value: u128 = digits.parse()?;
            nanos += value * unit_nanos / 10u128.pow(digits.len() as u32);
        }

        total = total
            .checked_add(nanos)
            .ok_or_else(|| anyhow!("duration out of range: {:?}", s))?;
        rest = next;
    }

    // only a zero duration may carry a minus sign
    if negative && total != 0 {
        bail!("negative duration: {:?}", s);
    }
    let nanos = u64::try_from(total).map_err(|_| anyhow!("duration out of range: {:?}", s))?;
    Ok(Duration::from_nanos(nanos))
}
