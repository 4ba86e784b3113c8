use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::cli::{Opts, Output, OutputKind, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    #[inline]
    pub fn iter<T>(&mut self, opts: &Opts, expect: Option<(u64, u64)>, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<(u64, u64)>,
    {
        let stdout = std::io::stdout();

        let mut o = Output::new(
            stdout.lock(),
            if opts.json {
                OutputKind::Json
            } else {
                OutputKind::Normal
            },
        );

        if let Err(e) = self.inner_iter(&mut o, opts, expect, iter) {
            o.error(e)?;
        }

        Ok(())
    }

    fn inner_iter<T>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expect: Option<(u64, u64)>,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<(u64, u64)>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            let s = Instant::now();

            o.info(format_args!("warming up ({warmup:?})..."))?;

            loop {
                let value = iter()?;
                let after = Instant::now();
                check(value, expect)?;
                let _ = black_box(value);

                if after.duration_since(s) >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                let before = Instant::now();
                let value = iter()?;
                let after = Instant::now();
                check(value, expect)?;
                let _ = black_box(value);
                samples.push(after.duration_since(before));
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                let before = Instant::now();
                let value = iter()?;
                let after = Instant::now();
                check(value, expect)?;
                let _ = black_box(value);
                samples.push(after.duration_since(before));

                if after.duration_since(start) >= time_limit {
                    break;
                }
            }
        }

        samples.sort();

        let min = samples.first().copied().unwrap_or_default();
        let max = samples.last().copied().unwrap_or_default();
        let sum = samples.iter().copied().sum();

        let report = Report::new(
            percentile(&samples, 50),
            percentile(&samples, 95),
            percentile(&samples, 99),
            samples.len(),
            min,
            max,
            sum,
        );

        o.report(&report)?;
        Ok(())
    }
}

fn check(value: (u64, u64), expect: Option<(u64, u64)>) -> Result<()> {
    if let Some(expect) = expect {
        if value != expect {
            bail!("{value:?} (value) != {expect:?} (expected)");
        }
    }

    Ok(())
}

/// Pick the sample closest to the given percentile out of sorted samples.
fn percentile(samples: &[Duration], pct: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples[(last * pct) / 100]
}

/// A function that is opaque to the optimizer, used to prevent the compiler from
/// optimizing away computations in a benchmark.
///
/// This variant is stable-compatible, but it may cause some performance overhead
/// or fail to prevent code from being eliminated.
///
/// Borrowed from criterion under the MIT license.
fn black_box<T>(dummy: T) -> T {
    unsafe {
        let ret = std::ptr::read_volatile(&dummy);
        std::mem::forget(dummy);
        ret
    }
}
