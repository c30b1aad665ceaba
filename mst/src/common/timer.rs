// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::time::{Duration, Instant};

/// Reports the time spent in consecutive phases of a run.
///
/// Each call to [`Timer::next`] prints `name:phase:\t<seconds>` and starts
/// the next phase.
pub struct Timer<'a> {
    name: &'a str,
    total: Duration,
    last: Instant,
    on: bool,
    quiet: bool,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            total: Duration::ZERO,
            last: Instant::now(),
            on: false,
            quiet: false,
        }
    }

    /// A timer that keeps accumulating but never prints.
    pub fn quiet(name: &'a str) -> Self {
        Self { quiet: true, ..Self::new(name) }
    }

    pub fn start(&mut self) {
        self.on = true;
        self.last = Instant::now();
    }

    pub fn stop(&mut self) -> Duration {
        let d = self.lap();
        self.on = false;
        d
    }

    fn lap(&mut self) -> Duration {
        if !self.on { return Duration::ZERO; }
        let now = Instant::now();
        let d = now - self.last;
        self.total += d;
        self.last = now;
        d
    }

    pub fn next(&mut self, phase: &str) -> Duration {
        let d = self.lap();
        if self.on { self.report(d, phase); }
        d
    }

    pub fn total_time(&self) -> Duration {
        if self.on { self.total + (Instant::now() - self.last) }
        else { self.total }
    }

    pub fn total(&self) { self.report(self.total_time(), "total"); }

    fn report(&self, d: Duration, phase: &str) {
        if self.quiet { return; }
        println!("{}:{}:\t{:.6}", self.name, phase, d.as_secs_f64());
    }
}

/// Runs `round` `rounds` times (at least once) and returns the mean time
/// per round. `round` receives the index of the round.
pub fn time_loop<F>(name: &str, rounds: usize, mut round: F) -> Duration
where F: FnMut(usize)
{
    let rounds = rounds.max(1);
    let mut total = Duration::ZERO;
    for r in 0..rounds {
        let start = Instant::now();
        round(r);
        let d = start.elapsed();
        verbose_println!("{name}:round {r}:\t{:.6}", d.as_secs_f64());
        total += d;
    }
    mean(total, rounds)
}

fn mean(total: Duration, rounds: usize) -> Duration {
    total.div_f64(rounds as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_timer_does_not_advance() {
        let mut t = Timer::quiet("t");
        assert_eq!(t.next("idle"), Duration::ZERO);
        t.start();
        t.stop();
        let frozen = t.total_time();
        assert_eq!(t.total_time(), frozen);
    }

    #[test]
    fn time_loop_runs_every_round() {
        let mut seen = vec![];
        time_loop("t", 3, |r| seen.push(r));
        assert_eq!(seen, vec![0, 1, 2]);
        let mut count = 0;
        time_loop("t", 0, |_| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn mean_divides_by_the_full_round_count() {
        assert_eq!(mean(Duration::from_secs(8), 4), Duration::from_secs(2));
        assert!(mean(Duration::from_secs(1 << 20), usize::MAX) < Duration::from_micros(1));
    }
}
