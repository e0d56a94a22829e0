use std::time::Instant;

use ck_compiler::{compile_rule, rule_to_pattern_source, RuleMatcher};

pub struct BenchOptions {
    pub rules: Vec<String>,
    pub candidates: Vec<String>,
    pub iterations: usize,
}

const DEFAULT_CANDIDATES: &[&str] = &[
    "example.com",
    "www.google.com",
    "cdn.ads.example.net",
    "a.very.long.subdomain.chain.of.labels.example.co.uk",
];

pub fn run_bench(opts: BenchOptions) -> Result<(), String> {
    if opts.iterations == 0 {
        return Err("Iterations must be greater than zero".to_string());
    }

    let candidates: Vec<String> = if opts.candidates.is_empty() {
        DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect()
    } else {
        opts.candidates.clone()
    };

    println!("Rule Benchmark");
    println!("==================================================");
    println!("Rules:       {}", opts.rules.len());
    println!("Candidates:  {}", candidates.len());
    println!("Iterations:  {}", opts.iterations);
    println!();

    let source_us = measure(opts.iterations, || {
        for rule in &opts.rules {
            std::hint::black_box(rule_to_pattern_source(rule));
        }
    });
    report("Pattern source", &source_us, opts.rules.len());

    let compile_us = measure(opts.iterations, || {
        for rule in &opts.rules {
            std::hint::black_box(compile_rule(rule));
        }
    });
    report("Compile", &compile_us, opts.rules.len());

    let matchers: Vec<RuleMatcher> = opts.rules.iter().map(|rule| compile_rule(rule)).collect();
    let mut hits = 0usize;
    let match_us = measure(opts.iterations, || {
        for matcher in &matchers {
            for candidate in &candidates {
                if matcher.test(candidate) {
                    hits += 1;
                }
            }
        }
    });
    report("Match", &match_us, matchers.len() * candidates.len());

    println!();
    println!("Match hits: {}", hits / opts.iterations);

    Ok(())
}

/// Time each iteration in microseconds, sorted ascending.
fn measure<F: FnMut()>(iterations: usize, mut f: F) -> Vec<f64> {
    let mut samples = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        samples.push(start.elapsed().as_secs_f64() * 1_000_000.0);
    }
    samples.sort_by(|a, b| a.total_cmp(b));
    samples
}

fn report(name: &str, sorted: &[f64], ops_per_iter: usize) {
    let ops = ops_per_iter.max(1) as f64;
    println!(
        "{:<16} p50 {:>8.3} μs  p99 {:>8.3} μs  ({:.3} μs/op)",
        name,
        percentile(sorted, 0.50),
        percentile(sorted, 0.99),
        percentile(sorted, 0.50) / ops,
    );
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64) * p).ceil() as usize;
    let idx = idx.saturating_sub(1).min(sorted.len() - 1);
    sorted[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&values, 0.5), 2.0);
        assert_eq!(percentile(&values, 0.99), 4.0);
        assert_eq!(percentile(&[], 0.5), 0.0);
    }

    #[test]
    fn test_measure_sorted() {
        let samples = measure(5, || {});
        assert_eq!(samples.len(), 5);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }
}
