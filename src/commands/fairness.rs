//! Scramble fairness check
//!
//! Scrambles one word many times in parallel and compares how often each
//! letter lands in each position against a uniform shuffle.

use crate::core::{Word, WordError, shuffle_word};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Samples handled by one rayon task
const CHUNK_SIZE: usize = 1_000;

/// Result of a fairness run
#[derive(Debug, Clone)]
pub struct FairnessReport {
    pub word: String,
    pub samples: usize,
    /// Scrambles identical to the original word
    pub identity_count: usize,
    /// Per position, how often each letter landed there
    pub positions: Vec<FxHashMap<char, usize>>,
    /// Largest gap between an observed and an expected frequency
    pub max_deviation: f64,
    pub duration: Duration,
}

impl FairnessReport {
    /// Share of scrambles that came out unchanged
    #[must_use]
    pub fn identity_rate(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.identity_count as f64 / self.samples as f64
    }
}

#[derive(Default)]
struct Tally {
    identity: usize,
    counts: FxHashMap<(usize, char), usize>,
}

impl Tally {
    fn merge(mut self, other: Self) -> Self {
        self.identity += other.identity;
        for (key, n) in other.counts {
            *self.counts.entry(key).or_insert(0) += n;
        }
        self
    }
}

/// Scramble `word` `samples` times and measure positional bias
///
/// Each chunk gets its own generator seeded from `seed` plus the chunk
/// index, so a fixed seed gives a reproducible report.
///
/// # Errors
/// Returns `WordError` if `word` is empty or contains a non-letter.
pub fn run_fairness(
    word: &str,
    samples: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<FairnessReport, WordError> {
    let word = Word::exact(word)?;
    let base_seed = seed.unwrap_or_else(rand::random);

    let pb = if show_progress {
        progress_bar(samples)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let chunks = samples.div_ceil(CHUNK_SIZE);

    let tally = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let size = CHUNK_SIZE.min(samples - chunk * CHUNK_SIZE);
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(chunk as u64));
            let mut tally = Tally::default();

            for _ in 0..size {
                let scrambled = shuffle_word(&word, &mut rng);
                if scrambled == word.text() {
                    tally.identity += 1;
                }
                for (pos, ch) in scrambled.chars().enumerate() {
                    *tally.counts.entry((pos, ch)).or_insert(0) += 1;
                }
            }

            pb.inc(size as u64);
            tally
        })
        .reduce(Tally::default, Tally::merge);

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut positions = vec![FxHashMap::default(); word.len()];
    for ((pos, ch), n) in tally.counts {
        positions[pos].insert(ch, n);
    }

    let max_deviation = max_deviation(&word, &positions, samples);
    tracing::debug!(
        word = word.text(),
        samples,
        max_deviation,
        elapsed_ms = duration.as_millis() as u64,
        "fairness run finished"
    );

    Ok(FairnessReport {
        word: word.text().to_string(),
        samples,
        identity_count: tally.identity,
        positions,
        max_deviation,
        duration,
    })
}

/// A uniform shuffle puts letter `c` at any position with probability
/// `count(c) / len`
fn max_deviation(word: &Word, positions: &[FxHashMap<char, usize>], samples: usize) -> f64 {
    if samples == 0 {
        return 0.0;
    }
    let len = word.len() as f64;
    let letter_counts = word.letter_counts();

    positions
        .iter()
        .flat_map(|observed| {
            letter_counts.iter().map(move |(ch, &count)| {
                let expected = count as f64 / len;
                let actual = observed.get(ch).copied().unwrap_or(0) as f64 / samples as f64;
                (actual - expected).abs()
            })
        })
        .fold(0.0, f64::max)
}

fn progress_bar(samples: usize) -> ProgressBar {
    let pb = ProgressBar::new(samples as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_sample() {
        let report = run_fairness("purple", 2_500, Some(3), false).unwrap();
        assert_eq!(report.samples, 2_500);
        assert_eq!(report.positions.len(), 6);
        for position in &report.positions {
            assert_eq!(position.values().sum::<usize>(), 2_500);
        }
    }

    #[test]
    fn shuffle_is_close_to_uniform() {
        let report = run_fairness("abc", 30_000, Some(11), false).unwrap();
        assert!(
            report.max_deviation < 0.02,
            "max deviation {}",
            report.max_deviation
        );
        // 1 of 6 permutations is the identity
        assert!((report.identity_rate() - 1.0 / 6.0).abs() < 0.02);
    }

    #[test]
    fn repeated_letters_use_their_share() {
        let report = run_fairness("aab", 12_000, Some(5), false).unwrap();
        assert!(report.max_deviation < 0.03);
        let first_a = report.positions[0].get(&'a').copied().unwrap_or(0);
        assert!(first_a > 7_000 && first_a < 9_000);
    }

    #[test]
    fn single_letter_is_always_identity() {
        let report = run_fairness("x", 100, Some(1), false).unwrap();
        assert_eq!(report.identity_count, 100);
        assert!(report.max_deviation.abs() < f64::EPSILON);
    }

    #[test]
    fn zero_samples() {
        let report = run_fairness("abc", 0, Some(1), false).unwrap();
        assert_eq!(report.identity_count, 0);
        assert!(report.identity_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let a = run_fairness("orange", 3_000, Some(9), false).unwrap();
        let b = run_fairness("orange", 3_000, Some(9), false).unwrap();
        assert_eq!(a.identity_count, b.identity_count);
        assert_eq!(a.positions, b.positions);
    }

    #[test]
    fn rejects_invalid_word() {
        assert!(run_fairness("", 10, None, false).is_err());
        assert!(run_fairness(" abc", 10, None, false).is_err());
    }
}
