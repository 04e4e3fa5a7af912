//! Evaluation orchestrator.
//!
//! Iterates the configured strengths in order. Per strength: sample k
//! distinct phrases, encode each, fan the decode calls out concurrently
//! (Semaphore-capped), and tally outcomes attributed by request index so
//! scoring never depends on completion order. Strength s+1 starts only
//! after strength s's batch has fully resolved.

use crate::cipher;
use crate::config::EvalConfig;
use crate::corpus::Corpus;
use crate::errors::RotbenchError;
use crate::providers::Oracle;
use crate::report::progress::{OutcomeEvent, OutcomeSink};
use crate::report::{Outcome, RunReport, StrengthTally};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

pub struct Runner {
    pub oracle: Arc<dyn Oracle>,
    pub corpus: Corpus,
    pub cfg: EvalConfig,
    pub sink: Option<OutcomeSink>,
}

impl Runner {
    pub async fn run(&self) -> anyhow::Result<RunReport> {
        let seed = self.cfg.seed.unwrap_or_else(|| {
            let s = rand::random();
            info!(seed = s, "no seed provided, using generated seed");
            s
        });
        let mut rng = StdRng::seed_from_u64(seed);

        let sem = Arc::new(Semaphore::new(self.cfg.parallel.max(1)));
        let mut tallies: BTreeMap<i32, StrengthTally> = BTreeMap::new();

        for strength in self.cfg.strengths() {
            info!(strength, "testing strength");
            let batch = self.sample_batch(strength, &mut rng)?;
            let tally = self.run_batch(strength, &batch, &sem).await?;
            info!(
                strength,
                pass = tally.pass,
                fail = tally.fail,
                "completed strength"
            );
            tallies.insert(strength, tally);
        }

        Ok(RunReport::summarize(tallies, seed))
    }

    /// Sample `samples_per_strength` distinct phrases without replacement.
    /// A corpus smaller than the sample size is a configuration
    /// precondition violation and fails loudly.
    fn sample_batch(&self, strength: i32, rng: &mut StdRng) -> Result<Vec<String>, RotbenchError> {
        let k = self.cfg.samples_per_strength;
        let available = self.corpus.len();
        if available < k {
            return Err(RotbenchError::CorpusTooSmall {
                strength,
                requested: k,
                available,
            });
        }
        Ok(self
            .corpus
            .phrases()
            .choose_multiple(rng, k)
            .cloned()
            .collect())
    }

    async fn run_batch(
        &self,
        strength: i32,
        phrases: &[String],
        sem: &Arc<Semaphore>,
    ) -> anyhow::Result<StrengthTally> {
        let mut join_set = JoinSet::new();
        for (index, phrase) in phrases.iter().enumerate() {
            let permit = sem.clone().acquire_owned().await?;
            let oracle = self.oracle.clone();
            let encoded = cipher::shift(phrase, strength);
            join_set.spawn(async move {
                let _permit = permit;
                let answer = oracle.decode(&encoded).await;
                (index, encoded, answer)
            });
        }

        // Slot answers by request index; completion order is irrelevant.
        let mut slots: Vec<Option<(String, Option<String>)>> = vec![None; phrases.len()];
        while let Some(res) = join_set.join_next().await {
            match res {
                Ok((index, encoded, answer)) => slots[index] = Some((encoded, answer)),
                Err(e) => error!(strength, error = %e, "decode task failed to join"),
            }
        }

        let mut tally = StrengthTally::default();
        for (index, (phrase, slot)) in phrases.iter().zip(slots).enumerate() {
            let (encoded, answer) = match slot {
                Some(v) => v,
                // A joined-with-error task still yields exactly one
                // outcome: a Fail with no answer.
                None => (cipher::shift(phrase, strength), None),
            };
            let outcome = score(phrase, answer.as_deref());
            tally.record(outcome);

            match (&answer, outcome) {
                (None, _) => error!(
                    strength,
                    phrase = %phrase_prefix(phrase),
                    "decode call failed (transport or non-success status)"
                ),
                (Some(got), Outcome::Fail) => {
                    error!(strength, phrase = %phrase_prefix(phrase), "test failed");
                    error!(original = %phrase, encoded = %encoded, answer = %got, "mismatch detail");
                }
                (Some(_), Outcome::Pass) => {
                    info!(strength, phrase = %phrase_prefix(phrase), "test passed");
                }
            }

            if let Some(sink) = &self.sink {
                sink(OutcomeEvent {
                    strength,
                    index,
                    outcome,
                    call_failed: answer.is_none(),
                });
            }
        }
        Ok(tally)
    }
}

/// Case-insensitive exact match; no fuzzy or partial credit. A missing
/// answer is always a Fail.
pub fn score(expected: &str, answer: Option<&str>) -> Outcome {
    match answer {
        Some(got) if got.to_lowercase() == expected.to_lowercase() => Outcome::Pass,
        _ => Outcome::Fail,
    }
}

fn phrase_prefix(phrase: &str) -> String {
    phrase.chars().take(20).collect()
}
