//! Evaluation configuration.
//!
//! Defaults reproduce the canonical run: strengths 1..=15, 10 samples per
//! strength, a 100-phrase corpus of ~50-character phrases. A YAML file can
//! override any field; the CLI layers its flags on top of that.

use crate::errors::RotbenchError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Model identifier for both oracle capabilities.
    pub model: String,
    /// Line-oriented corpus file, one phrase per line.
    pub corpus_path: PathBuf,
    /// Minimum corpus size; the deficit is generated at startup.
    pub min_corpus: usize,
    /// Approximate character length requested for generated phrases.
    pub phrase_len: usize,
    pub min_strength: i32,
    pub max_strength: i32,
    /// Phrases sampled (without replacement) per strength.
    pub samples_per_strength: usize,
    /// Cap on concurrent in-flight oracle calls within a batch.
    pub parallel: usize,
    pub decode_max_tokens: u32,
    pub generate_max_tokens: u32,
    /// Sampling seed. When absent, one is generated and logged so the run
    /// can be reproduced.
    pub seed: Option<u64>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-5-sonnet-20240620".to_string(),
            corpus_path: PathBuf::from("test_phrases.txt"),
            min_corpus: 100,
            phrase_len: 50,
            min_strength: 1,
            max_strength: 15,
            samples_per_strength: 10,
            parallel: 10,
            decode_max_tokens: 300,
            generate_max_tokens: 100,
            seed: None,
        }
    }
}

impl EvalConfig {
    pub fn load(path: &Path) -> Result<Self, RotbenchError> {
        let raw = std::fs::read_to_string(path).map_err(|e| RotbenchError::ConfigIo {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_yaml::from_str(&raw).map_err(|e| RotbenchError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Ordered sequence of strengths for one evaluation pass.
    pub fn strengths(&self) -> RangeInclusive<i32> {
        self.min_strength..=self.max_strength
    }
}

#[cfg(test)]
mod tests {
    use super::EvalConfig;

    #[test]
    fn defaults_match_canonical_run() {
        let cfg = EvalConfig::default();
        assert_eq!(cfg.strengths().collect::<Vec<_>>().len(), 15);
        assert_eq!(cfg.samples_per_strength, 10);
        assert_eq!(cfg.min_corpus, 100);
        assert_eq!(cfg.phrase_len, 50);
    }

    #[test]
    fn yaml_overrides_defaults_and_rejects_unknown_fields() {
        let cfg: EvalConfig =
            serde_yaml::from_str("min_strength: 3\nmax_strength: 5\nparallel: 2\n").unwrap();
        assert_eq!(cfg.strengths().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(cfg.parallel, 2);
        assert_eq!(cfg.model, EvalConfig::default().model);

        let err = serde_yaml::from_str::<EvalConfig>("shift_count: 9\n");
        assert!(err.is_err());
    }
}
