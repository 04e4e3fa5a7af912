//! Durable phrase corpus.
//!
//! Stored as a line-oriented UTF-8 file, one phrase per line. A missing
//! file is an empty corpus, not an error. Growth events rewrite the whole
//! file so the on-disk state always matches memory after null-filtering.

use crate::errors::RotbenchError;
use crate::providers::Oracle;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    phrases: Vec<String>,
}

impl Corpus {
    pub fn from_phrases(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self, RotbenchError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(RotbenchError::CorpusIo {
                    action: "read",
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        let phrases = raw
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        Ok(Self { phrases })
    }

    /// Full overwrite, one phrase per line.
    pub fn persist(&self, path: &Path) -> Result<(), RotbenchError> {
        let mut out = String::new();
        for p in &self.phrases {
            out.push_str(p);
            out.push('\n');
        }
        std::fs::write(path, out).map_err(|e| RotbenchError::CorpusIo {
            action: "write",
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load the corpus at `path` and, if it holds fewer than `min_size`
    /// phrases, fill the deficit with one concurrent generation request per
    /// missing phrase. Failed generations are dropped, not retried; a
    /// still-short corpus is a warning, never a fatal error, because the
    /// run can proceed at reduced scale.
    pub async fn ensure(
        path: &Path,
        oracle: Arc<dyn Oracle>,
        min_size: usize,
        target_len: usize,
    ) -> Result<Self, RotbenchError> {
        let mut corpus = Self::load(path)?;
        if corpus.len() >= min_size {
            info!(size = corpus.len(), "loaded corpus from file");
            return Ok(corpus);
        }

        let deficit = min_size - corpus.len();
        info!(
            have = corpus.len(),
            deficit, "corpus below minimum, generating phrases"
        );

        let mut join_set = JoinSet::new();
        for _ in 0..deficit {
            let oracle = oracle.clone();
            join_set.spawn(async move { oracle.generate_phrase(target_len).await });
        }

        let mut generated = Vec::new();
        while let Some(res) = join_set.join_next().await {
            match res {
                Ok(Some(phrase)) => {
                    // Phrases are stored one per line, so flatten any
                    // stray newlines from the model.
                    let phrase = phrase.replace('\n', " ").trim().to_string();
                    if !phrase.is_empty() {
                        generated.push(phrase);
                    }
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "generation task failed"),
            }
        }

        let added = generated.len();
        corpus.phrases.extend(generated);
        corpus.persist(path)?;

        if corpus.len() < min_size {
            warn!(
                have = corpus.len(),
                want = min_size,
                "corpus still below minimum after generation; continuing at reduced scale"
            );
        } else {
            info!(added, total = corpus.len(), "corpus filled and persisted");
        }
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::Corpus;
    use crate::providers::fake::FakeOracle;
    use std::sync::Arc;

    #[test]
    fn missing_file_is_an_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = Corpus::load(&dir.path().join("nope.txt")).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phrases.txt");
        let corpus = Corpus::from_phrases(vec!["one fine day".into(), "two for tea".into()]);
        corpus.persist(&path).unwrap();
        let loaded = Corpus::load(&path).unwrap();
        assert_eq!(loaded.phrases(), corpus.phrases());
    }

    #[tokio::test]
    async fn ensure_fills_deficit_and_filters_failed_generations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phrases.txt");
        let oracle = Arc::new(FakeOracle::new().with_generated(vec![
            Some("the waves crashed against the beach".into()),
            None,
            Some("a lantern flickered in the old barn".into()),
            Some("rain fell softly on the tin roof".into()),
            None,
        ]));

        let corpus = Corpus::ensure(&path, oracle, 5, 50).await.unwrap();

        // Three survivors out of five requests; no error for the shortfall.
        assert_eq!(corpus.len(), 3);
        let persisted = Corpus::load(&path).unwrap();
        assert_eq!(persisted.phrases(), corpus.phrases());
    }

    #[tokio::test]
    async fn ensure_skips_generation_when_corpus_is_sufficient() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phrases.txt");
        Corpus::from_phrases(vec!["a".into(), "b".into(), "c".into()])
            .persist(&path)
            .unwrap();

        // Empty queue: any generate call would come back None and shrink
        // nothing, but it must not even be needed.
        let oracle = Arc::new(FakeOracle::new());
        let corpus = Corpus::ensure(&path, oracle, 3, 50).await.unwrap();
        assert_eq!(corpus.len(), 3);
    }
}
