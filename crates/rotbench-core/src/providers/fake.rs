//! Scripted oracle for tests: pops canned generation results and routes
//! decode calls through a caller-supplied closure.

use super::Oracle;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

type DecodeFn = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

#[derive(Default)]
pub struct FakeOracle {
    generated: Mutex<VecDeque<Option<String>>>,
    decoder: Option<DecodeFn>,
}

impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue results for successive `generate_phrase` calls; `None` entries
    /// simulate failed generation requests. An exhausted queue yields `None`.
    pub fn with_generated(self, items: Vec<Option<String>>) -> Self {
        Self {
            generated: Mutex::new(items.into()),
            ..self
        }
    }

    pub fn with_decoder(
        self,
        f: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            decoder: Some(Box::new(f)),
            ..self
        }
    }
}

#[async_trait]
impl Oracle for FakeOracle {
    async fn generate_phrase(&self, _target_len: usize) -> Option<String> {
        self.generated
            .lock()
            .expect("fake oracle queue lock")
            .pop_front()
            .flatten()
    }

    async fn decode(&self, encoded: &str) -> Option<String> {
        self.decoder.as_ref().and_then(|f| f(encoded))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
