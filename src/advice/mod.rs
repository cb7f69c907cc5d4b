//! Recommendation Engine
//!
//! Rule-based advice is always available. An optional provider may replace
//! it; any provider failure falls back to the rule-based list.

mod provider;
mod ranking;
mod rules;

pub use provider::{AdviceProvider, AdviceRequest, OpenAiCompatibleProvider};
pub use ranking::{rank_categories, top_category};
pub use rules::{AdviceThresholds, RuleBasedAdvisor, FALLBACK_ADVICE};

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::accounting::Footprint;
use crate::error::ProviderFailure;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(12);

/// Advice for one footprint and where it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub items: Vec<String>,
    pub ai_generated: bool,
}

pub struct RecommendationEngine {
    rules: RuleBasedAdvisor,
    provider: Option<Arc<dyn AdviceProvider>>,
    timeout: Duration,
}

impl RecommendationEngine {
    /// Rule-based advice only
    pub fn rule_based(rules: RuleBasedAdvisor) -> Self {
        Self {
            rules,
            provider: None,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn AdviceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn rules(&self) -> &RuleBasedAdvisor {
        &self.rules
    }

    /// Advice for a footprint. Never fails and never returns an empty list.
    pub async fn recommend(&self, footprint: &Footprint) -> Recommendations {
        let fallback = || Recommendations {
            items: self.rules.recommend(&footprint.breakdown, footprint.total),
            ai_generated: false,
        };

        let Some(provider) = &self.provider else {
            return fallback();
        };

        let request = AdviceRequest {
            breakdown: footprint.breakdown,
            total: footprint.total,
        };

        match self.ask_provider(provider.as_ref(), &request).await {
            Ok(items) => {
                info!("Using {} provider recommendation(s)", items.len());
                Recommendations {
                    items,
                    ai_generated: true,
                }
            }
            Err(failure) => {
                warn!("{}; falling back to rule-based advice", failure);
                fallback()
            }
        }
    }

    async fn ask_provider(
        &self,
        provider: &dyn AdviceProvider,
        request: &AdviceRequest,
    ) -> Result<Vec<String>, ProviderFailure> {
        let items = tokio::time::timeout(self.timeout, provider.generate(request))
            .await
            .map_err(|_| ProviderFailure::Timeout(self.timeout))?
            .map_err(ProviderFailure::Request)?;

        let items: Vec<String> = items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();

        if items.is_empty() {
            return Err(ProviderFailure::Malformed);
        }
        Ok(items)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::rule_based(RuleBasedAdvisor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::Breakdown;
    use crate::factors::Category;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedProvider {
        replies: Mutex<VecDeque<anyhow::Result<Vec<String>>>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<anyhow::Result<Vec<String>>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
            })
        }
    }

    #[async_trait]
    impl AdviceProvider for ScriptedProvider {
        async fn generate(&self, _request: &AdviceRequest) -> anyhow::Result<Vec<String>> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(vec!["Default advice".to_string()]))
        }
    }

    struct StalledProvider;

    #[async_trait]
    impl AdviceProvider for StalledProvider {
        async fn generate(&self, _request: &AdviceRequest) -> anyhow::Result<Vec<String>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(vec!["Too late".to_string()])
        }
    }

    fn footprint() -> Footprint {
        Footprint {
            total: 2101.4,
            breakdown: Breakdown::default()
                .with(Category::Energy, 1740.0)
                .with(Category::Food, 374.4)
                .with(Category::Waste, -13.0),
        }
    }

    #[tokio::test]
    async fn test_rule_based_by_default() {
        let engine = RecommendationEngine::default();
        let recs = engine.recommend(&footprint()).await;
        assert!(!recs.ai_generated);
        assert_eq!(recs.items.len(), 3);
    }

    #[tokio::test]
    async fn test_provider_advice_used() {
        let provider = ScriptedProvider::new(vec![Ok(vec![
            "Cut AC use".to_string(),
            "  ".to_string(),
        ])]);
        let engine = RecommendationEngine::default().with_provider(provider);
        let recs = engine.recommend(&footprint()).await;
        assert!(recs.ai_generated);
        assert_eq!(recs.items, vec!["Cut AC use".to_string()]);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let provider = ScriptedProvider::new(vec![Err(anyhow::anyhow!("503 Service Unavailable"))]);
        let engine = RecommendationEngine::default().with_provider(provider);
        let recs = engine.recommend(&footprint()).await;

        let expected = RuleBasedAdvisor::default().recommend(&footprint().breakdown, 2101.4);
        assert!(!recs.ai_generated);
        assert_eq!(recs.items, expected);
    }

    #[tokio::test]
    async fn test_empty_provider_reply_falls_back() {
        let provider = ScriptedProvider::new(vec![Ok(vec![])]);
        let engine = RecommendationEngine::default().with_provider(provider);
        assert!(!engine.recommend(&footprint()).await.ai_generated);
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_timeout_falls_back() {
        let engine = RecommendationEngine::default()
            .with_provider(Arc::new(StalledProvider))
            .with_timeout(Duration::from_secs(5));
        let recs = engine.recommend(&footprint()).await;

        let expected = RuleBasedAdvisor::default().recommend(&footprint().breakdown, 2101.4);
        assert!(!recs.ai_generated);
        assert_eq!(recs.items, expected);
    }
}
