pub mod error;
pub mod kimi;
pub mod minimax;

use std::sync::Arc;

use async_trait::async_trait;
use error::ModelError;

/// A chat completion provider.
///
/// Implementations turn a system instruction and a user prompt into free-form
/// text. Selection between providers happens through [`ProviderRegistry`], so
/// call sites never branch on provider names.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Selector used in requests, e.g. `kimi`.
    fn name(&self) -> &str;

    /// Label stored with generated answers, e.g. `Kimi`.
    fn display_name(&self) -> &str;

    async fn complete(
        &self,
        system_prompt: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, ModelError>;

    /// Answers `question` in this provider's persona, the way a typical user
    /// of its community would.
    async fn answer(&self, question: &str, temperature: f32) -> Result<String, ModelError>;
}

/// Providers in call order.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    models: Vec<Arc<dyn ChatModel>>,
}

impl ProviderRegistry {
    pub fn new(models: Vec<Arc<dyn ChatModel>>) -> Self {
        Self { models }
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn ChatModel>, ModelError> {
        self.models
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
            .cloned()
            .ok_or_else(|| ModelError::ModelNotFound(name.to_string(), self.names().join(", ")))
    }

    pub fn all(&self) -> &[Arc<dyn ChatModel>] {
        &self.models
    }

    pub fn names(&self) -> Vec<String> {
        self.models.iter().map(|m| m.name().to_string()).collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("models", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &'static str) -> Arc<dyn ChatModel> {
        let mut model = MockChatModel::new();
        model.expect_name().return_const(name.to_string());
        Arc::new(model)
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = ProviderRegistry::new(vec![named("kimi"), named("minimax")]);
        assert_eq!(registry.get("MiniMax").unwrap().name(), "minimax");
        assert_eq!(registry.get(" kimi ").unwrap().name(), "kimi");
    }

    #[test]
    fn test_unknown_provider() {
        let registry = ProviderRegistry::new(vec![named("kimi"), named("minimax")]);
        let err = registry.get("gpt").err().unwrap();
        assert!(matches!(err, ModelError::ModelNotFound(ref name, _) if name == "gpt"));
        assert_eq!(
            err.to_string(),
            "Model gpt not found, expected one of: kimi, minimax"
        );
    }
}
