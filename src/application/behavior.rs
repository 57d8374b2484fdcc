//! Attaches parameter validation to a service dispatcher

use crate::{
    application::inspector::ValidatingParameterInspector,
    config::app_config::ValidationConfig,
    domain::ObjectValidator,
    infrastructure::dispatch::ServiceDispatcher,
    shared::error::AppResult,
};
use std::sync::Arc;
use tracing::info;

/// Service-wide validation behavior
///
/// Applying the behavior installs one shared inspector in front of every
/// operation the dispatcher serves.
#[derive(Debug, Clone)]
pub struct ValidationBehavior {
    inspector: Arc<ValidatingParameterInspector>,
}

impl ValidationBehavior {
    pub fn new(inspector: Arc<ValidatingParameterInspector>) -> Self {
        Self { inspector }
    }

    /// Build the inspector with the generator selected by `config`
    pub fn from_config(config: &ValidationConfig, validators: Vec<Arc<dyn ObjectValidator>>) -> AppResult<Self> {
        let inspector = ValidatingParameterInspector::builder()
            .validators(validators)
            .message_generator(config.fault_format.generator())
            .build()?;
        Ok(Self::new(Arc::new(inspector)))
    }

    pub fn inspector(&self) -> &Arc<ValidatingParameterInspector> {
        &self.inspector
    }

    /// Install the inspector on `dispatcher`
    pub fn apply(&self, dispatcher: &mut ServiceDispatcher) {
        info!(
            validators = ?self.inspector.validators().names(),
            operations = dispatcher.operation_names().len(),
            "Attaching parameter validation"
        );
        dispatcher.add_inspector(self.inspector.clone());
    }
}
