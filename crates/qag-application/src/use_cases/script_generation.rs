//! Grounded Script Generation Use Case
//!
//! Loads the session's page markup, extracts the selector inventory and asks
//! the generative model for a Selenium script restricted to that inventory.

use crate::domain_services::{
    SCRIPT_SYSTEM_PROMPT, build_script_prompt, find_unknown_selectors, strip_code_fences,
};
use crate::ports::providers::{GenerativeProvider, GroundingExtractor, MarkupRepository};
use crate::ports::services::{ScriptOutcome, ScriptServiceInterface};
use crate::use_cases::with_deadline;
use qag_domain::entities::{ElementInventory, TestCase};
use qag_domain::error::Result;
use qag_domain::value_objects::SessionId;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Tunables of the script generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSettings {
    /// Deadline for the generative call
    pub generate_timeout: Duration,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            generate_timeout: Duration::from_secs(60),
        }
    }
}

/// Markup gathered for one session
struct SessionGrounding {
    inventory: ElementInventory,
    markup: String,
}

/// Selenium script generator grounded in stored page markup
pub struct ScriptServiceImpl {
    markup_repository: Arc<dyn MarkupRepository>,
    grounding_extractor: Arc<dyn GroundingExtractor>,
    generative_provider: Arc<dyn GenerativeProvider>,
    settings: ScriptSettings,
}

impl ScriptServiceImpl {
    /// Create a generator with injected collaborators
    pub fn new(
        markup_repository: Arc<dyn MarkupRepository>,
        grounding_extractor: Arc<dyn GroundingExtractor>,
        generative_provider: Arc<dyn GenerativeProvider>,
        settings: ScriptSettings,
    ) -> Self {
        Self {
            markup_repository,
            grounding_extractor,
            generative_provider,
            settings,
        }
    }

    /// Merge the inventories and markup of every page stored for a session
    async fn load_grounding(&self, session: &SessionId) -> Result<Option<SessionGrounding>> {
        let pages = self.markup_repository.load(session).await?;
        if pages.is_empty() {
            return Ok(None);
        }

        let mut inventory = ElementInventory::default();
        let mut markup = String::new();
        for page in pages {
            inventory.extend(self.grounding_extractor.extract(&page.markup));
            if !markup.is_empty() {
                markup.push_str("\n\n");
            }
            let _ = write!(markup, "<!-- {} -->\n{}", page.source, page.markup);
        }
        Ok(Some(SessionGrounding { inventory, markup }))
    }
}

#[async_trait::async_trait]
impl ScriptServiceInterface for ScriptServiceImpl {
    async fn generate_script(
        &self,
        test_case: &TestCase,
        session: &SessionId,
    ) -> Result<ScriptOutcome> {
        let Some(grounding) = self.load_grounding(session).await? else {
            warn!(session_id = %session, "No page markup for session");
            return Ok(ScriptOutcome::NoGrounding {
                error: format!("No page markup has been ingested for session '{session}'."),
            });
        };

        let user_prompt = build_script_prompt(test_case, &grounding.inventory, &grounding.markup)?;
        let raw_response = with_deadline(
            "script generation",
            self.settings.generate_timeout,
            self.generative_provider
                .generate(SCRIPT_SYSTEM_PROMPT, &user_prompt),
        )
        .await?;

        let script = strip_code_fences(&raw_response);
        let unknown_selectors = find_unknown_selectors(&script, &grounding.inventory);
        if !unknown_selectors.is_empty() {
            warn!(
                session_id = %session,
                test_id = %test_case.test_id,
                unknown = ?unknown_selectors,
                "Script references selectors absent from the page"
            );
        }
        info!(session_id = %session, test_id = %test_case.test_id, "Script generated");

        Ok(ScriptOutcome::Generated {
            script,
            inventory: grounding.inventory,
            unknown_selectors,
        })
    }

    async fn inventory(&self, session: &SessionId) -> Result<Option<ElementInventory>> {
        Ok(self
            .load_grounding(session)
            .await?
            .map(|grounding| grounding.inventory))
    }
}
