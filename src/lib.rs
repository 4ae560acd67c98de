//! Floorplan Prompter - a floor-plan session language for fengshui prompts
//!
//! This library provides a parser, a headless floor-plan editor, and a
//! prompt generator. A session script places rooms, bedrooms, and family
//! members (or fills the directional grid), and the generated Chinese
//! analysis prompt is handed to the downstream fengshui skill.
//!
//! # Example
//!
//! ```rust
//! use floorplan_prompter::generate;
//!
//! let prompt = generate(
//!     "bedroom master-bedroom [x: 400, y: 100]\n\
//!      person father [x: 400, y: 100]",
//! )
//! .unwrap();
//! assert!(prompt.contains("- 父親：北"));
//! ```

pub mod analysis;
pub mod error;
pub mod parser;
pub mod plan;
pub mod prompt;
pub mod session;
pub mod toolbox;

pub use error::ParseError;
pub use parser::{parse, Document};
pub use plan::{CompassPoint, Direction, FloorPlan, PlanConfig};
pub use prompt::{PromptConfig, PromptError};
pub use session::{replay, Layout, Session, SessionError, Warning};
pub use toolbox::Toolbox;

use thiserror::Error;

/// Errors that can occur during the generate pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during session replay
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Error during prompt generation
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),
}

impl From<Vec<ParseError>> for GenerateError {
    fn from(errors: Vec<ParseError>) -> Self {
        GenerateError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete generate pipeline
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Floor-plan editor configuration
    pub plan: PlanConfig,
    /// Prompt output configuration
    pub prompt: PromptConfig,
    /// Item catalog for resolving script identifiers
    pub toolbox: Toolbox,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            plan: PlanConfig::default(),
            prompt: PromptConfig::default(),
            toolbox: Toolbox::default(),
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the floor-plan configuration
    pub fn with_plan(mut self, config: PlanConfig) -> Self {
        self.plan = config;
        self
    }

    /// Set the prompt configuration
    pub fn with_prompt(mut self, config: PromptConfig) -> Self {
        self.prompt = config;
        self
    }

    /// Set the toolbox catalog
    pub fn with_toolbox(mut self, toolbox: Toolbox) -> Self {
        self.toolbox = toolbox;
        self
    }
}

/// A generated prompt plus the warnings collected during replay
#[derive(Debug)]
pub struct Outcome {
    pub prompt: String,
    pub warnings: Vec<Warning>,
}

/// Generate the analysis prompt from session-script source with default
/// configuration. Replay warnings are discarded; use
/// [`generate_with_config`] to inspect them.
///
/// # Example
///
/// ```rust
/// use floorplan_prompter::generate;
///
/// let prompt = generate(
///     "bedroom master-bedroom [x: 400, y: 100]\n\
///      facility kitchen [x: 700, y: 300]\n\
///      person father [x: 400, y: 100]",
/// )
/// .unwrap();
/// assert!(prompt.contains("【家庭成員臥室位置】"));
/// assert!(prompt.contains("- 廚房：東"));
/// ```
pub fn generate(source: &str) -> Result<String, GenerateError> {
    generate_with_config(source, GenerateConfig::default()).map(|outcome| outcome.prompt)
}

/// Generate the analysis prompt with custom configuration
///
/// # Example
///
/// ```rust
/// use floorplan_prompter::{generate_with_config, GenerateConfig, PlanConfig};
///
/// let config = GenerateConfig::new().with_plan(PlanConfig::default().with_seed(7));
/// let outcome = generate_with_config("room living-room [x: 700, y: 300]", config).unwrap();
/// assert!(outcome.prompt.contains("- 客廳：東"));
/// assert!(outcome.warnings.is_empty());
/// ```
pub fn generate_with_config(
    source: &str,
    config: GenerateConfig,
) -> Result<Outcome, GenerateError> {
    let document = parse(source)?;
    let session = replay(&document, &config.toolbox, config.plan)?;
    let prompt = prompt::render(&session.layout, &config.prompt)?;
    Ok(Outcome {
        prompt,
        warnings: session.warnings,
    })
}

/// Replay session-script source into a layout, for analysis or inspection
pub fn replay_source(source: &str, config: &GenerateConfig) -> Result<Session, GenerateError> {
    let document = parse(source)?;
    Ok(replay(&document, &config.toolbox, config.plan.clone())?)
}
