use thiserror::Error;

/// Convenient result alias for the apsopt library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a body module identifier could not be found in the catalog.
    #[error("unknown body module: {name}{}", format_suggestions(.suggestions))]
    UnknownModule {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a head identifier could not be found in the catalog.
    #[error("unknown head: {name}{}", format_suggestions(.suggestions))]
    UnknownHead {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a part definition fails validation.
    #[error("invalid part definition: {message}")]
    PartValidation { message: String },

    /// Raised when duplicate part identifiers are encountered during catalog load.
    #[error("duplicate part identifier encountered: {name}")]
    DuplicatePartName { name: String },

    /// Raised when a gauge falls outside the supported range.
    #[error("gauge {gauge} mm is outside the supported 18-500 mm range")]
    GaugeOutOfRange { gauge: u32 },

    /// Raised when a casing count is negative or not a number.
    #[error("invalid casing count: {message}")]
    InvalidCasingCount { message: String },

    /// Raised when an assembly occupies more loader slots than exist.
    #[error("assembly occupies {used:.2} slots but only {budget} are available")]
    SlotBudgetExceeded { used: f64, budget: u32 },

    /// Raised when a search configuration fails validation.
    #[error("invalid search configuration: {message}")]
    SearchConfig { message: String },

    /// Raised when a statistic requiring body modules is evaluated on a bare shell.
    #[error("assembly has no body modules; at least one is required")]
    EmptyBody,

    /// Raised when the velocity radicand goes negative.
    #[error("velocity radicand is negative ({value})")]
    NegativeRadicand { value: f64 },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
