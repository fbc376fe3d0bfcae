// =============================================================================
// Hygge Backend Constants
// =============================================================================
// This file contains all constants used throughout the backend to enable
// easy tuning and configuration from a single location.

// =============================================================================
// SERVER CONFIGURATION
// =============================================================================

/// Default port for the intent API server
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default path of the persisted session file
pub const DEFAULT_SESSION_FILE: &str = "hygge_session.json";

// =============================================================================
// PROFILE LIMITS
// =============================================================================

/// Maximum number of "cozy things" a profile may select
pub const MAX_COZY_THINGS: usize = 3;

/// Maximum number of photos on a profile
pub const MAX_PHOTOS: usize = 6;

/// Age a draft is coerced to when the field was cleared or invalid
pub const DEFAULT_MIN_AGE: u32 = 18;

/// Display name used when the edited name trims to empty
pub const DEFAULT_DISPLAY_NAME: &str = "User";

// =============================================================================
// MATCHING
// =============================================================================

/// A right-swipe becomes a match iff a uniform draw exceeds this threshold
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Denormalized last-message text placed on a freshly created match
pub const MATCH_NOTICE: &str = "It's a cozy match! Say hi.";

/// Sender id of generated messages
pub const SYSTEM_SENDER_ID: &str = "system";

/// Prefix wrapped around the generated icebreaker in the seed message
pub const SEED_MESSAGE_PREFIX: &str = "Hygge AI Suggestion";

// =============================================================================
// GENERATION API
// =============================================================================

/// Model used for icebreaker and date-idea generation
pub const GENERATION_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the generation REST API
pub const GENERATION_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Hard cap on a single generation request
pub const GENERATION_TIMEOUT_SECS: u64 = 10;

/// Interest named in the local icebreaker when the pair shares none
pub const FALLBACK_SHARED_INTEREST: &str = "cozy vibes";

/// Icebreaker used when the generation API errors out
pub const FALLBACK_ICEBREAKER: &str =
    "Hi! Your profile feels so warm and welcoming. How is your day going?";

/// Date idea used when no generation API is configured
pub const FALLBACK_DATE_IDEA_LOCAL: (&str, &str) = (
    "Coffee & Books",
    "Visit a local independent bookstore and grab a warm latte afterwards.",
);

/// Date idea used when the generation API errors or returns malformed output
pub const FALLBACK_DATE_IDEA_ERROR: (&str, &str) = (
    "A Walk in the Park",
    "Take a gentle stroll through the nearest park and watch the sunset.",
);
