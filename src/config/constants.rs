//! Application-wide constants
//!
//! Centralized location for default values.

// =============================================================================
// Navigation
// =============================================================================

/// Default number of pages shown on each side of the current page
pub const DEFAULT_ADJACENT: u32 = 3;

/// Default number of pages pinned at the start and end
pub const DEFAULT_CAPS: u32 = 1;

/// Default query parameter carrying the page number
pub const DEFAULT_PAGE_VAR: &str = "page";

/// Default template name handed to the rendering collaborator
pub const DEFAULT_TEMPLATE: &str = "paginav.html";

/// URL returned when there is neither a base URL nor a query string
pub const SAME_PAGE_URL: &str = ".";

/// Character in a base URL that marks where the page number goes
pub const PAGE_PLACEHOLDER: char = '1';

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
