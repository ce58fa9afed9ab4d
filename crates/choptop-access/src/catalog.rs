//! Role, city, and permission catalog for the access-scope editor.
//!
//! Using these constants instead of string literals keeps the editor, the
//! default seed, and the tests in agreement. The scope store itself accepts
//! any key; the catalog only lists what the console offers.

/// City key holding a role's global (default) scope.
pub const GLOBAL_CITY: &str = "All";

// =============================================================================
// Roles
// =============================================================================

pub const ROLE_SUPER_ADMIN: &str = "Super Admin";
pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_FINANCE: &str = "Finance";
pub const ROLE_SUPPORT: &str = "Support";
pub const ROLE_ORGANIZER: &str = "Organizer";
pub const ROLE_READ_ONLY: &str = "Read-only";

pub const ROLES: &[&str] = &[
    ROLE_SUPER_ADMIN,
    ROLE_ADMIN,
    ROLE_FINANCE,
    ROLE_SUPPORT,
    ROLE_ORGANIZER,
    ROLE_READ_ONLY,
];

// =============================================================================
// Cities
// =============================================================================

pub const CITIES: &[&str] = &[GLOBAL_CITY, "Kampala", "Nairobi", "Entebbe", "Mombasa"];

// =============================================================================
// Events permissions
// =============================================================================

/// Permission to view events
pub const EVENTS_READ: &str = "events.read";
/// Permission to create and edit events
pub const EVENTS_WRITE: &str = "events.write";

// =============================================================================
// Orders permissions
// =============================================================================

/// Permission to view orders
pub const ORDERS_READ: &str = "orders.read";
/// Permission to refund orders
pub const ORDERS_REFUND: &str = "orders.refund";

// =============================================================================
// Payouts permissions
// =============================================================================

/// Permission to view payouts
pub const PAYOUTS_VIEW: &str = "payouts.view";
/// Permission to execute payouts
pub const PAYOUTS_EXECUTE: &str = "payouts.execute";

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to view users
pub const USERS_READ: &str = "users.read";
/// Permission to block users
pub const USERS_BLOCK: &str = "users.block";

// =============================================================================
// Risk flags permissions
// =============================================================================

/// Permission to view the flag review queue
pub const FLAGS_QUEUE: &str = "flags.queue";
/// Permission to act on flagged items
pub const FLAGS_ACTION: &str = "flags.action";

// =============================================================================
// Content & marketing permissions
// =============================================================================

/// Permission to publish CMS content
pub const CMS_PUBLISH: &str = "cms.publish";
/// Permission to activate marketing journeys
pub const JOURNEYS_ACTIVATE: &str = "journeys.activate";

pub const PERMISSIONS: &[&str] = &[
    EVENTS_READ,
    EVENTS_WRITE,
    ORDERS_READ,
    ORDERS_REFUND,
    PAYOUTS_VIEW,
    PAYOUTS_EXECUTE,
    USERS_READ,
    USERS_BLOCK,
    FLAGS_QUEUE,
    FLAGS_ACTION,
    CMS_PUBLISH,
    JOURNEYS_ACTIVATE,
];

/// Global grants seeded for the Admin role at start-up.
pub const DEFAULT_ADMIN_SCOPES: &[&str] = &[EVENTS_READ, ORDERS_READ, PAYOUTS_VIEW, CMS_PUBLISH];
