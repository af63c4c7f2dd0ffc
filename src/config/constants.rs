//! Application-wide constants
//!
//! Centralized location for magic values and client-facing messages.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database URL: a single SQLite file, created if absent
pub const DEFAULT_DATABASE_URL: &str = "sqlite://bikerental.db?mode=rwc";

/// Default size of the connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// Bike messages
// =============================================================================

pub const MSG_BIKE_ADDED: &str = "Bike added successfully.";
pub const MSG_BIKE_UPDATED: &str = "Bike updated successfully.";
pub const MSG_BIKE_DELETED: &str = "Bike deleted successfully.";
pub const MSG_BIKE_INVALID: &str = "Invalid input. Provide bike ID and model.";
pub const MSG_BIKE_UPDATE_INVALID: &str = "Invalid input. Provide bike model.";
pub const MSG_BIKE_EXISTS: &str = "Bike ID already exists.";
pub const MSG_BIKE_NOT_FOUND: &str = "Bike not found.";

// =============================================================================
// Customer messages
// =============================================================================

pub const MSG_CUSTOMER_ADDED: &str = "Customer added successfully.";
pub const MSG_CUSTOMER_UPDATED: &str = "Customer updated successfully.";
pub const MSG_CUSTOMER_DELETED: &str = "Customer deleted successfully.";
pub const MSG_CUSTOMER_INVALID: &str = "Invalid input. Provide customer ID, name, and contact.";
pub const MSG_CUSTOMER_UPDATE_INVALID: &str = "Invalid input. Provide customer name and contact.";
pub const MSG_CUSTOMER_EXISTS: &str = "Customer ID already exists.";
pub const MSG_CUSTOMER_NOT_FOUND: &str = "Customer not found.";

// =============================================================================
// Authentication messages
// =============================================================================

pub const MSG_AUTH_INVALID: &str = "Invalid input. Provide username and password.";
pub const MSG_USER_REGISTERED: &str = "User registered successfully.";
pub const MSG_USER_ALREADY_REGISTERED: &str = "User already registered. Logged in successfully.";
pub const MSG_LOGIN_SUCCESS: &str = "Login successful.";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const MSG_PASSWORD_MISMATCH: &str = "Username already registered with a different password.";
pub const MSG_USERNAME_EXISTS: &str = "Username already exists.";
