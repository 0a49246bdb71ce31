/// the entity cannot be deleted because other records reference it
pub const ENTITY_REFERENCED: &str = "ENTITY_REFERENCED";

/// generic sign in failure, deliberately the same for unknown usernames
/// and wrong passwords so accounts cannot be enumerated
pub const INVALID_CREDENTIALS: &str = "invalid credentials";
