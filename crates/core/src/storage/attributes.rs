//! DynamoDB attribute names of a kudo item.
//!
//! Shared by every writer of the kudos table so items stay readable by the
//! server.

/// Partition key attribute.
pub const USER: &str = "User";
/// Contribution time as a number of epoch seconds.
pub const TIME: &str = "Time";
pub const CONTRIBUTION_TYPE: &str = "ContributionType";
pub const CONTRIBUTION_URL: &str = "ContributionURL";
pub const CONTRIBUTION_NAME: &str = "ContributionName";
