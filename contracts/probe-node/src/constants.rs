/// Base URI of the production deployment.
pub const DEPLOYMENT_BASE_URI: &str = "https://kdkcom1234.github.io";

/// Meta URI of the production deployment, appended to the base URI.
pub const DEPLOYMENT_META_URI: &str = "/uclid-probe-node-meta/probe-meta.json";

/// Minting fee of the production deployment, 0.001 CCD.
pub const DEPLOYMENT_MINTING_FEE_MICRO_CCD: u64 = 1_000;
