//! Facade crate for the CURP analyzer.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Depend on `curp` with `server` for the HTTP service, or without features for the
//!   analysis core only.
//! - Call `curp::init` (server) to build the feature slices for `ApiState`.

pub use curp_domain as domain;
pub use curp_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use curp_analysis::api::router as analysis_router;
        pub use curp_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use curp_analysis as analysis;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "analysis",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init() -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>>
{
    let slices = vec![features::analysis::init()?];

    Ok(slices)
}
