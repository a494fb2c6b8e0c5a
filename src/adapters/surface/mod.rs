//! Surface adapters - Implementations of the GuideSurface port.

mod tracing_surface;

pub use tracing_surface::TracingSurface;
