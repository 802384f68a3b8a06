use crate::types::HealthRes;

/// Simple health service shared by the REST API and the CLI.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Reports the service as alive.
    ///
    /// This does not touch the document store: a failing store shows up as 500s on the data
    /// endpoints, not here.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Menu API is alive".into(),
        }
    }
}
