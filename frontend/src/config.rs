use crate::theme::Variant;

/// Base URL of the backend. Empty means same origin, which is how the backend
/// serves the built page.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

/// Visual variant baked in at build time through `DMCLOSER_VARIANT`.
pub fn get_variant() -> Variant {
    option_env!("DMCLOSER_VARIANT")
        .and_then(Variant::from_name)
        .unwrap_or_default()
}
