//! OpenAPI documentation.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Logopress API",
        version = "0.1.0",
        description = "Image branding service: uploads an image, applies resize/darken/text/logo transforms, and returns the public URL of the branded output."
    ),
    paths(handlers::process::process_image),
    components(schemas(
        handlers::process::ProcessResponse,
        error::ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "images", description = "Image branding endpoint")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
