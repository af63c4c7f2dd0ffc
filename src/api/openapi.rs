//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, bike_handler, customer_handler};
use crate::domain::{Bike, Customer};
use crate::types::MessageResponse;

/// OpenAPI documentation for the bike rental API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bike Rental API",
        version = "0.1.0",
        description = "Bikes, customers and user accounts over an embedded SQLite database",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://127.0.0.1:5000", description = "Local development server")
    ),
    paths(
        // Bike endpoints
        bike_handler::create_bike,
        bike_handler::list_bikes,
        bike_handler::update_bike,
        bike_handler::delete_bike,
        // Customer endpoints
        customer_handler::create_customer,
        customer_handler::list_customers,
        customer_handler::update_customer,
        customer_handler::delete_customer,
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
    ),
    components(
        schemas(
            Bike,
            Customer,
            MessageResponse,
            bike_handler::CreateBikeRequest,
            bike_handler::UpdateBikeRequest,
            bike_handler::BikeCreatedResponse,
            customer_handler::CreateCustomerRequest,
            customer_handler::UpdateCustomerRequest,
            customer_handler::CustomerCreatedResponse,
            auth_handler::CredentialsRequest,
        )
    ),
    tags(
        (name = "Bikes", description = "Bike inventory"),
        (name = "Customers", description = "Customer profiles"),
        (name = "Authentication", description = "User registration and login")
    )
)]
pub struct ApiDoc;
