use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{controller, state::AppState},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::auth::signup,
        controller::auth::login,
        controller::category::get_categories,
        controller::product::get_products,
        controller::product::get_product,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::auth::LoginDto,
        model::auth::SignupDto,
        model::auth::TokenDto,
        model::catalog::CategoryDto,
        model::media::MediaDto,
        model::product::ProductDetailDto,
        model::product::ProductDto,
        model::product::VariantDto,
        model::user::UserDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // auth
        .route("/api/auth/signup", post(controller::auth::signup))
        .route("/api/auth/login", post(controller::auth::login))
        .route("/api/auth/check-code", post(controller::auth::check_code))
        .route("/api/auth/retry-active", post(controller::auth::retry_active))
        .route(
            "/api/auth/retry-password",
            post(controller::auth::retry_password),
        )
        .route(
            "/api/auth/change-password",
            post(controller::auth::change_password),
        )
        .route("/api/auth/profile", get(controller::auth::profile))
        // users (admin)
        .route("/api/users", get(controller::user::get_users))
        .route(
            "/api/users/{id}",
            get(controller::user::get_user)
                .patch(controller::user::update_user)
                .delete(controller::user::delete_user),
        )
        // addresses
        .route(
            "/api/address",
            get(controller::address::get_addresses).post(controller::address::create_address),
        )
        .route(
            "/api/address/{id}",
            get(controller::address::get_address)
                .patch(controller::address::update_address)
                .delete(controller::address::delete_address),
        )
        // catalog
        .route(
            "/api/category",
            get(controller::category::get_categories).post(controller::category::create_category),
        )
        .route(
            "/api/category/{id}",
            get(controller::category::get_category)
                .patch(controller::category::update_category)
                .delete(controller::category::delete_category),
        )
        .route(
            "/api/color",
            get(controller::color::get_colors).post(controller::color::create_color),
        )
        .route(
            "/api/color/{id}",
            get(controller::color::get_color)
                .patch(controller::color::update_color)
                .delete(controller::color::delete_color),
        )
        // products, variants, media
        .route(
            "/api/products",
            get(controller::product::get_products).post(controller::product::create_product),
        )
        .route(
            "/api/products/{id}",
            get(controller::product::get_product)
                .patch(controller::product::update_product)
                .delete(controller::product::delete_product),
        )
        .route(
            "/api/products/{id}/variants",
            get(controller::product::get_variants).post(controller::product::create_variant),
        )
        .route(
            "/api/products/{id}/variants/{variant_id}",
            patch(controller::product::update_variant)
                .delete(controller::product::delete_variant),
        )
        .route(
            "/api/products/{id}/variants/{variant_id}/media",
            get(controller::product::get_variant_media)
                .post(controller::product::create_variant_media),
        )
        // cart
        .route(
            "/api/cart",
            get(controller::cart::get_cart).delete(controller::cart::clear_cart),
        )
        .route("/api/cart-items", post(controller::cart::add_cart_item))
        .route(
            "/api/cart-items/{id}",
            patch(controller::cart::update_cart_item).delete(controller::cart::delete_cart_item),
        )
        // orders
        .route(
            "/api/orders",
            get(controller::order::get_orders).post(controller::order::create_order),
        )
        .route("/api/orders/{id}", get(controller::order::get_order))
        .route(
            "/api/orders/{id}/status",
            patch(controller::order::update_order_status),
        )
        .route("/api/orders/{id}/cancel", post(controller::order::cancel_order))
        .route(
            "/api/orders/{id}/shipments",
            get(controller::shipment::get_order_shipments),
        )
        // vouchers
        .route(
            "/api/vouchers",
            get(controller::voucher::get_vouchers).post(controller::voucher::create_voucher),
        )
        .route(
            "/api/vouchers/{id}",
            get(controller::voucher::get_voucher)
                .patch(controller::voucher::update_voucher)
                .delete(controller::voucher::delete_voucher),
        )
        .route(
            "/api/vouchers/{id}/variants",
            post(controller::voucher::attach_voucher_variants)
                .delete(controller::voucher::detach_voucher_variants),
        )
        .route(
            "/api/user-vouchers",
            get(controller::user_voucher::get_user_vouchers)
                .post(controller::user_voucher::claim_voucher),
        )
        // shipments and carrier master data
        .route("/api/shipments", post(controller::shipment::dispatch_order))
        .route(
            "/api/shipments/preview",
            post(controller::shipment::preview_order),
        )
        .route(
            "/api/shipments/{id}/track",
            get(controller::shipment::track_shipment),
        )
        .route(
            "/api/shipments/{id}/cancel",
            post(controller::shipment::cancel_shipment),
        )
        .route(
            "/api/shipments/provinces",
            get(controller::shipment::get_provinces),
        )
        .route(
            "/api/shipments/provinces/{province_id}/districts",
            get(controller::shipment::get_districts),
        )
        .route(
            "/api/shipments/districts/{district_id}/wards",
            get(controller::shipment::get_wards),
        )
        // reviews
        .route(
            "/api/reviews",
            get(controller::review::get_reviews).post(controller::review::create_review),
        )
        .route(
            "/api/reviews/{id}",
            get(controller::review::get_review)
                .patch(controller::review::update_review)
                .delete(controller::review::delete_review),
        )
        // size profiles
        .route(
            "/api/size-profiles",
            get(controller::size_profile::get_size_profiles)
                .post(controller::size_profile::create_size_profile),
        )
        .route(
            "/api/size-profiles/{id}",
            get(controller::size_profile::get_size_profile)
                .patch(controller::size_profile::update_size_profile)
                .delete(controller::size_profile::delete_size_profile),
        )
        // return requests
        .route(
            "/api/return-requests",
            get(controller::return_request::get_return_requests)
                .post(controller::return_request::create_return_request),
        )
        .route(
            "/api/return-requests/{id}",
            get(controller::return_request::get_return_request)
                .patch(controller::return_request::update_return_request)
                .delete(controller::return_request::delete_return_request),
        )
        // shops
        .route(
            "/api/shops",
            get(controller::shop::get_shops).post(controller::shop::create_shop),
        )
        .route(
            "/api/shops/{id}",
            get(controller::shop::get_shop)
                .patch(controller::shop::update_shop)
                .delete(controller::shop::delete_shop),
        )
        // shop offices
        .route(
            "/api/shop-offices",
            get(controller::shop_office::get_shop_offices)
                .post(controller::shop_office::create_shop_office),
        )
        .route(
            "/api/shop-offices/{id}",
            get(controller::shop_office::get_shop_office)
                .patch(controller::shop_office::update_shop_office)
                .delete(controller::shop_office::delete_shop_office),
        )
}

/// Swagger UI serving the generated OpenAPI document.
pub fn swagger() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
