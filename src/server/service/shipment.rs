use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection};

use crate::{
    model::shipment::{PackagePreviewDto, ShipmentDto, TrackShipmentDto},
    server::{
        carrier::{
            build_packages, CarrierClient, CreateOrderItem, CreateOrderRequest, FeeRequest,
            Package, PackageItem,
        },
        data::{crud::CrudRepository, order::OrderRepository},
        error::AppError,
        service::crud::CrudService,
    },
};

/// Builds one carrier shipment per shop contributing to an order.
///
/// There is deliberately no compensation across shops: if creating the
/// package for shop N fails, the shipments already created for earlier
/// shops stay in place and the error names the failing shop.
pub struct ShipmentService<'a> {
    db: &'a DatabaseConnection,
    carrier: &'a CarrierClient,
}

impl<'a> ShipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, carrier: &'a CarrierClient) -> Self {
        Self { db, carrier }
    }

    fn crud(&self) -> CrudService<'a, entity::prelude::Shipments> {
        CrudService::new(self.db, "shipment")
    }

    /// Groups the order's lines by shop and creates one carrier order per
    /// package: fee lookup first, then order creation, then the local
    /// shipment row.
    pub async fn dispatch_order(&self, order_id: i32) -> Result<Vec<ShipmentDto>, AppError> {
        let (order, address, packages) = self.load_packages(order_id).await?;

        tracing::info!(
            "Dispatching order {} as {} package(s)",
            order.id,
            packages.len()
        );

        let mut shipments = Vec::with_capacity(packages.len());
        for package in &packages {
            let shipment = self
                .dispatch_package(&order, &address, package)
                .await
                .map_err(|err| {
                    tracing::error!(
                        "Package for shop {} of order {} failed: {}",
                        package.shop_id,
                        order.id,
                        err
                    );
                    err
                })?;
            shipments.push(shipment);
        }

        Ok(shipments)
    }

    /// Same grouping as `dispatch_order`, but asks the carrier for a
    /// preview of each package instead of creating orders; nothing is
    /// persisted.
    pub async fn preview_order(&self, order_id: i32) -> Result<Vec<PackagePreviewDto>, AppError> {
        let (_order, address, packages) = self.load_packages(order_id).await?;

        let mut previews = Vec::with_capacity(packages.len());
        for package in &packages {
            let (office, request) = self.package_request(&address, package).await?;
            let previewed = self.carrier.preview_order(&request).await?;

            previews.push(PackagePreviewDto {
                shop_id: package.shop_id,
                from_office_id: office.id,
                weight_grams: package.weight_grams,
                fee_amount: previewed.total_fee,
                expected_delivery: previewed.expected_delivery_time,
            });
        }

        Ok(previews)
    }

    /// Loads the order, its delivery address and the per-shop packages.
    async fn load_packages(
        &self,
        order_id: i32,
    ) -> Result<
        (
            entity::orders::Model,
            entity::addresses::Model,
            Vec<Package>,
        ),
        AppError,
    > {
        let order_repo = OrderRepository::new(self.db);

        let Some((order, items)) = order_repo.find_with_items(order_id).await? else {
            return Err(AppError::NotFound(format!("order {order_id} not found")));
        };

        if items.is_empty() {
            return Err(AppError::BadRequest("Order has no items".to_string()));
        }

        let address = CrudRepository::<entity::prelude::Addresses>::new(self.db)
            .find_by_id(order.address_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Order {} has no delivery address", order.id))
            })?;

        // Annotate every line with its shop and physical dimensions.
        let mut package_items = Vec::with_capacity(items.len());
        for item in &items {
            let variant = CrudRepository::<entity::prelude::ProductVariants>::new(self.db)
                .find_by_id(item.variant_id)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Order line references missing variant {}",
                        item.variant_id
                    ))
                })?;

            let product = CrudRepository::<entity::prelude::Products>::new(self.db)
                .find_by_id(variant.product_id)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Variant {} references missing product",
                        variant.id
                    ))
                })?;

            package_items.push(PackageItem {
                shop_id: product.shop_id,
                variant_id: variant.id,
                quantity: item.quantity,
                weight_grams: variant.weight_grams,
                length_mm: variant.length_mm,
                width_mm: variant.width_mm,
                height_mm: variant.height_mm,
            });
        }

        Ok((order, address, build_packages(&package_items)))
    }

    /// Resolves the package's pickup office and builds the carrier order
    /// request shared by preview and create.
    async fn package_request(
        &self,
        address: &entity::addresses::Model,
        package: &Package,
    ) -> Result<(entity::shop_offices::Model, CreateOrderRequest), AppError> {
        let office = CrudRepository::<entity::prelude::ShopOffices>::new(self.db)
            .find_filtered(entity::shop_offices::Column::ShopId.eq(package.shop_id))
            .await?
            .into_iter()
            .find(|office| office.is_pickup)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Shop {} has no pickup office configured",
                    package.shop_id
                ))
            })?;

        let request = CreateOrderRequest {
            from_district_id: office.district_id,
            from_ward_code: office.ward_code.clone(),
            to_district_id: address.district_id,
            to_ward_code: address.ward_code.clone(),
            to_name: address.receiver_name.clone(),
            to_phone: address.phone.clone(),
            to_address: address.street.clone(),
            weight: package.weight_grams,
            length: package.length_mm,
            width: package.width_mm,
            height: package.height_mm,
            service_id: None,
            items: package
                .items
                .iter()
                .map(|item| CreateOrderItem {
                    name: format!("variant {}", item.variant_id),
                    quantity: item.quantity,
                    weight: item.weight_grams,
                })
                .collect(),
        };

        Ok((office, request))
    }

    async fn dispatch_package(
        &self,
        order: &entity::orders::Model,
        address: &entity::addresses::Model,
        package: &Package,
    ) -> Result<ShipmentDto, AppError> {
        let (office, request) = self.package_request(address, package).await?;

        let fee = self
            .carrier
            .calculate_fee(&FeeRequest {
                from_district_id: office.district_id,
                to_district_id: address.district_id,
                to_ward_code: address.ward_code.clone(),
                weight: package.weight_grams,
                length: package.length_mm,
                width: package.width_mm,
                height: package.height_mm,
                service_id: None,
            })
            .await?;

        let carrier_order = self.carrier.create_order(&request).await?;

        let now = Utc::now();
        let shipment = CrudRepository::<entity::prelude::Shipments>::new(self.db)
            .insert(entity::shipments::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                shop_id: ActiveValue::Set(package.shop_id),
                carrier_code: ActiveValue::Set(Some(carrier_order.order_code.clone())),
                service_id: ActiveValue::Set(None),
                fee_amount: ActiveValue::Set(fee.total),
                currency_unit: ActiveValue::Set(order.currency_unit.clone()),
                status: ActiveValue::Set("CREATED".to_string()),
                expected_delivery: ActiveValue::Set(carrier_order.expected_delivery_time),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .await
            .map_err(|err| {
                tracing::error!("Failed to persist shipment: {}", err);
                AppError::BadRequest("Could not persist shipment".to_string())
            })?;

        tracing::info!(
            "Created shipment {} ({}) for order {}",
            shipment.id,
            carrier_order.order_code,
            order.id
        );

        Ok(ShipmentDto::from(shipment))
    }

    pub async fn list_for_order(&self, order_id: i32) -> Result<Vec<ShipmentDto>, AppError> {
        let shipments = CrudRepository::<entity::prelude::Shipments>::new(self.db)
            .find_filtered(entity::shipments::Column::OrderId.eq(order_id))
            .await?;

        Ok(shipments.into_iter().map(ShipmentDto::from).collect())
    }

    /// Asks the carrier for the package's current status and mirrors it
    /// onto the local row.
    pub async fn track(&self, shipment_id: i32) -> Result<TrackShipmentDto, AppError> {
        let shipment = self.crud().get(shipment_id).await?;

        let Some(code) = shipment.carrier_code.clone() else {
            return Err(AppError::BadRequest(
                "Shipment has no carrier order yet".to_string(),
            ));
        };

        let tracked = self.carrier.track_order(&code).await?;

        let mut model: entity::shipments::ActiveModel = shipment.into();
        model.status = ActiveValue::Set(tracked.status.clone());
        model.updated_at = ActiveValue::Set(Utc::now());
        CrudRepository::<entity::prelude::Shipments>::new(self.db)
            .update(model)
            .await?;

        Ok(TrackShipmentDto {
            order_code: tracked.order_code,
            status: tracked.status,
            updated_at: tracked.updated_at,
        })
    }

    /// Cancels the carrier order, then marks the local row cancelled.
    pub async fn cancel(&self, shipment_id: i32) -> Result<ShipmentDto, AppError> {
        let shipment = self.crud().get(shipment_id).await?;

        if let Some(code) = shipment.carrier_code.as_deref() {
            self.carrier.cancel_order(code).await?;
        }

        let mut model: entity::shipments::ActiveModel = shipment.into();
        model.status = ActiveValue::Set("CANCELLED".to_string());
        model.updated_at = ActiveValue::Set(Utc::now());
        let cancelled = CrudRepository::<entity::prelude::Shipments>::new(self.db)
            .update(model)
            .await?;

        tracing::info!("Cancelled shipment {}", cancelled.id);
        Ok(ShipmentDto::from(cancelled))
    }
}
