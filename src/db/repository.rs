//! Database repository for CRUD operations.
//!
//! Holds the order state machine, the reference-data replace-all semantics,
//! mapping/coupon CRUD, and the singleton token record.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    coerce_amount, CouponMapping, CreateCouponMappingRequest, CreateMappingRequest,
    CreateOrderRequest, ManagerStoreMapping, Order, OrderItem, OrderView, ReferenceEntry,
    ReferenceKind, SyncOutcome, TokenPair, UpdateCouponMappingRequest, UpdateMappingRequest,
    UpdateOrderRequest,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

/// Reject malformed identifiers before they reach a query.
fn validate_id(id: &str) -> Result<(), AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidId(format!("Malformed id: {}", id)))?;
    Ok(())
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== TOKEN OPERATIONS ====================

    /// Load the singleton token pair, if one has ever been stored.
    pub async fn get_token_pair(&self) -> Result<Option<TokenPair>, AppError> {
        let row = sqlx::query("SELECT access_token, refresh_token, updated_at FROM tokens WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| TokenPair {
            access_token: row.get("access_token"),
            refresh_token: row.get("refresh_token"),
            updated_at: row.get("updated_at"),
        }))
    }

    /// Upsert the singleton token pair in place.
    pub async fn save_token_pair(&self, pair: &TokenPair) -> Result<(), AppError> {
        sqlx::query(
            r#"INSERT INTO tokens (id, access_token, refresh_token, updated_at)
               VALUES (1, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   access_token = excluded.access_token,
                   refresh_token = excluded.refresh_token,
                   updated_at = excluded.updated_at"#,
        )
        .bind(&pair.access_token)
        .bind(&pair.refresh_token)
        .bind(&pair.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ==================== ORDER OPERATIONS ====================

    /// Create a new order. The id is always generated here; numeric fields
    /// are coerced and a line item is synthesized from the legacy flat
    /// fields when the items array is absent.
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, AppError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let items = request.normalized_items();
        let items_json = serde_json::to_string(&items)?;
        let total_amount = request.total_amount.as_ref().map(coerce_amount).unwrap_or(0);
        let shipping_cost = request.shipping_cost.as_ref().map(coerce_amount).unwrap_or(0);

        sqlx::query(
            r#"INSERT INTO orders (
                id, store_name, manager_name, customer_name, customer_phone, address,
                items, total_amount, shipping_cost, is_synced, is_deleted, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0, 0, ?)"#,
        )
        .bind(&id)
        .bind(&request.store_name)
        .bind(&request.manager_name)
        .bind(&request.customer_name)
        .bind(&request.customer_phone)
        .bind(&request.address)
        .bind(&items_json)
        .bind(total_amount)
        .bind(shipping_cost)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Order {
            id,
            store_name: request.store_name.clone(),
            manager_name: request.manager_name.clone(),
            customer_name: request.customer_name.clone(),
            customer_phone: request.customer_phone.clone(),
            address: request.address.clone(),
            items,
            total_amount,
            shipping_cost,
            is_synced: false,
            is_deleted: false,
            created_at: now,
            updated_at: None,
            synced_at: None,
            deleted_at: None,
            external_sync_success: None,
            external_sync_message: None,
        })
    }

    /// Get an order by ID.
    pub async fn get_order(&self, id: &str) -> Result<Option<Order>, AppError> {
        let row = sqlx::query("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(order_from_row))
    }

    /// List orders for a view with optional conjunctive filters.
    ///
    /// Store name, date range, and view are pushed into SQL; the keyword
    /// filter runs over the decoded rows because the product names it must
    /// match live inside the items JSON column.
    pub async fn list_orders(
        &self,
        view: OrderView,
        store_name: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        keyword: Option<&str>,
    ) -> Result<Vec<Order>, AppError> {
        let mut sql = String::from("SELECT * FROM orders WHERE 1 = 1");

        match view {
            OrderView::Active => sql.push_str(" AND is_deleted = 0 AND is_synced = 0"),
            OrderView::Completed => sql.push_str(" AND is_deleted = 0 AND is_synced = 1"),
            OrderView::Trash => sql.push_str(" AND is_deleted = 1"),
        }

        // "all" is a sentinel that bypasses the store filter
        let store_filter = store_name.filter(|s| !s.is_empty() && *s != "all");
        if store_filter.is_some() {
            sql.push_str(" AND store_name = ?");
        }
        if start_date.is_some() {
            sql.push_str(" AND substr(created_at, 1, 10) >= ?");
        }
        if end_date.is_some() {
            sql.push_str(" AND substr(created_at, 1, 10) <= ?");
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = sqlx::query(&sql);
        if let Some(store) = store_filter {
            query = query.bind(store.to_string());
        }
        if let Some(start) = start_date {
            query = query.bind(start.to_string());
        }
        if let Some(end) = end_date {
            query = query.bind(end.to_string());
        }

        let rows = query.fetch_all(&self.pool).await?;
        let mut orders: Vec<Order> = rows.iter().map(order_from_row).collect();

        if let Some(keyword) = keyword.filter(|k| !k.trim().is_empty()) {
            let needle = keyword.trim().to_lowercase();
            orders.retain(|order| {
                order.customer_name.to_lowercase().contains(&needle)
                    || order.customer_phone.to_lowercase().contains(&needle)
                    || order
                        .items
                        .iter()
                        .any(|item| item.product_name.to_lowercase().contains(&needle))
            });
        }

        Ok(orders)
    }

    /// Whitelist-based partial update. Identity and lifecycle flags are not
    /// patchable; numeric fields are re-coerced; stamps `updated_at`.
    pub async fn update_order(
        &self,
        id: &str,
        request: &UpdateOrderRequest,
    ) -> Result<Order, AppError> {
        validate_id(id)?;

        let existing = self
            .get_order(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        let store_name = request.store_name.clone().unwrap_or(existing.store_name);
        let manager_name = request.manager_name.clone().unwrap_or(existing.manager_name);
        let customer_name = request
            .customer_name
            .clone()
            .unwrap_or(existing.customer_name);
        let customer_phone = request
            .customer_phone
            .clone()
            .unwrap_or(existing.customer_phone);
        let address = request.address.clone().unwrap_or(existing.address);
        let items: Vec<OrderItem> = match &request.items {
            Some(drafts) => drafts.iter().map(|d| d.normalize()).collect(),
            None => existing.items.clone(),
        };
        let total_amount = request
            .total_amount
            .as_ref()
            .map(coerce_amount)
            .unwrap_or(existing.total_amount);
        let shipping_cost = request
            .shipping_cost
            .as_ref()
            .map(coerce_amount)
            .unwrap_or(existing.shipping_cost);
        let items_json = serde_json::to_string(&items)?;

        sqlx::query(
            r#"UPDATE orders SET
                store_name = ?, manager_name = ?, customer_name = ?, customer_phone = ?,
                address = ?, items = ?, total_amount = ?, shipping_cost = ?, updated_at = ?
            WHERE id = ?"#,
        )
        .bind(&store_name)
        .bind(&manager_name)
        .bind(&customer_name)
        .bind(&customer_phone)
        .bind(&address)
        .bind(&items_json)
        .bind(total_amount)
        .bind(shipping_cost)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Order {
            id: id.to_string(),
            store_name,
            manager_name,
            customer_name,
            customer_phone,
            address,
            items,
            total_amount,
            shipping_cost,
            is_synced: existing.is_synced,
            is_deleted: existing.is_deleted,
            created_at: existing.created_at,
            updated_at: Some(now),
            synced_at: existing.synced_at,
            deleted_at: existing.deleted_at,
            external_sync_success: existing.external_sync_success,
            external_sync_message: existing.external_sync_message,
        })
    }

    /// Soft-delete an order (move it to the trash view).
    pub async fn soft_delete_order(&self, id: &str) -> Result<(), AppError> {
        validate_id(id)?;
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query("UPDATE orders SET is_deleted = 1, deleted_at = ? WHERE id = ?")
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Order {} not found", id)));
        }
        Ok(())
    }

    /// Permanently remove an order.
    ///
    /// Default policy is trash-first: only soft-deleted orders may be hard
    /// deleted. `force` is the administrative override for removing an order
    /// directly from any state.
    pub async fn hard_delete_order(&self, id: &str, force: bool) -> Result<(), AppError> {
        validate_id(id)?;

        let existing = self
            .get_order(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

        if !existing.is_deleted && !force {
            return Err(AppError::Validation(
                "Only trashed orders can be permanently deleted (use force=true to override)"
                    .to_string(),
            ));
        }

        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Restore a trashed order back to the active view.
    ///
    /// Only trashed orders can be restored; the trip through the trash is
    /// the sole route from Completed back to Active. Sync status is always
    /// reset, so the restored order lands in the active view no matter what
    /// state it was in before trashing.
    pub async fn restore_order(&self, id: &str) -> Result<Order, AppError> {
        validate_id(id)?;

        let existing = self
            .get_order(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

        if !existing.is_deleted {
            return Err(AppError::Validation(
                "Only trashed orders can be restored".to_string(),
            ));
        }

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"UPDATE orders SET
                is_deleted = 0, deleted_at = NULL,
                is_synced = 0, synced_at = NULL, sync_success = NULL, sync_message = NULL,
                updated_at = ?
            WHERE id = ? AND is_deleted = 1"#,
        )
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get_order(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }

    /// Bulk-apply per-order sync outcomes from the external ERP push.
    ///
    /// Outcomes with an id match exactly one order; outcomes without one
    /// fall back to the `(customer_name, total_amount)` tuple and update
    /// every candidate that satisfies it (intended best-effort behavior).
    /// Both paths skip trashed orders, so a stale outcome cannot mark an
    /// order the operator has since discarded.
    /// Deliberately not transactional: a mid-batch failure leaves earlier
    /// outcomes applied, and those orders can simply be re-synced.
    pub async fn apply_sync_outcomes(&self, outcomes: &[SyncOutcome]) -> Result<u64, AppError> {
        let now = Utc::now().to_rfc3339();
        let mut updated = 0u64;

        for outcome in outcomes {
            let success = outcome.status == "SUCCESS";
            let message = outcome.message.clone().unwrap_or_default();

            let affected = if let Some(id) = outcome.id.as_deref().filter(|s| !s.is_empty()) {
                validate_id(id)?;
                sqlx::query(
                    r#"UPDATE orders SET is_synced = 1, synced_at = ?, sync_success = ?, sync_message = ?
                       WHERE id = ? AND is_deleted = 0"#,
                )
                .bind(&now)
                .bind(success as i32)
                .bind(&message)
                .bind(id)
                .execute(&self.pool)
                .await?
                .rows_affected()
            } else {
                let customer_name = outcome.customer_name.as_deref().unwrap_or_default();
                let total_amount = outcome.total_amount.as_ref().map(coerce_amount).unwrap_or(0);
                sqlx::query(
                    r#"UPDATE orders SET is_synced = 1, synced_at = ?, sync_success = ?, sync_message = ?
                       WHERE customer_name = ? AND total_amount = ? AND is_deleted = 0"#,
                )
                .bind(&now)
                .bind(success as i32)
                .bind(&message)
                .bind(customer_name)
                .bind(total_amount)
                .execute(&self.pool)
                .await?
                .rows_affected()
            };

            if affected == 0 {
                tracing::warn!(?outcome, "sync outcome matched no orders");
            }
            updated += affected;
        }

        Ok(updated)
    }

    // ==================== REFERENCE DATA OPERATIONS ====================

    /// List all entries of a reference collection.
    pub async fn get_reference(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntry>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT code, name, extra FROM {} ORDER BY rowid",
            kind.table()
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let extra: Option<String> = row.get("extra");
                ReferenceEntry {
                    code: row.get("code"),
                    name: row.get("name"),
                    extra: extra.and_then(|s| serde_json::from_str(&s).ok()),
                }
            })
            .collect())
    }

    /// Number of entries in a reference collection.
    pub async fn count_reference(&self, kind: ReferenceKind) -> Result<i64, AppError> {
        let row = sqlx::query(&format!("SELECT COUNT(*) AS n FROM {}", kind.table()))
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }

    /// Replace the entire collection: delete-all then insert-all inside one
    /// transaction. The supplied list becomes the new complete contents,
    /// including when it is empty; the caller guards against that.
    pub async fn replace_reference(
        &self,
        kind: ReferenceKind,
        entries: &[ReferenceEntry],
    ) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!("DELETE FROM {}", kind.table()))
            .execute(&mut *tx)
            .await?;

        for entry in entries {
            let extra_json = entry
                .extra
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?;
            sqlx::query(&format!(
                "INSERT INTO {} (code, name, extra) VALUES (?, ?, ?)",
                kind.table()
            ))
            .bind(&entry.code)
            .bind(&entry.name)
            .bind(&extra_json)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(entries.len())
    }

    // ==================== MAPPING OPERATIONS ====================

    /// List all manager/store mappings.
    pub async fn list_mappings(&self) -> Result<Vec<ManagerStoreMapping>, AppError> {
        let rows = sqlx::query(
            "SELECT id, manager_code, manager_name, store_name, store_code, warehouse_code, trade_type FROM mappings ORDER BY manager_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(mapping_from_row).collect())
    }

    /// Create a new mapping.
    pub async fn create_mapping(
        &self,
        request: &CreateMappingRequest,
    ) -> Result<ManagerStoreMapping, AppError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"INSERT INTO mappings (id, manager_code, manager_name, store_name, store_code, warehouse_code, trade_type)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(&request.manager_code)
        .bind(&request.manager_name)
        .bind(&request.store_name)
        .bind(&request.store_code)
        .bind(&request.warehouse_code)
        .bind(&request.trade_type)
        .execute(&self.pool)
        .await?;

        Ok(ManagerStoreMapping {
            id,
            manager_code: request.manager_code.clone(),
            manager_name: request.manager_name.clone(),
            store_name: request.store_name.clone(),
            store_code: request.store_code.clone(),
            warehouse_code: request.warehouse_code.clone(),
            trade_type: request.trade_type.clone(),
        })
    }

    /// Update a mapping.
    pub async fn update_mapping(
        &self,
        id: &str,
        request: &UpdateMappingRequest,
    ) -> Result<ManagerStoreMapping, AppError> {
        validate_id(id)?;

        let row = sqlx::query(
            "SELECT id, manager_code, manager_name, store_name, store_code, warehouse_code, trade_type FROM mappings WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let existing = row
            .as_ref()
            .map(mapping_from_row)
            .ok_or_else(|| AppError::NotFound(format!("Mapping {} not found", id)))?;

        let manager_code = request.manager_code.clone().unwrap_or(existing.manager_code);
        let manager_name = request.manager_name.clone().unwrap_or(existing.manager_name);
        let store_name = request.store_name.clone().unwrap_or(existing.store_name);
        let store_code = request.store_code.clone().unwrap_or(existing.store_code);
        let warehouse_code = request
            .warehouse_code
            .clone()
            .unwrap_or(existing.warehouse_code);
        let trade_type = request.trade_type.clone().unwrap_or(existing.trade_type);

        sqlx::query(
            r#"UPDATE mappings SET manager_code = ?, manager_name = ?, store_name = ?,
               store_code = ?, warehouse_code = ?, trade_type = ? WHERE id = ?"#,
        )
        .bind(&manager_code)
        .bind(&manager_name)
        .bind(&store_name)
        .bind(&store_code)
        .bind(&warehouse_code)
        .bind(&trade_type)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(ManagerStoreMapping {
            id: id.to_string(),
            manager_code,
            manager_name,
            store_name,
            store_code,
            warehouse_code,
            trade_type,
        })
    }

    /// Delete a mapping.
    pub async fn delete_mapping(&self, id: &str) -> Result<(), AppError> {
        validate_id(id)?;

        let result = sqlx::query("DELETE FROM mappings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Mapping {} not found", id)));
        }
        Ok(())
    }

    /// Bulk-import mappings, appending to the collection.
    pub async fn import_mappings(
        &self,
        requests: &[CreateMappingRequest],
    ) -> Result<usize, AppError> {
        for request in requests {
            self.create_mapping(request).await?;
        }
        Ok(requests.len())
    }

    /// Remove every mapping (forced reseed support).
    pub async fn clear_mappings(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM mappings").execute(&self.pool).await?;
        Ok(())
    }

    /// Number of mapping rows.
    pub async fn count_mappings(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM mappings")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }

    // ==================== COUPON MAPPING OPERATIONS ====================

    /// List coupon mappings; by default only those still valid today.
    pub async fn list_coupon_mappings(
        &self,
        include_expired: bool,
    ) -> Result<Vec<CouponMapping>, AppError> {
        let today = Utc::now().format("%Y-%m-%d").to_string();

        let rows = if include_expired {
            sqlx::query(
                "SELECT id, coupon_no, coupon_name, product_nos, start_date, end_date FROM coupon_mappings ORDER BY end_date DESC",
            )
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(
                "SELECT id, coupon_no, coupon_name, product_nos, start_date, end_date FROM coupon_mappings WHERE end_date >= ? ORDER BY end_date DESC",
            )
            .bind(&today)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(rows.iter().map(coupon_from_row).collect())
    }

    /// Create a coupon mapping.
    pub async fn create_coupon_mapping(
        &self,
        request: &CreateCouponMappingRequest,
    ) -> Result<CouponMapping, AppError> {
        let id = Uuid::new_v4().to_string();
        let product_nos_json = serde_json::to_string(&request.product_nos)?;

        sqlx::query(
            r#"INSERT INTO coupon_mappings (id, coupon_no, coupon_name, product_nos, start_date, end_date)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(&request.coupon_no)
        .bind(&request.coupon_name)
        .bind(&product_nos_json)
        .bind(&request.start_date)
        .bind(&request.end_date)
        .execute(&self.pool)
        .await?;

        Ok(CouponMapping {
            id,
            coupon_no: request.coupon_no.clone(),
            coupon_name: request.coupon_name.clone(),
            product_nos: request.product_nos.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
        })
    }

    /// Update a coupon mapping.
    pub async fn update_coupon_mapping(
        &self,
        id: &str,
        request: &UpdateCouponMappingRequest,
    ) -> Result<CouponMapping, AppError> {
        validate_id(id)?;

        let row = sqlx::query(
            "SELECT id, coupon_no, coupon_name, product_nos, start_date, end_date FROM coupon_mappings WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let existing = row
            .as_ref()
            .map(coupon_from_row)
            .ok_or_else(|| AppError::NotFound(format!("Coupon mapping {} not found", id)))?;

        let coupon_no = request.coupon_no.clone().unwrap_or(existing.coupon_no);
        let coupon_name = request.coupon_name.clone().unwrap_or(existing.coupon_name);
        let product_nos = request.product_nos.clone().unwrap_or(existing.product_nos);
        let start_date = request.start_date.clone().unwrap_or(existing.start_date);
        let end_date = request.end_date.clone().unwrap_or(existing.end_date);
        let product_nos_json = serde_json::to_string(&product_nos)?;

        sqlx::query(
            r#"UPDATE coupon_mappings SET coupon_no = ?, coupon_name = ?, product_nos = ?,
               start_date = ?, end_date = ? WHERE id = ?"#,
        )
        .bind(&coupon_no)
        .bind(&coupon_name)
        .bind(&product_nos_json)
        .bind(&start_date)
        .bind(&end_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(CouponMapping {
            id: id.to_string(),
            coupon_no,
            coupon_name,
            product_nos,
            start_date,
            end_date,
        })
    }

    /// Delete a coupon mapping.
    pub async fn delete_coupon_mapping(&self, id: &str) -> Result<(), AppError> {
        validate_id(id)?;

        let result = sqlx::query("DELETE FROM coupon_mappings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Coupon mapping {} not found", id)));
        }
        Ok(())
    }
}

// Helper functions for row conversion

fn order_from_row(row: &sqlx::sqlite::SqliteRow) -> Order {
    let is_synced: i32 = row.get("is_synced");
    let is_deleted: i32 = row.get("is_deleted");
    let sync_success: Option<i32> = row.get("sync_success");
    let items_str: String = row.get("items");
    let items: Vec<OrderItem> = serde_json::from_str(&items_str).unwrap_or_default();

    Order {
        id: row.get("id"),
        store_name: row.get("store_name"),
        manager_name: row.get("manager_name"),
        customer_name: row.get("customer_name"),
        customer_phone: row.get("customer_phone"),
        address: row.get("address"),
        items,
        total_amount: row.get("total_amount"),
        shipping_cost: row.get("shipping_cost"),
        is_synced: is_synced != 0,
        is_deleted: is_deleted != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        synced_at: row.get("synced_at"),
        deleted_at: row.get("deleted_at"),
        external_sync_success: sync_success.map(|v| v != 0),
        external_sync_message: row.get("sync_message"),
    }
}

fn mapping_from_row(row: &sqlx::sqlite::SqliteRow) -> ManagerStoreMapping {
    ManagerStoreMapping {
        id: row.get("id"),
        manager_code: row.get("manager_code"),
        manager_name: row.get("manager_name"),
        store_name: row.get("store_name"),
        store_code: row.get("store_code"),
        warehouse_code: row.get("warehouse_code"),
        trade_type: row.get("trade_type"),
    }
}

fn coupon_from_row(row: &sqlx::sqlite::SqliteRow) -> CouponMapping {
    let product_nos_str: String = row.get("product_nos");
    CouponMapping {
        id: row.get("id"),
        coupon_no: row.get("coupon_no"),
        coupon_name: row.get("coupon_name"),
        product_nos: serde_json::from_str(&product_nos_str).unwrap_or_default(),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
    }
}
