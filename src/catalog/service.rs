//! Catalog service: category and product management
//!
//! Storefront reads plus the admin CRUD surface, including the cascading
//! category delete and the clean-inactive bulk action. Multi-row deletes
//! run inside a single transaction so a failure never leaves orphans.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

use super::model::{
    Category, CategoryDeleteResult, CleanInactiveResult, CreateCategoryRequest,
    CreateProductRequest, Product, ProductWithCategory, StorefrontFilter, UpdateCategoryRequest,
    UpdateProductRequest,
};

/// Catalog service
#[derive(Clone)]
pub struct CatalogService {
    db_pool: PgPool,
}

impl CatalogService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    // ------------------------------------------------------------------
    // Storefront reads
    // ------------------------------------------------------------------

    /// Active categories for the storefront filter bar
    pub async fn list_active_categories(&self) -> ApiResult<Vec<Category>> {
        let categories = sqlx::query_as(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at
            FROM categories
            WHERE is_active = TRUE
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(categories)
    }

    /// Active products with their category name, optionally filtered by category
    pub async fn list_storefront_products(
        &self,
        filter: StorefrontFilter,
    ) -> ApiResult<Vec<ProductWithCategory>> {
        let products = sqlx::query_as(
            r#"
            SELECT p.id, p.name, p.category_id, c.name AS category_name,
                   p.description, p.diamonds_count, p.price, p.is_active, p.created_at
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.is_active = TRUE
              AND ($1::uuid IS NULL OR p.category_id = $1)
            ORDER BY p.price ASC
            "#,
        )
        .bind(filter.category_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(products)
    }

    // ------------------------------------------------------------------
    // Admin: categories
    // ------------------------------------------------------------------

    /// All categories, newest first (admin table)
    pub async fn list_all_categories(&self) -> ApiResult<Vec<Category>> {
        let categories = sqlx::query_as(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at
            FROM categories
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(categories)
    }

    pub async fn create_category(&self, req: CreateCategoryRequest) -> ApiResult<Category> {
        let category = sqlx::query_as(
            r#"
            INSERT INTO categories (id, name, description, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, is_active, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.is_active)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        req: UpdateCategoryRequest,
    ) -> ApiResult<Category> {
        let category = sqlx::query_as(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.is_active)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Category {} not found", id)))?;

        Ok(category)
    }

    /// Delete a category and every product attached to it, atomically.
    ///
    /// Products with existing orders make the whole transaction fail with a
    /// conflict; nothing is partially deleted.
    pub async fn delete_category(&self, id: Uuid) -> ApiResult<CategoryDeleteResult> {
        let mut tx = self.db_pool.begin().await?;

        let products_deleted = sqlx::query(
            r#"
            DELETE FROM products WHERE category_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let rows = sqlx::query(
            r#"
            DELETE FROM categories WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if rows == 0 {
            tx.rollback().await?;
            return Err(ApiError::NotFound(format!("Category {} not found", id)));
        }

        tx.commit().await?;

        tracing::info!(category_id = %id, products_deleted, "Category deleted");

        Ok(CategoryDeleteResult { products_deleted })
    }

    // ------------------------------------------------------------------
    // Admin: products
    // ------------------------------------------------------------------

    /// All products with category names, newest first (admin table)
    pub async fn list_all_products(&self) -> ApiResult<Vec<ProductWithCategory>> {
        let products = sqlx::query_as(
            r#"
            SELECT p.id, p.name, p.category_id, c.name AS category_name,
                   p.description, p.diamonds_count, p.price, p.is_active, p.created_at
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(products)
    }

    pub async fn get_product(&self, id: Uuid) -> ApiResult<Product> {
        sqlx::query_as(
            r#"
            SELECT id, name, category_id, description, diamonds_count, price, is_active, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))
    }

    pub async fn create_product(&self, req: CreateProductRequest) -> ApiResult<Product> {
        if req.price.is_sign_negative() {
            return Err(ApiError::ValidationError(
                "Product price must not be negative".to_string(),
            ));
        }

        let product = sqlx::query_as(
            r#"
            INSERT INTO products (id, name, category_id, description, diamonds_count, price, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, category_id, description, diamonds_count, price, is_active, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(req.category_id)
        .bind(&req.description)
        .bind(req.diamonds_count)
        .bind(req.price)
        .bind(req.is_active)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(product)
    }

    pub async fn update_product(&self, id: Uuid, req: UpdateProductRequest) -> ApiResult<Product> {
        if let Some(price) = req.price {
            if price.is_sign_negative() {
                return Err(ApiError::ValidationError(
                    "Product price must not be negative".to_string(),
                ));
            }
        }

        let product = sqlx::query_as(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                category_id = COALESCE($3, category_id),
                description = COALESCE($4, description),
                diamonds_count = COALESCE($5, diamonds_count),
                price = COALESCE($6, price),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, category_id, description, diamonds_count, price, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.category_id)
        .bind(&req.description)
        .bind(req.diamonds_count)
        .bind(req.price)
        .bind(req.is_active)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id)))?;

        Ok(product)
    }

    pub async fn delete_product(&self, id: Uuid) -> ApiResult<()> {
        let rows = sqlx::query(
            r#"
            DELETE FROM products WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db_pool)
        .await?
        .rows_affected();

        if rows == 0 {
            return Err(ApiError::NotFound(format!("Product {} not found", id)));
        }

        Ok(())
    }

    /// Delete inactive products, then inactive categories together with any
    /// products still attached to them, all in one transaction.
    pub async fn clean_inactive(&self) -> ApiResult<CleanInactiveResult> {
        let mut tx = self.db_pool.begin().await?;

        let mut products_deleted = sqlx::query(
            r#"
            DELETE FROM products WHERE is_active = FALSE
            "#,
        )
        .execute(&mut *tx)
        .await?
        .rows_affected();

        // Referencing rows go first, then the inactive categories themselves
        products_deleted += sqlx::query(
            r#"
            DELETE FROM products
            WHERE category_id IN (SELECT id FROM categories WHERE is_active = FALSE)
            "#,
        )
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let categories_deleted = sqlx::query(
            r#"
            DELETE FROM categories WHERE is_active = FALSE
            "#,
        )
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        tracing::info!(products_deleted, categories_deleted, "Cleaned inactive catalog rows");

        Ok(CleanInactiveResult {
            products_deleted,
            categories_deleted,
        })
    }
}
