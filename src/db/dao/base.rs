use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait, LikeExpr};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, FromQueryResult,
    IntoActiveModel, Order, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    TransactionTrait,
};
use uuid::Uuid;

use super::base_traits::{
    HasCreatedAtColumn, HasIdActiveModel, HasNameColumn, TimestampedActiveModel,
};
use super::error::{DaoLayerError, DaoResult};

const LIKE_ESCAPE: char = '!';

#[derive(Debug, serde::Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub has_next: bool,
}

pub struct DaoPager<D, F>
where
    D: DaoBase,
    F: Fn(Select<D::Entity>) -> Select<D::Entity> + Clone + Send,
{
    dao: D,
    page: u64,
    page_size: u64,
    order: Option<(<D::Entity as EntityTrait>::Column, Order)>,
    apply: F,
    done: bool,
}

impl<D, F> DaoPager<D, F>
where
    D: DaoBase,
    F: Fn(Select<D::Entity>) -> Select<D::Entity> + Clone + Send,
    <D::Entity as EntityTrait>::Column: Clone,
{
    pub async fn next_page(&mut self) -> DaoResult<Option<Page<<D::Entity as EntityTrait>::Model>>> {
        if self.done {
            return Ok(None);
        }

        let response = self
            .dao
            .find(
                self.page,
                self.page_size,
                self.order.clone(),
                self.apply.clone(),
            )
            .await?;

        if !response.has_next {
            self.done = true;
        }
        self.page = self.page.saturating_add(1);

        Ok(Some(response))
    }

    pub async fn collect_all(mut self) -> DaoResult<Vec<<D::Entity as EntityTrait>::Model>> {
        let mut rows = Vec::new();
        while let Some(mut response) = self.next_page().await? {
            rows.append(&mut response.data);
        }
        Ok(rows)
    }
}

/// Commits on success, rolls back on failure; the original error wins
/// over a failed rollback.
pub async fn commit_or_rollback<T>(txn: DatabaseTransaction, outcome: DaoResult<T>) -> DaoResult<T> {
    match outcome {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}

/// Case folding for stored name keys and search terms. Unicode-aware,
/// unlike SQLite's `LOWER`.
pub fn fold_name(text: &str) -> String {
    text.to_lowercase()
}

/// `%term%` over folded names, with the wildcard characters in `term`
/// matched literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in fold_name(term.trim()).chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = Self::Entity> + HasIdActiveModel + TimestampedActiveModel + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<Uuid> + Send + Sync,
    Self::Entity: HasCreatedAtColumn,
{
    type Entity: EntityTrait + Send + Sync;
    /// Human label used in not-found messages.
    const LABEL: &'static str;
    const MAX_PAGE_SIZE: u64 = 100;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    fn not_found(id: Uuid) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::LABEL,
            id,
        }
    }

    async fn begin(&self) -> DaoResult<DatabaseTransaction> {
        self.db().begin().await.map_err(DaoLayerError::Db)
    }

    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let txn = self.begin().await?;
        let outcome = self.insert_in(&txn, data).await;
        commit_or_rollback(txn, outcome).await
    }

    async fn insert_in(
        &self,
        txn: &DatabaseTransaction,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.set_id(Uuid::new_v4());
        active.set_created_at(now);
        active.set_updated_at(now);
        active.insert(txn).await.map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: Uuid) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn find_by_id_in(
        &self,
        txn: &DatabaseTransaction,
        id: Uuid,
    ) -> DaoResult<Option<<Self::Entity as EntityTrait>::Model>> {
        Self::Entity::find_by_id(id)
            .one(txn)
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn find(
        &self,
        page: u64,
        page_size: u64,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Page<<Self::Entity as EntityTrait>::Model>> {
        if page == 0 || page_size == 0 || page_size > Self::MAX_PAGE_SIZE {
            return Err(DaoLayerError::InvalidPagination { page, page_size });
        }

        let filtered = apply(Self::Entity::find());
        let ordered = match order {
            Some((column, order)) => filtered.order_by(column, order),
            None => filtered.order_by_desc(Self::Entity::created_at_column()),
        };
        let fetch_size = page_size.saturating_add(1);
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let mut data = ordered
            .limit(fetch_size)
            .offset(offset)
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        let has_next = data.len() > page_size as usize;
        if has_next {
            data.truncate(page_size as usize);
        }

        Ok(Page {
            data,
            page,
            page_size,
            has_next,
        })
    }

    fn find_iter<F>(
        &self,
        page_size: Option<u64>,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: F,
    ) -> DaoPager<Self, F>
    where
        F: Fn(Select<Self::Entity>) -> Select<Self::Entity> + Clone + Send,
        <Self::Entity as EntityTrait>::Column: Clone,
    {
        DaoPager {
            dao: self.clone(),
            page: 1,
            page_size: page_size.unwrap_or(Self::MAX_PAGE_SIZE),
            order,
            apply,
            done: false,
        }
    }

    /// Case-insensitive substring search over the entity's folded name key,
    /// ordered by name.
    async fn search_by_name(&self, term: &str) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>>
    where
        Self::Entity: HasNameColumn,
        <Self::Entity as EntityTrait>::Column: Clone,
    {
        let pattern = contains_pattern(term);
        let order = Some((Self::Entity::name_column(), Order::Asc));
        self.find_iter(None, order, move |query| {
            query.filter(
                Expr::col(Self::Entity::name_key_column())
                    .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)),
            )
        })
        .collect_all()
        .await
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let txn = self.begin().await?;
        let outcome = async {
            let model = self
                .find_by_id_in(&txn, id)
                .await?
                .ok_or_else(|| Self::not_found(id))?;

            let mut active = model.into_active_model();
            apply(&mut active);
            active.set_updated_at(Utc::now().fixed_offset());
            active.update(&txn).await.map_err(DaoLayerError::Db)
        }
        .await;
        commit_or_rollback(txn, outcome).await
    }

    async fn delete_in(&self, txn: &DatabaseTransaction, id: Uuid) -> DaoResult<Uuid> {
        let result = Self::Entity::delete_by_id(id)
            .exec(txn)
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        Ok(id)
    }
}
