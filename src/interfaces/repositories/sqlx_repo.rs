use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxAdminRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}
