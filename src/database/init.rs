use crate::Result;
use sqlx::{Connection, PgConnection};

// Init database connection
pub async fn connect(database_url: &str) -> Result<PgConnection> {
    let conn = PgConnection::connect(database_url).await?;
    Ok(conn)
}
