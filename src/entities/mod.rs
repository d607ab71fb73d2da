pub mod admin;
pub mod carousel_image;
pub mod category;
pub mod product;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromJsonQueryResult, Schema};
use serde::{Deserialize, Serialize};

use crate::entities::{
    admin::Entity as Admin,
    carousel_image::Entity as CarouselImage,
    category::Entity as Category,
    product::Entity as Product,
};

/// List of strings kept in a single JSON column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(value: Vec<String>) -> Self {
        StringList(value)
    }
}

pub async fn setup_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    //categories must exist before products reference them
    create_table(db, CarouselImage).await?;
    create_table(db, Category).await?;
    create_table(db, Product).await?;
    create_table(db, Admin).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    Ok(())
}
