use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sliders::Table)
                    .col(
                        ColumnDef::new(Sliders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sliders::Title).string().not_null())
                    .col(ColumnDef::new(Sliders::Description).text())
                    .col(ColumnDef::new(Sliders::Image).string().not_null())
                    .col(ColumnDef::new(Sliders::Link).string())
                    .col(
                        ColumnDef::new(Sliders::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sliders::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum Sliders {
    Table,
    Id,
    Title,
    Description,
    Image,
    Link,
    CreatedAt,
}
