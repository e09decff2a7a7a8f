use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Publications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Publications::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Publications::Journal).string_len(200).not_null())
                    .col(ColumnDef::new(Publications::PublishedAt).date().not_null())
                    .col(ColumnDef::new(Publications::Url).text())
                    .col(
                        ColumnDef::new(Publications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Publications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_publications_created_at")
                    .table(Publications::Table)
                    .col(Publications::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Publications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
    Title,
    Journal,
    PublishedAt,
    Url,
    CreatedAt,
    UpdatedAt,
}
