use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(200).not_null())
                    // BEGINNER | INTERMEDIATE | ADVANCED | EXPERT
                    .col(ColumnDef::new(Skills::Level).string_len(20).not_null())
                    .col(ColumnDef::new(Skills::Category).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Skills::Years)
                            .integer()
                            .check(Expr::col(Skills::Years).between(0, 50)),
                    )
                    .col(ColumnDef::new(Skills::IconUrl).text())
                    .col(ColumnDef::new(Skills::Description).text())
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Skills::UpdatedAt)
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
                    .name("idx_skills_created_at")
                    .table(Skills::Table)
                    .col(Skills::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Level,
    Category,
    Years,
    IconUrl,
    Description,
    CreatedAt,
    UpdatedAt,
}
