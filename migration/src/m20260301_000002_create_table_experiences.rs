use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Experiences::Company).string_len(200).not_null())
                    // FULLTIME | PARTTIME | FREELANCE | INTERNSHIP
                    .col(ColumnDef::new(Experiences::Type).string_len(20).not_null())
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    // NULL while the position is current
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(ColumnDef::new(Experiences::Description).text())
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
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
                    .name("idx_experiences_created_at")
                    .table(Experiences::Table)
                    .col(Experiences::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Type,
    StartDate,
    EndDate,
    Description,
    CreatedAt,
    UpdatedAt,
}
