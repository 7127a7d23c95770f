use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(pk_auto(Series::Id))
                    .col(string(Series::Title))
                    .col(string(Series::Status).default(""))
                    .col(integer(Series::LastEpisodeWatched).default(0))
                    .col(integer(Series::TotalEpisodes).default(0))
                    .col(integer(Series::Ranking).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Series {
    Table,
    Id,
    Title,
    Status,
    LastEpisodeWatched,
    TotalEpisodes,
    Ranking,
}
