pub mod sea_orm_entity;
mod publication_table;
