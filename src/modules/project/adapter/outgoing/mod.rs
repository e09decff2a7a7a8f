pub mod sea_orm_entity;
mod project_table;
