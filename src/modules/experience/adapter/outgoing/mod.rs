pub mod sea_orm_entity;
mod experience_table;
