pub mod sea_orm_entity;
mod skill_table;
