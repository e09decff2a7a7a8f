pub mod sea_orm_entity;
mod blog_table;
