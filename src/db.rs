pub mod connection;
pub mod dao;
pub mod drafts;
pub mod entities;
