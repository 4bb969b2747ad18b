pub mod catalog;
pub mod config;
pub mod sections;
pub mod selection;
pub mod translate;
pub mod update;
