//! Core conversion modules

pub mod md2latex;
