#![allow(non_snake_case)]

pub mod clients;
pub mod models;
pub mod runtime;
pub mod service;
pub mod tasks;
