//! Camada de leitura do painel de faturas: consultas ao banco (faturas,
//! clientes, receita) já moldadas para a tela.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
