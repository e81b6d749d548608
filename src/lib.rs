//! Tasklists: shared task list service.
//!
//! This crate lets users create named task lists, share them with other
//! users, and page through the lists they own or can see. It exposes the
//! operations over HTTP and persists lists either in memory or in
//! `PostgreSQL`.
//!
//! # Architecture
//!
//! Tasklists follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//! - **Services**: Authorization and orchestration over the ports
//!
//! # Modules
//!
//! - [`task_list`]: Task list domain, ports, adapters, and services
//! - [`api`]: HTTP routes and handlers
//! - [`config`]: Environment-driven server configuration

pub mod api;
pub mod config;
pub mod task_list;
