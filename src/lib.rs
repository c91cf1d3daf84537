#![doc = include_str!("../README.md")]
#![warn(rustdoc::all)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

pub mod error;
pub use error::{ResolverError, Result};

mod path_utils;

pub mod fs;
pub use fs::{Filesystem, OsFilesystem};

pub mod package;
pub use package::{NodeResolver, Package, WalkingNodeResolver};

pub mod remapping;
pub use remapping::{RemappingEntry, UserRemapping};

mod direct_import;

mod cache;

mod dependency_map;

pub mod resolved_file;
pub use resolved_file::ResolvedFile;

pub mod import_extractor;
pub use import_extractor::{ImportExtractor, RegexImportExtractor};

pub mod resolver;
pub use resolver::{Resolver, HARDHAT_CONSOLE};

pub mod config;
pub use config::ResolverConfig;

pub mod graph;
pub use graph::resolve_project;

/// Utilities for creating and testing fake project/`node_modules` workspaces.
#[cfg(feature = "project-util")]
pub mod project_util;
