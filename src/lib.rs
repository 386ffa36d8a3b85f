//! # django-ts-generator
//!
//! A CLI tool and library for generating TypeScript interfaces from Django models.
//!
//! The generator walks a backend source tree, finds model classes in each
//! `models.py` (or `models/` package), and writes one `.ts` file per source
//! file with an `export interface` per model:
//!
//! ```text
//! class Course(models.Model):                export interface Course {
//!     name = models.CharField(max_length=50)   name?: string;
//!     teacher = models.ForeignKey(User, ...)    teacher?: number;
//!     tags = models.ManyToManyField(Tag)        tags?: number[];
//!                                             }
//! ```
//!
//! Field constructors are mapped through a static table (see [`known_types`]);
//! unknown constructors become `any`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use django_ts_generator::config::Config;
//! use django_ts_generator::pipeline::Pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load(std::path::Path::new("django-ts.toml"))?;
//!     let summary = Pipeline::new(false).run(&config)?;
//!     println!("{} interfaces generated", summary.interfaces);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod known_types;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod utils;
