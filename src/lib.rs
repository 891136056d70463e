//! Core library for the chirpnet-species command line application.
//!
//! The library turns the European Red List of Birds workbook into the species
//! list consumed by the recording downloader. Responsibilities are kept narrow:
//! IO adapters live under [`chirpnet::species::io`], the record types inside
//! [`chirpnet::species::model`], the column projection and ordering in
//! [`chirpnet::species::clean`], and the end-to-end orchestration under
//! [`chirpnet::species::pipeline`].

pub mod chirpnet;

pub use chirpnet::species::{
    Result, SpeciesError, clean, config, error, io, logging, model, pipeline,
};
