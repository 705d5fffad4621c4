// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace for INI files and a fluent
// builder so each integration test can set up isolated input files without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use inifile::cli::GlobalOpts;
use inifile::logging::Logger;

/// Canonical SSH-style sample used across the integration tests.
pub const SSH_CONFIG: &str = include_str!("../fixtures/ssh_config.ini");

/// Same content as [`SSH_CONFIG`] with comments, odd spacing and an extra key.
pub const MESSY: &str = include_str!("../fixtures/messy.ini");

/// An isolated working directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory holding the test files.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new, empty context.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        Self { root }
    }

    /// Path of `name` inside the context.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Read `name` back as a string.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("read test file")
    }

    /// Global CLI options with the given strictness and no options file.
    pub fn global(&self, lenient: bool) -> GlobalOpts {
        GlobalOpts {
            lenient,
            options: None,
        }
    }

    /// Logger for command runs.
    pub fn log(&self) -> Logger {
        Logger::new()
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new, empty context.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `content` to `<root>/<filename>`.
    pub fn with_file(self, filename: &str, content: &str) -> Self {
        write_file(&self.ctx.path(filename), content);
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write test file");
}
