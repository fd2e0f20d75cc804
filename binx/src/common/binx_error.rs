// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::path::PathBuf;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// Works hand in hand w/ [`BinxError`] and any other type of error that implements
/// [`miette::Diagnostic`].
pub type CommonResult<T> = miette::Result<T>;

/// Fatal errors. These all happen before (or instead of) the interactive session, and
/// end up on stderr via the global miette report handler. Errors that happen while the
/// user is typing (bad seek offset, bad search pattern) are not here, they are turned
/// into status text by the reducer.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum BinxError {
    #[error("Failed to read file {}", path.display())]
    #[diagnostic(
        code(binx::file_read),
        help("Check that the file exists and that you have permission to read it")
    )]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize the terminal")]
    #[diagnostic(
        code(binx::terminal_init),
        help("binx needs an interactive terminal (TTY) for both stdin and stdout")
    )]
    TerminalInit(#[source] std::io::Error),

    #[error("Terminal I/O failed: {operation}")]
    #[diagnostic(code(binx::terminal_io))]
    TerminalIo {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Viewport width must be at least 1")]
    #[diagnostic(code(binx::invalid_viewport_width), help("Pass a positive value to --width"))]
    InvalidViewportWidth,
}

impl BinxError {
    pub fn terminal_io(operation: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::TerminalIo { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_file_read_error_message_and_code() {
        let err = BinxError::FileRead {
            path: PathBuf::from("/no/such/file.bin"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq2!(err.to_string(), "Failed to read file /no/such/file.bin");
        assert_eq2!(
            err.code().map(|it| it.to_string()),
            Some("binx::file_read".to_string())
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_terminal_io_constructor() {
        let make_err = BinxError::terminal_io("flush");
        let err = make_err(std::io::Error::other("broken pipe"));
        assert_eq2!(err.to_string(), "Terminal I/O failed: flush");
    }
}
