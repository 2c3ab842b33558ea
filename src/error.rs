use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Absent elements and attributes are never errors, they resolve to documented defaults. Only
/// input whose structure cannot be understood at all surfaces as an error, and it is returned
/// to the caller immediately.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::Malformed`] - Corrupted or invalid file structure
/// - [`Error::Xml`] - The XML reader rejected the project file
/// - [`Error::InvalidUri`] - A `RepositoryUrl` value is not an absolute URI
/// - [`Error::Empty`] - Empty input provided
///
/// ## Capability Errors
/// - [`Error::NotSupported`] - The solution parser cannot handle the requested input
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Error`] - Miscellaneous failures
///
/// # Examples
///
/// ```rust,no_run
/// use slnscope::{Error, Solution};
///
/// match Solution::from_path("MySolution.sln") {
///     Ok(solution) => println!("{} projects", solution.projects().len()),
///     Err(Error::NotSupported) => eprintln!("Solution format is not supported"),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed solution: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The file is damaged and could not be parsed.
    ///
    /// Raised for solution files with a missing header or an unreadable project declaration,
    /// for XML that cannot be assembled into an element tree, and for text that cannot be
    /// decoded. The error includes the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The requested operation is not supported.
    ///
    /// Returned by solution parsers that cannot read from an in-memory stream, and for
    /// solution files whose format version predates the supported line format.
    #[error("This operation is not supported")]
    NotSupported,

    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations
    /// such as reading from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Error reported by the XML reader while reading a project file.
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    /// A `RepositoryUrl` element holds text that is not an absolute URI.
    #[error("Invalid repository url - {0}")]
    InvalidUri(#[from] url::ParseError),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories, such as loader
    /// preconditions that were not met.
    #[error("{0}")]
    Error(String),
}
