//! Utilities for error handling

use std::{
    backtrace::{Backtrace, BacktraceStatus},
    fmt::Display,
};

use downcast_rs::{impl_downcast, DowncastSync};
use thiserror::Error;

use crate::provenance::{HasProvenance, Provenance};

/// The kinds of errors the token model reports.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A payload accessor was used on a token of a different kind.
    /// This is a programming error in the caller: check the kind first.
    #[error("invalid payload access")]
    InvalidAccess,
    /// Inconsistent or invalid argument(s) passed to a token function.
    #[error("invalid argument")]
    InvalidArgument,
}

/// An error object that can hold any [std::error::Error].
#[derive(Debug)]
pub struct Error {
    /// The kind of error this is
    pub kind: ErrorKind,
    /// The actual error object describing the error
    pub err: Box<dyn LexError>,
    /// Where the token involved in this error came from
    pub provenance: Provenance,
    /// Details of how this error occurred
    pub backtrace: Backtrace,
}

impl Error {
    /// Get a [Display]'able report that includes the [Provenance] and,
    /// if one was captured, the [Backtrace].
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

/// This does not print [Provenance] or [Backtrace]. Use [Error::report] for that.
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token error: {}.\n{}", self.kind, self.err)
    }
}

pub trait LexError: std::error::Error + DowncastSync {}

impl<T: std::error::Error + Send + Sync + 'static> LexError for T {}

impl_downcast!(sync LexError);

impl std::error::Error for Error {}

impl HasProvenance for Error {
    fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}

/// See [Error::report].
pub struct Report<'e>(&'e Error);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let error = self.0;
        writeln!(f, "[{}] Token error: {}.", error.provenance, error.kind)?;

        write!(f, "{}", error.err)?;
        if error.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nError backtrace:\n{}", error.backtrace)?;
        }

        Ok(())
    }
}

/// Type alias for [std::result::Result] with the error type set to [struct@Error]
pub type Result<T> = std::result::Result<T, Error>;

#[doc(hidden)]
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

/// Specify [ErrorKind] and create [struct@Error] from any [std::error::Error] object.
/// To create [Result], use [create_err!](crate::create_err) instead.
/// The macro also accepts [format!] like arguments to create one-off errors.
/// The first argument is anything convertible into a [Provenance].
/// It may be shorter to just use [access_error!](crate::access_error)
/// or [arg_error!](crate::arg_error) instead.
#[macro_export]
macro_rules! create_error {
    ($prov: expr, $kind: expr, $str: literal $($t:tt)*) => {
        $crate::create_error!($prov, $kind, $crate::result::StringError(format!($str $($t)*)))
    };
    ($prov: expr, $kind: expr, $err: expr) => {
        $crate::result::Error {
            kind: $kind,
            err: Box::new($err),
            provenance: $crate::provenance::Provenance::from($prov),
            backtrace: std::backtrace::Backtrace::capture(),
        }
    };
}

/// Specify [ErrorKind] and create [Result] from any [std::error::Error] object.
/// To create [struct@Error], use [create_error!](crate::create_error) instead.
/// The macro also accepts [format!] like arguments to create one-off errors.
#[macro_export]
macro_rules! create_err {
    ($prov: expr, $kind: expr, $str: literal $($t:tt)*) => {
        $crate::create_err!($prov, $kind, $crate::result::StringError(format!($str $($t)*)))
    };
    ($prov: expr, $kind: expr, $err: expr) => {
        Err($crate::create_error!($prov, $kind, $err))
    };
}

/// Create [ErrorKind::InvalidAccess] [struct@Error] from any [std::error::Error] object.
/// The macro also accepts [format!] like arguments to create one-off errors.
/// ```rust
/// use thiserror::Error;
/// use lexis::{access_error, result::{ErrorKind, Error}};
///
/// #[derive(Error, Debug)]
/// #[error("sample error")]
/// pub struct SampleErr;
///
/// assert!(
///     matches!(
///         access_error!("<noinfo>", SampleErr),
///         Error {
///            kind: ErrorKind::InvalidAccess,
///            err,
///            ..
///         } if err.is::<SampleErr>()
/// ));
///
/// let res_msg: Error = access_error!("a + b", "Some formatted {}", 0);
/// assert_eq!(
///     res_msg.err.to_string(),
///     "Some formatted 0"
/// );
/// assert_eq!(res_msg.provenance.as_str(), "a + b");
/// ```
#[macro_export]
macro_rules! access_error {
    ($prov: expr, $($t:tt)*) => {
        $crate::create_error!($prov, $crate::result::ErrorKind::InvalidAccess, $($t)*)
    }
}

/// Create [ErrorKind::InvalidArgument] [struct@Error] from any [std::error::Error] object.
/// To create [Result], use [arg_err!](crate::arg_err) instead.
/// The macro also accepts [format!] like arguments to create one-off errors.
/// ```rust
/// use lexis::{arg_error, result::{ErrorKind, Error}};
///
/// let res_msg: Error = arg_error!("1.5e", "Some formatted {}", 0);
/// assert_eq!(res_msg.kind, ErrorKind::InvalidArgument);
/// assert_eq!(
///     res_msg.err.to_string(),
///     "Some formatted 0"
/// );
/// ```
#[macro_export]
macro_rules! arg_error {
    ($prov: expr, $($t:tt)*) => {
        $crate::create_error!($prov, $crate::result::ErrorKind::InvalidArgument, $($t)*)
    }
}

/// Create [ErrorKind::InvalidArgument] [Result] from any [std::error::Error] object.
/// To create [struct@Error], use [arg_error!](crate::arg_error) instead.
/// The macro also accepts [format!] like arguments to create one-off errors.
/// ```rust
/// use lexis::{arg_err, result::{Result, ErrorKind, Error}};
///
/// fn parse_digit(c: char) -> Result<u32> {
///     match c.to_digit(10) {
///         Some(d) => Ok(d),
///         None => arg_err!(c.to_string(), "{} is not a digit", c),
///     }
/// }
///
/// assert_eq!(parse_digit('7').ok(), Some(7));
/// assert!(matches!(
///     parse_digit('x'),
///     Err(Error { kind: ErrorKind::InvalidArgument, .. })
/// ));
/// ```
#[macro_export]
macro_rules! arg_err {
    ($prov: expr, $($t:tt)*) => {
        $crate::create_err!($prov, $crate::result::ErrorKind::InvalidArgument, $($t)*)
    }
}

/// Same as [arg_err] but when nothing is known about the origin.
#[macro_export]
macro_rules! arg_err_noinfo {
    ($($t:tt)*) => {
        $crate::create_err!($crate::provenance::Provenance::default(), $crate::result::ErrorKind::InvalidArgument, $($t)*)
    }
}
